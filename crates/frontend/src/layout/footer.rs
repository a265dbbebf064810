use chrono::Datelike;
use leptos::prelude::*;

fn footer_line(year: i32, owner: &str) -> String {
    format!("© {} {} · Built with Rust & Leptos", year, owner)
}

#[component]
pub fn Footer(
    /// Name shown in the copyright line
    #[prop(into)]
    owner: String,
) -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer data-zone="footer" class="footer">
            {footer_line(year, &owner)}
        </footer>
    }
}
