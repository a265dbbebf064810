use leptos::prelude::*;

/// Site-wide moving diagonal lines behind all content
#[component]
pub fn Background() -> impl IntoView {
    view! {
        <div aria-hidden="true" class="background">
            <div class="background__lines"></div>
        </div>
    }
}
