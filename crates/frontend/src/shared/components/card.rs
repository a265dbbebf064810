use leptos::prelude::*;

/// Bordered panel used by the education, experience and project lists
#[component]
pub fn Card(
    /// Card heading
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card__title">{title}</h3>
            {children()}
        </div>
    }
}
