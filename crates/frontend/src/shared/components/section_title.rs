use leptos::prelude::*;

/// Centered heading used at the top of every page section
#[component]
pub fn SectionTitle(
    #[prop(into)]
    title: String,

    /// Optional line under the title
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="section-title">
            <h2 class="section-title__heading">{title}</h2>
            {move || subtitle.get().map(|s| view! {
                <p class="section-title__subtitle">{s}</p>
            })}
        </div>
    }
}
