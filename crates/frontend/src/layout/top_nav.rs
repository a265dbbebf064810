use contracts::content::sections::NAV_LINKS;
use leptos::prelude::*;

/// Fixed top-right navigation to in-page anchors
#[component]
pub fn TopNav() -> impl IntoView {
    view! {
        <div data-zone="header" class="top-nav">
            <nav class="top-nav__links">
                {NAV_LINKS.iter().map(|(label, section)| view! {
                    <a href=section.href() class="top-nav__link">{*label}</a>
                }).collect_view()}
            </nav>
        </div>
    }
}
