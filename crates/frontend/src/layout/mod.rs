pub mod background;
pub mod footer;
pub mod top_nav;

use background::Background;
use contracts::config::SiteConfig;
use footer::Footer;
use leptos::prelude::*;
use top_nav::TopNav;

/// Page shell, dark mode only.
///
/// ```text
/// +------------------------------------------+
/// |  Background (fixed)         TopNav       |
/// |                                          |
/// |              content                     |
/// |                                          |
/// |              Footer                      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <main class="app-layout">
            <Background />
            <TopNav />
            {children()}
            <Footer owner=config.owner_name />
        </main>
    }
}
