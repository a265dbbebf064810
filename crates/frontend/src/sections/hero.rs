use crate::shared::icons::social_icon;
use contracts::config::SiteConfig;
use contracts::content::{BioFragment, Emphasis, PROFILE};
use leptos::prelude::*;

fn bio_fragment(fragment: &BioFragment) -> AnyView {
    match fragment.emphasis {
        Emphasis::Plain => fragment.text.into_any(),
        Emphasis::Role => view! { <span class="hero__role">{fragment.text}</span> }.into_any(),
        Emphasis::Strong => view! { <span class="hero__strong">{fragment.text}</span> }.into_any(),
    }
}

/// Top of the page: name, biography, social links and photo
#[component]
pub fn Hero() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let background = config.asset_url(PROFILE.hero_background);
    let photo = config.asset_url(PROFILE.photo);

    view! {
        <section class="hero">
            <div class="hero__backdrop">
                <img src=background alt="Background keyboard" class="hero__backdrop-image" />
            </div>

            <div class="hero__content">
                <div class="hero__intro">
                    <h1 class="hero__title">
                        "Hi, I’m " <span class="hero__name">{PROFILE.name}</span>
                    </h1>
                    <p class="hero__bio">
                        {PROFILE.bio.iter().map(bio_fragment).collect_view()}
                    </p>
                    <div class="hero__socials">
                        {PROFILE.socials.iter().map(|link| view! {
                            <a
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="hero__social"
                                title=link.title
                            >
                                {social_icon(link.icon)}
                            </a>
                        }).collect_view()}
                    </div>
                </div>

                <div class="hero__photo">
                    <img src=photo alt=PROFILE.name class="hero__photo-image" />
                </div>
            </div>
        </section>
    }
}
