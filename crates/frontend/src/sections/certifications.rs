use crate::shared::components::SectionTitle;
use contracts::content::{Section, CERTIFICATIONS};
use leptos::prelude::*;

#[component]
pub fn CertificationsSection() -> impl IntoView {
    view! {
        <section id=Section::Certifications.anchor() class="section">
            <SectionTitle title=Section::Certifications.title() />
            <div class="section__lines">
                {CERTIFICATIONS.iter().map(|name| view! { <p>"✔ "{*name}</p> }).collect_view()}
            </div>
        </section>
    }
}
