use crate::shared::components::{Card, SectionTitle};
use contracts::content::{Section, EXPERIENCE};
use leptos::prelude::*;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id=Section::Experience.anchor() class="section">
            <SectionTitle title=Section::Experience.title() />
            <div class="section__list">
                {EXPERIENCE.iter().map(|job| view! {
                    <Card title=job.heading()>
                        <p class="card__meta">{job.period}</p>
                        <p class="card__text">{job.summary}</p>
                    </Card>
                }).collect_view()}
            </div>
        </section>
    }
}
