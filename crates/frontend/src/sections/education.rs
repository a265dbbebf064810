use crate::shared::components::{Card, SectionTitle};
use contracts::content::{Section, EDUCATION};
use leptos::prelude::*;

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section id=Section::Education.anchor() class="section section--first">
            <SectionTitle title=Section::Education.title() />
            <div class="section__list">
                {EDUCATION.iter().map(|entry| view! {
                    <Card title=entry.institution>
                        <p class="card__text">{entry.summary()}</p>
                    </Card>
                }).collect_view()}
            </div>
        </section>
    }
}
