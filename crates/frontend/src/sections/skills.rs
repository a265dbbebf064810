use crate::shared::components::SectionTitle;
use contracts::content::{Section, SKILLS};
use leptos::prelude::*;

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id=Section::Skills.anchor() class="section">
            <SectionTitle title=Section::Skills.title() />
            <div class="section__lines">
                {SKILLS.iter().map(|group| view! {
                    <p>
                        <span class="section__label">{group.category}":"</span>
                        " "{group.items_line()}
                    </p>
                }).collect_view()}
            </div>
        </section>
    }
}
