use crate::shared::components::{Card, SectionTitle};
use contracts::content::{Section, PROJECTS};
use leptos::prelude::*;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=Section::Projects.anchor() class="section">
            <SectionTitle title=Section::Projects.title() />
            <div class="section__grid">
                {PROJECTS.iter().map(|project| view! {
                    <Card title=project.title>
                        <p class="card__text">{project.stack}</p>
                        <a
                            href=project.repository
                            target="_blank"
                            rel="noopener noreferrer"
                            class="card__link"
                        >
                            "View on GitHub"
                        </a>
                    </Card>
                }).collect_view()}
            </div>
        </section>
    }
}
