use crate::layout::Shell;
use crate::sections::{
    CertificationsSection, EducationSection, ExperienceSection, Hero, ProjectsSection,
    SkillsSection,
};
use crate::usecases::u101_contact_form::ContactSection;
use contracts::config::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Site settings (form endpoint, base path) for the whole page via context.
    provide_context(SiteConfig::default());

    view! {
        <Shell>
            <Hero />
            <EducationSection />
            <ExperienceSection />
            <ProjectsSection />
            <SkillsSection />
            <CertificationsSection />
            <ContactSection />
        </Shell>
    }
}
