pub mod certifications;
pub mod education;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;

pub use certifications::CertificationsSection;
pub use education::EducationSection;
pub use experience::ExperienceSection;
pub use hero::Hero;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
