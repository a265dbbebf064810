/// In-page anchors, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Education,
    Experience,
    Projects,
    Skills,
    Certifications,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Education,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Certifications,
        Section::Contact,
    ];

    /// Element id the section renders with
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Certifications => "certs",
            Section::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Technical Skills",
            Section::Certifications => "Certifications",
            Section::Contact => "Get in Touch",
        }
    }
}

/// Top navigation: (label, target)
pub const NAV_LINKS: [(&str, Section); 2] = [
    ("About", Section::Education),
    ("Let’s Connect", Section::Contact),
];
