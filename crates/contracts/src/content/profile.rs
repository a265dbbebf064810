#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    /// Highlighted job title
    Role,
    Strong,
}

/// Piece of the biography paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BioFragment {
    pub text: &'static str,
    pub emphasis: Emphasis,
}

const fn plain(text: &'static str) -> BioFragment {
    BioFragment { text, emphasis: Emphasis::Plain }
}

const fn role(text: &'static str) -> BioFragment {
    BioFragment { text, emphasis: Emphasis::Role }
}

const fn strong(text: &'static str) -> BioFragment {
    BioFragment { text, emphasis: Emphasis::Strong }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    GitHub,
    LeetCode,
    LinkedIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: SocialIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub bio: &'static [BioFragment],
    pub photo: &'static str,
    pub hero_background: &'static str,
    pub socials: &'static [SocialLink],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub gpa: &'static str,
}

impl Education {
    /// "M.S. in Computer Science (2023 – 2025) · GPA: 3.7/4.0"
    pub fn summary(&self) -> String {
        format!("{} ({}) · GPA: {}", self.degree, self.period, self.gpa)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub employer: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

impl Experience {
    pub fn heading(&self) -> String {
        format!("{} · {}", self.role, self.employer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub stack: &'static str,
    pub repository: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

impl SkillGroup {
    pub fn items_line(&self) -> String {
        self.items.join(", ")
    }
}

const GITHUB: &str = "https://github.com/Saisirimallipeddi333";

pub const PROFILE: Profile = Profile {
    name: "Siri Mallipeddi",
    bio: &[
        plain("I am a "),
        role("Data Analyst"),
        plain(" passionate about uncovering insights that drive smarter decisions. My expertise spans"),
        strong(" SQL, Python, Excel, Power BI, Tableau,"),
        plain(" and"),
        strong(" Snowflake"),
        plain(
            ", with a strong focus on data visualization, reporting, and advanced analytics. \
             I’ve delivered solutions that improved reporting efficiency, reduced manual errors, \
             and enabled business teams to act on timely insights. In addition to core analytics, \
             I bring experience in AI-driven analysis from traditional Machine Learning to modern \
             Generative AI applying these technologies to make analytics more predictive, \
             adaptive, and impactful.",
        ),
    ],
    photo: "myphoto.jpg",
    hero_background: "keyboard-bg.jpg",
    socials: &[
        SocialLink {
            title: "GitHub",
            url: GITHUB,
            icon: SocialIcon::GitHub,
        },
        SocialLink {
            title: "LeetCode",
            url: "https://leetcode.com/u/Siri_Mallipeddi/",
            icon: SocialIcon::LeetCode,
        },
        SocialLink {
            title: "LinkedIn",
            url: "https://www.linkedin.com/in/sai-siri-mallipeddi",
            icon: SocialIcon::LinkedIn,
        },
    ],
};

pub const EDUCATION: &[Education] = &[
    Education {
        institution: "University of Central Missouri",
        degree: "M.S. in Computer Science",
        period: "2023 – 2025",
        gpa: "3.7/4.0",
    },
    Education {
        institution: "JNTU Kakinada",
        degree: "B.Tech in Computer Science",
        period: "2019 – 2023",
        gpa: "3.1/4.0",
    },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Data Analyst",
        employer: "MTA New York",
        period: "Jan 2025 – Present",
        summary: "Working on analytics & reporting systems, optimizing dashboards and ensuring data quality across multiple domains.",
    },
    Experience {
        role: "Data Analyst",
        employer: "BluePal",
        period: "2023 – 2024",
        summary: "Built data pipelines, created business dashboards, and collaborated with stakeholders for reporting automation.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "CampusConnect",
        stack: "Spring Boot, React, MySQL, JWT",
        repository: GITHUB,
    },
    Project {
        title: "Job Market Analyzer",
        stack: "Python, Pandas, Power BI",
        repository: GITHUB,
    },
];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages",
        items: &["Java", "Python", "SQL", "JavaScript"],
    },
    SkillGroup {
        category: "Frameworks",
        items: &["Spring Boot", "React", "Node.js"],
    },
    SkillGroup {
        category: "Databases",
        items: &["MySQL", "PostgreSQL", "Snowflake"],
    },
    SkillGroup {
        category: "Visualization",
        items: &["Power BI", "Tableau"],
    },
    SkillGroup {
        category: "Cloud & DevOps",
        items: &["AWS", "Docker", "GitHub"],
    },
];

pub const CERTIFICATIONS: &[&str] = &[
    "AWS Certified Cloud Practitioner",
    "Google Data Analytics Professional Certificate",
];
