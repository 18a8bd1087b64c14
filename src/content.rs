//! Static page content: skills, projects, contact details, home stats and
//! the app mockups shown on the demos page.

use std::fmt;

use crate::error::ContactError;
use crate::intro::ease_out_quad;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    /// Proficiency, 0 to 100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, icon: &'static str, level: u8) -> Skill {
    Skill { name, icon, level }
}

pub static SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        title: "Frontend Development",
        icon: "ph:browser-bold",
        description: "Creating stunning, responsive user interfaces with modern frameworks and tools.",
        skills: &[
            skill("React", "logos:react", 95),
            skill("Next.js", "logos:nextjs-icon", 90),
            skill("Vue.js", "logos:vue", 85),
            skill("TypeScript", "logos:typescript-icon", 90),
            skill("Tailwind CSS", "logos:tailwindcss-icon", 95),
            skill("GSAP", "logos:greensock-icon", 88),
        ],
    },
    SkillCategory {
        title: "Mobile Development",
        icon: "ph:device-mobile-bold",
        description: "Building native and cross-platform mobile applications.",
        skills: &[
            skill("React Native", "logos:react", 88),
            skill("iOS (Swift)", "logos:swift", 75),
            skill("Android (Kotlin)", "logos:kotlin-icon", 70),
            skill("Expo", "logos:expo-icon", 85),
        ],
    },
    SkillCategory {
        title: "Desktop Development",
        icon: "ph:desktop-bold",
        description: "Creating powerful cross-platform desktop applications.",
        skills: &[
            skill("Electron", "logos:electron", 85),
            skill("Tauri", "logos:tauri", 80),
            skill("Node.js", "logos:nodejs-icon", 90),
        ],
    },
    SkillCategory {
        title: "Backend & APIs",
        icon: "ph:database-bold",
        description: "Architecting scalable server-side solutions and APIs.",
        skills: &[
            skill("Node.js", "logos:nodejs-icon", 92),
            skill("Python", "logos:python", 80),
            skill("PostgreSQL", "logos:postgresql", 85),
            skill("MongoDB", "logos:mongodb-icon", 88),
            skill("GraphQL", "logos:graphql", 82),
            skill("REST APIs", "ph:plugs-connected-bold", 95),
        ],
    },
    SkillCategory {
        title: "DevOps & Tools",
        icon: "ph:gear-bold",
        description: "Deployment, automation, and development tooling.",
        skills: &[
            skill("Git", "logos:git-icon", 95),
            skill("Docker", "logos:docker-icon", 82),
            skill("AWS", "logos:aws", 78),
            skill("Vercel", "logos:vercel-icon", 90),
            skill("GitHub Actions", "logos:github-actions", 85),
        ],
    },
    SkillCategory {
        title: "Design & UI/UX",
        icon: "ph:paint-brush-bold",
        description: "Crafting beautiful, user-centered designs.",
        skills: &[
            skill("Figma", "logos:figma", 88),
            skill("Adobe XD", "logos:adobe-xd", 75),
            skill("UI Design", "ph:layout-bold", 85),
            skill("Motion Design", "ph:film-strip-bold", 80),
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Web,
    WebApp,
    Mobile,
    Desktop,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [Self::Web, Self::WebApp, Self::Mobile, Self::Desktop];

    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::WebApp => "Web App",
            Self::Mobile => "Mobile",
            Self::Desktop => "Desktop",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Mobile => "ph:device-mobile-bold",
            Self::Desktop => "ph:desktop-bold",
            Self::Web | Self::WebApp => "ph:globe-bold",
        }
    }
}

/// Project list filter; `None` shows everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectFilter(pub Option<ProjectCategory>);

impl ProjectFilter {
    pub fn options() -> impl Iterator<Item = ProjectFilter> {
        std::iter::once(Self(None)).chain(ProjectCategory::ALL.into_iter().map(|c| Self(Some(c))))
    }

    pub fn matches(self, project: &Project) -> bool {
        self.0.is_none() || self.0 == Some(project.category)
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.map(ProjectCategory::label).unwrap_or("All"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Live site, `None` for concept work.
    pub url: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub category: ProjectCategory,
    pub gradient: &'static str,
    pub features: &'static [&'static str],
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "Stuttgart International Collision",
        description: "A premium auto body and collision repair service website featuring modern design, seamless animations, and an intuitive booking system.",
        url: Some("https://stuttgartinternationalcollision.com/"),
        tags: &["Web Design", "React", "Responsive", "Business"],
        category: ProjectCategory::Web,
        gradient: "from-blue-600 via-blue-700 to-indigo-800",
        features: &["Custom Animations", "Booking System", "Mobile Optimized", "SEO Ready"],
    },
    Project {
        title: "Accident Assist Network",
        description: "A comprehensive accident assistance platform that connects users with legal and medical professionals through an intelligent matching system.",
        url: Some("https://accidentassistnetwork.com/"),
        tags: &["Web App", "Healthcare", "Legal Tech", "Platform"],
        category: ProjectCategory::WebApp,
        gradient: "from-emerald-600 via-teal-600 to-cyan-700",
        features: &["User Dashboard", "Provider Matching", "Case Management", "Secure Portal"],
    },
    Project {
        title: "FinTrack Mobile",
        description: "A sophisticated personal finance tracking application with real-time analytics, budget management, and investment portfolio tracking.",
        url: None,
        tags: &["Mobile App", "React Native", "Finance", "Analytics"],
        category: ProjectCategory::Mobile,
        gradient: "from-violet-600 via-purple-600 to-fuchsia-700",
        features: &["Expense Tracking", "Budget Alerts", "Investment View", "Bank Sync"],
    },
    Project {
        title: "CloudSync Desktop",
        description: "A powerful cross-platform desktop application for seamless file synchronization across devices with end-to-end encryption.",
        url: None,
        tags: &["Desktop App", "Electron", "Cloud", "Security"],
        category: ProjectCategory::Desktop,
        gradient: "from-orange-500 via-amber-500 to-yellow-600",
        features: &["Auto Sync", "E2E Encryption", "Version History", "Selective Sync"],
    },
];

pub fn projects(filter: ProjectFilter) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| filter.matches(p))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

impl ContactMethod {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub static CONTACT_METHODS: [ContactMethod; 3] = [
    ContactMethod {
        icon: "ph:envelope-bold",
        title: "Email",
        value: "kevinmoreau@kevco.co",
        href: "mailto:kevinmoreau@kevco.co",
        description: "Best for project inquiries",
    },
    ContactMethod {
        icon: "mdi:github",
        title: "GitHub",
        value: "@KevinTheGoat",
        href: "https://github.com/KevinTheGoat",
        description: "Check out my code",
    },
    ContactMethod {
        icon: "mdi:linkedin",
        title: "LinkedIn",
        value: "Connect with me",
        href: "#",
        description: "Professional network",
    },
];

pub static FAQS: [(&str, &str); 4] = [
    (
        "What services do you offer?",
        "I specialize in full-stack development including web applications, mobile apps (iOS/Android), desktop applications, and backend API development. I also offer UI/UX design services.",
    ),
    (
        "What is your typical project timeline?",
        "Project timelines vary based on complexity. A simple website might take 2-4 weeks, while a full-featured application could take 2-3 months. I provide detailed estimates after our initial consultation.",
    ),
    (
        "Do you offer ongoing maintenance?",
        "Yes! I offer maintenance packages to keep your application secure, updated, and running smoothly. This includes bug fixes, security updates, and minor feature additions.",
    ),
    (
        "What is your development process?",
        "I follow an agile approach: Discovery, Design, Development, Testing, Launch. You are involved at every stage with regular updates and opportunities for feedback.",
    ),
];

/// `(value, label)` pairs for the project type select.
pub static PROJECT_TYPES: [(&str, &str); 5] = [
    ("website", "Website Development"),
    ("webapp", "Web Application"),
    ("mobile", "Mobile App"),
    ("desktop", "Desktop Application"),
    ("other", "Other"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub project: String,
    pub message: String,
}

impl ContactForm {
    /// Checks the fields the form marks as required. Nothing is sent anywhere.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::Missing(field));
            }
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && domain.contains('.') => {}
            _ => return Err(ContactError::InvalidEmail(email.to_string())),
        }
        if !PROJECT_TYPES.iter().any(|(v, _)| *v == self.project) {
            return Err(ContactError::UnknownProjectType(self.project.clone()));
        }
        Ok(())
    }
}

/// A home page stat. Plain counts like `8+` or `100%` count up from zero,
/// anything else (`24/7`) is shown as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatValue {
    Count { target: u32, suffix: &'static str },
    Fixed(&'static str),
}

impl StatValue {
    pub fn parse(raw: &'static str) -> Self {
        let digits = raw.trim_end_matches(['+', '%']);
        match digits.parse::<u32>() {
            Ok(target) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                Self::Count {
                    target,
                    suffix: &raw[digits.len()..],
                }
            }
            _ => Self::Fixed(raw),
        }
    }

    /// Text to show at `progress` (0 to 1) through the count-up.
    pub fn display_at(self, progress: f64) -> String {
        match self {
            Self::Count { target, suffix } => {
                let eased = ease_out_quad(progress.clamp(0.0, 1.0));
                let shown = (f64::from(target) * eased).floor() as u32;
                format!("{}{suffix}", shown.min(target))
            }
            Self::Fixed(raw) => raw.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockTheme {
    pub bg: &'static str,
    pub surface: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileApp {
    pub name: &'static str,
    pub category: &'static str,
    pub theme: MockTheme,
}

pub static MOBILE_APPS: [MobileApp; 3] = [
    MobileApp {
        name: "Finance Tracker",
        category: "Banking",
        theme: MockTheme {
            bg: "#0a0a0a",
            surface: "#171717",
            accent: "#10b981",
            text: "#ffffff",
            muted: "#6b7280",
        },
    },
    MobileApp {
        name: "Social Connect",
        category: "Social Media",
        theme: MockTheme {
            bg: "#111827",
            surface: "#1f2937",
            accent: "#ec4899",
            text: "#ffffff",
            muted: "#9ca3af",
        },
    },
    MobileApp {
        name: "Health Monitor",
        category: "Healthcare",
        theme: MockTheme {
            bg: "#f8fafc",
            surface: "#ffffff",
            accent: "#0ea5e9",
            text: "#0f172a",
            muted: "#64748b",
        },
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopLayout {
    Editor,
    MediaEditor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopApp {
    pub name: &'static str,
    pub category: &'static str,
    pub layout: DesktopLayout,
    pub theme: MockTheme,
}

pub static DESKTOP_APPS: [DesktopApp; 2] = [
    DesktopApp {
        name: "CodeForge IDE",
        category: "Development",
        layout: DesktopLayout::Editor,
        theme: MockTheme {
            bg: "#1e1e2e",
            surface: "#313244",
            accent: "#89b4fa",
            text: "#cdd6f4",
            muted: "#6c7086",
        },
    },
    DesktopApp {
        name: "MediaStudio Pro",
        category: "Video Editing",
        layout: DesktopLayout::MediaEditor,
        theme: MockTheme {
            bg: "#0f0f0f",
            surface: "#1a1a1a",
            accent: "#a855f7",
            text: "#fafafa",
            muted: "#737373",
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_in_range() {
        for cat in &SKILL_CATEGORIES {
            assert!(!cat.skills.is_empty(), "{} has no skills", cat.title);
            assert!(cat.skills.iter().all(|s| s.level <= 100));
        }
    }

    #[test]
    fn test_project_filter() {
        assert_eq!(projects(ProjectFilter::default()).count(), PROJECTS.len());
        let mobile: Vec<_> = projects(ProjectFilter(Some(ProjectCategory::Mobile)))
            .map(|p| p.title)
            .collect();
        assert_eq!(mobile, ["FinTrack Mobile"]);
        // every category has at least one project behind it
        for cat in ProjectCategory::ALL {
            assert!(projects(ProjectFilter(Some(cat))).next().is_some());
        }
    }

    #[test]
    fn test_filter_labels() {
        let labels: Vec<_> = ProjectFilter::options().map(|f| f.to_string()).collect();
        assert_eq!(labels, ["All", "Web", "Web App", "Mobile", "Desktop"]);
    }

    #[test]
    fn test_contact_methods() {
        assert!(CONTACT_METHODS[1].is_external());
        assert!(!CONTACT_METHODS[0].is_external());
    }

    #[test]
    fn test_contact_form_validation() {
        let mut form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            project: "webapp".to_string(),
            message: "Hello".to_string(),
        };
        assert_eq!(form.validate(), Ok(()));

        form.message = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactError::Missing("message")));

        form.message = "Hello".to_string();
        form.email = "ada-at-example".to_string();
        assert!(matches!(
            form.validate(),
            Err(ContactError::InvalidEmail(_))
        ));

        form.email = "ada@example.com".to_string();
        form.project = String::new();
        assert_eq!(
            form.validate(),
            Err(ContactError::UnknownProjectType(String::new()))
        );
    }

    #[test]
    fn test_stat_parse() {
        assert_eq!(
            StatValue::parse("8+"),
            StatValue::Count {
                target: 8,
                suffix: "+"
            }
        );
        assert_eq!(
            StatValue::parse("100%"),
            StatValue::Count {
                target: 100,
                suffix: "%"
            }
        );
        assert_eq!(StatValue::parse("24/7"), StatValue::Fixed("24/7"));
        assert_eq!(StatValue::parse("+"), StatValue::Fixed("+"));
    }

    #[test]
    fn test_stat_count_up() {
        let stat = StatValue::parse("100%");
        assert_eq!(stat.display_at(0.0), "0%");
        assert_eq!(stat.display_at(1.0), "100%");
        assert_eq!(stat.display_at(2.0), "100%");
        assert_eq!(StatValue::parse("24/7").display_at(0.0), "24/7");
    }

    #[test]
    fn test_mockup_colours_are_hex() {
        let themes = MOBILE_APPS
            .iter()
            .map(|a| a.theme)
            .chain(DESKTOP_APPS.iter().map(|a| a.theme));
        for t in themes {
            for c in [t.bg, t.surface, t.accent, t.text, t.muted] {
                assert_eq!(c.len(), 7, "{c}");
                assert!(c.starts_with('#'));
                assert!(c[1..].bytes().all(|b| b.is_ascii_hexdigit()), "{c}");
            }
        }
        assert_eq!(
            DESKTOP_APPS.map(|a| a.layout),
            [DesktopLayout::Editor, DesktopLayout::MediaEditor]
        );
    }
}
