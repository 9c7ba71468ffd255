//! Static portfolio content rendered by the page.

use std::time::Duration;

pub const OWNER: &str = "Pratik Shinde";
pub const EMAIL: &str = "ps175581@gmail.com";
pub const GITHUB: &str = "https://github.com/pratikshinde";
pub const LINKEDIN: &str = "https://linkedin.com/in/pratikshinde";

pub const HERO_SUBTITLE: &str = "Software Engineer · Backend & Cloud";
pub const HERO_DESCRIPTION: &str = "I design and build reliable services, \
     data pipelines and the occasional web interface. Welcome to my corner of the internet.";

pub const RESUME_PREP_DELAY: Duration = Duration::from_millis(1000);
pub const RESUME_LABEL: &str = "Download Resume";
pub const RESUME_PREPARING_LABEL: &str = "Preparing...";
pub const RESUME_NOTICE: &str = "📄 Resume download is ready!\n\n\
     To enable the actual download, please:\n\
     1. Upload Resume-Pratik.pdf to your server\n\
     2. Update the download link in the HTML\n\n\
     For now, you can contact Pratik directly at ps175581@gmail.com for his resume.";

/// A page section reachable from the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavSection {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection { id: "home", label: "Home" },
    NavSection { id: "about", label: "About" },
    NavSection { id: "skills", label: "Skills" },
    NavSection { id: "projects", label: "Projects" },
    NavSection { id: "experience", label: "Experience" },
    NavSection { id: "education", label: "Education" },
    NavSection { id: "contact", label: "Contact" },
];

pub const ABOUT: &[&str] = &[
    "I'm a software engineer who enjoys turning vague problems into small, well-tested systems.",
    "Most of my work lives on the backend: APIs, queues, databases and the infrastructure that keeps them running.",
    "Outside of work I contribute to open source, read about distributed systems and spend too long tuning my editor.",
];

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        icon: "💻",
        title: "Languages",
        items: &["Rust", "Python", "Java", "TypeScript", "SQL"],
    },
    SkillGroup {
        icon: "⚙️",
        title: "Backend",
        items: &["Axum", "Spring Boot", "Django", "PostgreSQL", "Redis"],
    },
    SkillGroup {
        icon: "☁️",
        title: "Cloud & DevOps",
        items: &["AWS", "Docker", "Kubernetes", "Terraform", "GitHub Actions"],
    },
    SkillGroup {
        icon: "🎨",
        title: "Frontend",
        items: &["Leptos", "React", "HTML", "CSS", "Tailwind"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Realtime Order Tracker",
        description: "Event-driven service streaming order status updates to thousands of clients over websockets.",
        tech: &["Rust", "Tokio", "Redis", "WebSockets"],
        link: None,
    },
    Project {
        title: "Expense Insights",
        description: "Budget analytics dashboard that categorises bank exports and highlights recurring spend.",
        tech: &["Python", "Django", "PostgreSQL", "Chart.js"],
        link: None,
    },
    Project {
        title: "Infra Blueprints",
        description: "Reusable Terraform modules for spinning up observable, autoscaling container services.",
        tech: &["Terraform", "AWS", "Docker"],
        link: None,
    },
    Project {
        title: "This Portfolio",
        description: "Server-rendered and hydrated single page written in Rust with Leptos.",
        tech: &["Rust", "Leptos", "WebAssembly", "Tailwind"],
        link: Some("https://github.com/pratikshinde"),
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Software Engineer",
        company: "Cloudline Systems",
        period: "2023 – Present",
        highlights: &[
            "Own the payments ingestion service handling millions of events per day",
            "Cut p99 latency by 40% by moving hot paths from Python to Rust",
        ],
    },
    Experience {
        role: "Backend Developer",
        company: "Brightpath Labs",
        period: "2021 – 2023",
        highlights: &[
            "Built REST and GraphQL APIs for a logistics platform",
            "Introduced CI pipelines and containerised deployments",
        ],
    },
    Experience {
        role: "Software Engineering Intern",
        company: "Nexa Analytics",
        period: "2020 – 2021",
        highlights: &["Automated reporting jobs and data quality checks"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
    pub detail: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "M.S. Computer Science",
        school: "State University",
        period: "2019 – 2021",
        detail: "Distributed systems and databases",
    },
    Education {
        degree: "B.E. Computer Engineering",
        school: "University of Pune",
        period: "2015 – 2019",
        detail: "Graduated with distinction",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::anchor_target;
    use std::collections::HashSet;

    #[test]
    fn test_nav_sections_are_unique_anchors() {
        let ids = NAV_SECTIONS.iter().map(|s| s.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), NAV_SECTIONS.len());
        for section in NAV_SECTIONS {
            let href = section.href();
            assert_eq!(anchor_target(&href), Some(href.as_str()));
        }
    }

    #[test]
    fn test_hero_targets_exist() {
        assert!(NAV_SECTIONS.iter().any(|s| s.id == "projects"));
        assert!(NAV_SECTIONS.iter().any(|s| s.id == "contact"));
    }
}
