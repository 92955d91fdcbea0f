//! Read-only content consumed by the page templates: project entries,
//! skill groups and social links. No dynamic behavior.

use strum::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum ProjectStatus {
    #[strum(serialize = "live")]
    Live,
    #[strum(serialize = "ongoing")]
    Ongoing,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub demo_url: Option<&'static str>,
    pub code_url: Option<&'static str>,
    pub status: ProjectStatus,
}

pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0..=100, rendered as a bar width.
    pub level: u8,
}

pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [Skill],
}

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub fn projects() -> &'static [Project] {
    PROJECTS
}

pub fn skill_groups() -> &'static [SkillGroup] {
    SKILL_GROUPS
}

pub fn social_links() -> &'static [SocialLink] {
    SOCIAL_LINKS
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Yaphy Fitness (E-Commerce)",
        description: "E-commerce platform with cart, wishlist, discount coupons, product \
                      variations and a built-in blog. Server-side rendered for speed and SEO, \
                      with card payments and an admin dashboard for products, orders and content.",
        tags: &["E-Commerce", "SSR", "Payments", "Admin Dashboard"],
        demo_url: Some("https://www.yaphyfitness.com/"),
        code_url: Some("https://github.com/mukies/yaphy-fitness"),
        status: ProjectStatus::Live,
    },
    Project {
        title: "Mishisa (E-Commerce)",
        description: "Cosmetics storefront with rich product filtering and support for both \
                      partial and full payments, integrated with the eSewa and Khalti payment \
                      gateways for local transactions.",
        tags: &["E-Commerce", "Payment Gateways", "Filtering"],
        demo_url: Some("https://mishisa.com/"),
        code_url: Some("https://github.com/mukies/mishisa-cosmetic"),
        status: ProjectStatus::Live,
    },
    Project {
        title: "Invoice Generator",
        description: "Invoice builder with customizable templates: create, preview and export \
                      invoices as PDF or send them by email to streamline billing workflows.",
        tags: &["PDF Export", "Email", "Templates"],
        demo_url: Some("https://dummytools.com/"),
        code_url: Some("https://github.com/mukies/Invoice-generator-react"),
        status: ProjectStatus::Live,
    },
    Project {
        title: "Uplift Website (Company portfolio)",
        description: "Animated company portfolio, fully responsive with smooth motion and \
                      API-driven content so the marketing team can update it without deploys.",
        tags: &["Animations", "Responsive", "CMS-driven"],
        demo_url: Some("https://upliftsolutions.com.np/"),
        code_url: Some("https://github.com/mukies/uplift"),
        status: ProjectStatus::Live,
    },
    Project {
        title: "Nepal Trade Union Congress (NTUC)",
        description: "Content-rich organization website backed by an admin dashboard for \
                      managing dynamic content, news and documents.",
        tags: &["CMS", "Dashboard", "Content"],
        demo_url: Some("https://ntuc.org.np/"),
        code_url: Some("https://github.com/mukies/NTUC-frontend"),
        status: ProjectStatus::Live,
    },
];

const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend",
        items: &[
            Skill { name: "HTML/CSS", level: 98 },
            Skill { name: "TypeScript", level: 85 },
            Skill { name: "React", level: 95 },
            Skill { name: "Tailwind CSS", level: 92 },
            Skill { name: "Motion design", level: 88 },
        ],
    },
    SkillGroup {
        category: "Backend",
        items: &[
            Skill { name: "Rust", level: 80 },
            Skill { name: "Node.js", level: 85 },
            Skill { name: "REST APIs", level: 90 },
            Skill { name: "GraphQL", level: 78 },
            Skill { name: "MongoDB", level: 75 },
        ],
    },
    SkillGroup {
        category: "Tools",
        items: &[
            Skill { name: "Git", level: 95 },
            Skill { name: "Docker", level: 70 },
            Skill { name: "CI/CD", level: 75 },
            Skill { name: "Figma", level: 65 },
        ],
    },
];

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/mukies",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/mukesh-bhattarai-720238157/",
    },
    SocialLink {
        name: "X",
        url: "https://x.com/mukes_dev",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        for group in skill_groups() {
            for skill in group.items {
                assert!(skill.level <= 100, "{} level out of range", skill.name);
            }
        }
    }

    #[test]
    fn external_links_are_absolute() {
        for project in projects() {
            for url in [project.demo_url, project.code_url].into_iter().flatten() {
                assert!(url.starts_with("https://"), "{url} is not absolute");
            }
        }
        for social in social_links() {
            assert!(social.url.starts_with("https://"));
        }
    }
}
