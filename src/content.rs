//! Static site content
//!
//! The catalog rendered by the page: services, projects grouped by tab, tech
//! stack, stats, testimonials and pricing. The built-in catalog can be
//! replaced by a JSON file with the same shape.

use crate::counter::CounterTarget;
use crate::error::Result;
use crate::nav::Section;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// A service card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Card title
    pub title: String,
    /// Card body
    pub description: String,
}

/// Project catalog tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectTab {
    /// Web applications
    Web,
    /// Mobile applications
    Mobile,
    /// AI/ML projects
    Ai,
}

impl ProjectTab {
    /// Tabs in display order
    pub const ALL: [ProjectTab; 3] = [ProjectTab::Web, ProjectTab::Mobile, ProjectTab::Ai];

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            ProjectTab::Web => "Web",
            ProjectTab::Mobile => "Mobile",
            ProjectTab::Ai => "Ai",
        }
    }

    /// Tab at display position `index`
    pub fn from_index(index: usize) -> Option<ProjectTab> {
        Self::ALL.get(index).copied()
    }
}

/// A showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Tab this project is listed under
    pub tab: ProjectTab,
    /// Project name
    pub title: String,
    /// Live demo or details page
    pub link: String,
    /// Short pitch
    pub description: String,
    /// Technology tags
    pub tags: Vec<String>,
}

/// A labelled count-up figure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// Caption under the number
    pub label: String,
    /// Number to count up to
    pub counter: CounterTarget,
}

impl Stat {
    fn new(end: u64, suffix: &str, label: &str) -> Self {
        Self {
            label: label.to_string(),
            counter: CounterTarget::new(end).with_suffix(suffix),
        }
    }
}

/// A customer quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Customer name
    pub name: String,
    /// Course or role
    pub course: String,
    /// Quote
    pub text: String,
    /// Initials shown in the avatar bubble
    pub avatar: String,
    /// Stars out of 5
    pub rating: u8,
}

/// A pricing plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan name
    pub name: String,
    /// Display price
    pub price: String,
    /// Included features
    pub features: Vec<String>,
    /// Highlighted as the recommended plan
    #[serde(default)]
    pub popular: bool,
}

/// Everything the page renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Brand name
    pub brand: String,
    /// Line under the brand
    pub tagline: String,
    /// Hero badge text
    pub hero_badge: String,
    /// Hero headline
    pub hero_title: String,
    /// Hero sub-headline
    pub hero_subtitle: String,
    /// Figures under the hero
    pub hero_stats: Vec<Stat>,
    /// Service cards
    pub services: Vec<Service>,
    /// Project catalog
    pub projects: Vec<Project>,
    /// Tech stack labels
    pub technologies: Vec<String>,
    /// Stats band
    pub stats: Vec<Stat>,
    /// Customer quotes
    pub testimonials: Vec<Testimonial>,
    /// Pricing plans
    pub plans: Vec<Plan>,
    /// Selling points next to the contact form
    pub contact_highlights: Vec<String>,
}

impl Project {
    /// Absolute URL of the project link, resolving site-relative links against `site_url`
    ///
    /// Returns `None` for a relative link when no site URL is configured.
    pub fn resolved_link(&self, site_url: &str) -> Option<String> {
        if self.link.starts_with("http://") || self.link.starts_with("https://") {
            return Some(self.link.clone());
        }
        let base = site_url.trim_end_matches('/');
        if base.is_empty() {
            return None;
        }
        Some(format!("{base}/{}", self.link.trim_start_matches('/')))
    }
}

impl SiteContent {
    /// Projects listed under `tab`
    pub fn projects_in(&self, tab: ProjectTab) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(move |p| p.tab == tab)
    }

    /// Count-up figures shown in `section`; empty for sections without any
    pub fn counters_for(&self, section: Section) -> &[Stat] {
        match section {
            Section::Home => &self.hero_stats,
            Section::Stats => &self.stats,
            _ => &[],
        }
    }

    /// Read a catalog from `path`
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let content = serde_json::from_str(&json)?;
        info!("Site content loaded from {}", path.display());
        Ok(content)
    }

    /// Read a catalog from `path`, falling back to the built-in one
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "Failed to load site content from {}, using built-in catalog: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn project(tab: ProjectTab, title: &str, link: &str, description: &str, tags: &[&str]) -> Project {
    Project {
        tab,
        title: title.to_string(),
        link: link.to_string(),
        description: description.to_string(),
        tags: strings(tags),
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: "ProjectTown".to_string(),
            tagline: "Academic Excellence".to_string(),
            hero_badge: "15+ Projects Delivered • 24/7 Support".to_string(),
            hero_title: "Premium Academic Projects".to_string(),
            hero_subtitle: "Empower your academic success with complete source code, \
                            professional documentation, and expert guidance."
                .to_string(),
            hero_stats: vec![
                Stat::new(15, "+", "Projects"),
                Stat::new(98, "%", "Success Rate"),
                Stat::new(48, "hrs", "Delivery"),
            ],
            services: vec![
                Service {
                    title: "Web Applications".to_string(),
                    description: "Full-stack solutions with React, Node.js, and modern frameworks. \
                                  Responsive design with cutting-edge technologies."
                        .to_string(),
                },
                Service {
                    title: "Mobile Apps".to_string(),
                    description: "Native Android and cross-platform Flutter applications. \
                                  Smooth UX and modern design patterns."
                        .to_string(),
                },
                Service {
                    title: "Desktop Software".to_string(),
                    description: "Java Swing, C# WPF, and Electron desktop applications. \
                                  Professional-grade desktop solutions."
                        .to_string(),
                },
                Service {
                    title: "AI/ML Projects".to_string(),
                    description: "Python-based ML solutions with TensorFlow and NLP. \
                                  Intelligent systems and data-driven applications."
                        .to_string(),
                },
            ],
            projects: vec![
                project(
                    ProjectTab::Web,
                    "AutoAssure – AI Car Marketplace",
                    "https://autoassure.vercel.app/",
                    "Car marketplace with real-time auctions, AI chatbot, and secure payments.",
                    &["Next.js", "Supabase", "AI", "Razorpay"],
                ),
                project(
                    ProjectTab::Web,
                    "TestForge - Exam Platform",
                    "https://testforge.vercel.app/",
                    "Exam conduction platform with automated reporting.",
                    &["React", "Node.js", "MongoDB"],
                ),
                project(
                    ProjectTab::Mobile,
                    "CrimeReport – Security System",
                    "https://crime-report-beta.vercel.app/",
                    "Flutter-based crime reporting system with real-time tracking.",
                    &["Flutter", "Firebase", "Web"],
                ),
                project(
                    ProjectTab::Ai,
                    "HireSphere – AI Career Planner",
                    "https://hiresphere-gamma.vercel.app/",
                    "AI-driven career navigation with personalized learning paths.",
                    &["AI", "Next.js", "Gemini"],
                ),
                project(
                    ProjectTab::Ai,
                    "Travzi – Travel Planner",
                    "/projects/travzi",
                    "Intelligent itinerary generator with real-time insights.",
                    &["AI", "React", "Maps"],
                ),
            ],
            technologies: strings(&[
                "React",
                "Node.js",
                "Python",
                "MongoDB",
                "Flutter",
                "Android",
                "Next.js",
                "TypeScript",
                "Supabase",
                "Flask",
                "Firebase",
                "React Native",
            ]),
            stats: vec![
                Stat::new(15, "+", "Projects Delivered"),
                Stat::new(100, "+", "Students Helped"),
                Stat::new(98, "%", "Success Rate"),
                Stat::new(48, "hrs", "Avg Delivery"),
            ],
            testimonials: vec![
                Testimonial {
                    name: "Rahul S.".to_string(),
                    course: "B.Tech Computer Science".to_string(),
                    text: "Received my web application project within 24 hours. The code was \
                           clean, documentation thorough, and scored 9.8/10 in my final evaluation!"
                        .to_string(),
                    avatar: "RS".to_string(),
                    rating: 5,
                },
                Testimonial {
                    name: "Priya P.".to_string(),
                    course: "MCA Final Year".to_string(),
                    text: "The Flutter mobile app they delivered was flawless. Great support \
                           throughout the project and excellent viva preparation guidance."
                        .to_string(),
                    avatar: "PP".to_string(),
                    rating: 5,
                },
                Testimonial {
                    name: "Amit K.".to_string(),
                    course: "BCA Data Science".to_string(),
                    text: "Custom AI/ML project impressed my professor. Complete source code \
                           with LaTeX report helped me understand every aspect clearly."
                        .to_string(),
                    avatar: "AK".to_string(),
                    rating: 5,
                },
            ],
            plans: vec![
                Plan {
                    name: "Essential".to_string(),
                    price: "₹4000".to_string(),
                    features: strings(&[
                        "Complete Source Code",
                        "Basic Documentation",
                        "48-hour Delivery",
                        "Email Support",
                        "Setup Instructions",
                    ]),
                    popular: false,
                },
                Plan {
                    name: "Complete".to_string(),
                    price: "₹5000".to_string(),
                    features: strings(&[
                        "Complete Source Code",
                        "Professional LaTeX Report",
                        "Full Setup Assistance",
                        "Viva Preparation Guide",
                        "Priority 24/7 Support",
                        "1 Week Revision Support",
                        "Deployment Assistance",
                    ]),
                    popular: true,
                },
            ],
            contact_highlights: strings(&[
                "24/7 Student Support",
                "Free Viva Preparation",
                "Complete Documentation",
                "On-time Delivery Guarantee",
            ]),
        }
    }
}
