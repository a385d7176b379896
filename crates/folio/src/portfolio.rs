//! The portfolio data model.
//!
//! A [`Portfolio`] is static for the lifetime of the process: it is either
//! the compiled-in sample or a TOML document merged over that sample. Only
//! project descriptions change at runtime, and those live in the
//! description cache, not here.

use std::path::Path;

use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};

/// The whole portfolio document, in presentation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    /// Who the portfolio belongs to.
    pub profile: Profile,
    /// Education and training entries.
    pub education: Vec<EducationEntry>,
    /// Skill categories.
    pub skills: Vec<SkillCategory>,
    /// Professional experience entries.
    pub experience: Vec<ExperienceEntry>,
    /// Showcased projects.
    pub projects: Vec<Project>,
    /// Quotes from colleagues or instructors.
    pub testimonials: Vec<Testimonial>,
}

/// Identity and contact information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// One-line professional tagline.
    pub tagline: String,
    /// About-me paragraphs, rendered in order.
    pub about: Vec<String>,
    /// Contact links.
    pub links: Vec<ContactLink>,
}

/// A labeled contact link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    /// Link label ("Email", "GitHub", ...).
    pub label: String,
    /// Link target.
    pub url: String,
}

/// One education or training entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Degree, program, or course title.
    pub title: String,
    /// What was covered.
    pub detail: String,
}

/// A named group of skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Category label.
    pub category: String,
    /// Skill labels, in display order.
    pub skills: Vec<String>,
}

/// One professional experience entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Role title.
    pub role: String,
    /// Time period ("2024 - present").
    pub period: String,
    /// Highlight bullets.
    pub highlights: Vec<String>,
}

/// A showcased project.
///
/// The `identifier` doubles as the remote address of the project's
/// `README.md`: `{content_host}/{identifier}/{branch}/README.md`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Opaque `owner/repo` key, unique within the portfolio.
    pub identifier: String,
    /// Display title.
    pub title: String,
    /// Static fallback summary, shown when no README can be fetched.
    pub summary: String,
    /// Category labels, in display order.
    pub tags: Vec<String>,
    /// Display asset reference.
    pub image: String,
    /// Estimated reading time label.
    pub read_time: String,
}

/// A testimonial quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    /// The quoted text.
    pub quote: String,
    /// Who said it.
    pub attribution: String,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::sample()
    }
}

impl Portfolio {
    /// The compiled-in sample portfolio.
    ///
    /// Used when no portfolio file is configured or present. Its projects
    /// point at well-known public repositories so remote description
    /// resolution works out of the box.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            profile: Profile {
                name: "Alex Ferris".to_string(),
                tagline: "Systems Programmer | Rust & Distributed Services".to_string(),
                about: vec![
                    "I build small, sharp tools and the services behind them."
                        .to_string(),
                    "Most of my work lives at the boundary between reliability \
                     engineering and developer experience: pipelines, caches, \
                     and the command-line interfaces that make them usable."
                        .to_string(),
                ],
                links: vec![
                    ContactLink {
                        label: "Email".to_string(),
                        url: "mailto:alex@example.net".to_string(),
                    },
                    ContactLink {
                        label: "GitHub".to_string(),
                        url: "https://github.com/alexferris".to_string(),
                    },
                    ContactLink {
                        label: "LinkedIn".to_string(),
                        url: "https://linkedin.com/in/alexferris".to_string(),
                    },
                ],
            },
            education: vec![
                EducationEntry {
                    title: "BSc in Computer Science".to_string(),
                    detail: "Algorithms, databases, operating systems, and \
                             computer networks, with a systems-programming focus."
                        .to_string(),
                },
                EducationEntry {
                    title: "Distributed Systems Summer School".to_string(),
                    detail: "Consensus, replication, and failure models, with a \
                             capstone on building a replicated log."
                        .to_string(),
                },
            ],
            skills: vec![
                SkillCategory {
                    category: "Languages".to_string(),
                    skills: vec![
                        "Rust".to_string(),
                        "Python".to_string(),
                        "SQL".to_string(),
                    ],
                },
                SkillCategory {
                    category: "Infrastructure".to_string(),
                    skills: vec![
                        "Linux".to_string(),
                        "PostgreSQL".to_string(),
                        "Kafka".to_string(),
                        "Kubernetes".to_string(),
                    ],
                },
                SkillCategory {
                    category: "Practices".to_string(),
                    skills: vec![
                        "Observability".to_string(),
                        "Incident response".to_string(),
                        "Performance profiling".to_string(),
                    ],
                },
            ],
            experience: vec![ExperienceEntry {
                role: "Infrastructure Engineer (Freelance)".to_string(),
                period: "2023 - present".to_string(),
                highlights: vec![
                    "Designed and operated ingestion pipelines moving tens of \
                     millions of events per day."
                        .to_string(),
                    "Cut tail latency of a content API by an order of magnitude \
                     with request coalescing and an in-process cache."
                        .to_string(),
                    "Built internal CLIs that turned runbook pages into single \
                     commands."
                        .to_string(),
                ],
            }],
            projects: vec![
                Project {
                    identifier: "BurntSushi/ripgrep".to_string(),
                    title: "ripgrep".to_string(),
                    summary: "A line-oriented search tool that recursively \
                              searches directories for a regex pattern while \
                              respecting gitignore rules."
                        .to_string(),
                    tags: vec![
                        "CLI".to_string(),
                        "Search".to_string(),
                        "Performance".to_string(),
                    ],
                    image: "assets/ripgrep.png".to_string(),
                    read_time: "4 min read".to_string(),
                },
                Project {
                    identifier: "tokio-rs/tokio".to_string(),
                    title: "Tokio".to_string(),
                    summary: "An event-driven, non-blocking I/O platform for \
                              writing asynchronous applications."
                        .to_string(),
                    tags: vec!["Async".to_string(), "Runtime".to_string()],
                    image: "assets/tokio.png".to_string(),
                    read_time: "6 min read".to_string(),
                },
                Project {
                    identifier: "serde-rs/serde".to_string(),
                    title: "Serde".to_string(),
                    summary: "A framework for serializing and deserializing \
                              Rust data structures efficiently and generically."
                        .to_string(),
                    tags: vec!["Serialization".to_string(), "Library".to_string()],
                    image: "assets/serde.png".to_string(),
                    read_time: "3 min read".to_string(),
                },
            ],
            testimonials: vec![
                Testimonial {
                    quote: "Consistently delivers work that is smaller, faster, \
                            and better documented than what was asked for."
                        .to_string(),
                    attribution: "Engineering lead, previous client".to_string(),
                },
                Testimonial {
                    quote: "Translates gnarly operational problems into tools \
                            the whole team actually enjoys using."
                        .to_string(),
                    attribution: "SRE teammate".to_string(),
                },
            ],
        }
    }

    /// Load the portfolio for the given configuration.
    ///
    /// Uses the configured portfolio file when one is set or present at
    /// the default location; falls back to the compiled-in sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the portfolio file cannot be parsed or fails
    /// validation.
    pub fn load(config: &Config) -> Result<Self> {
        match config.portfolio_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::sample()),
        }
    }

    /// Load a portfolio document from a TOML file, merged over the sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or fails validation.
    pub fn load_from(path: &Path) -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::sample()))
            .merge(Toml::file(path));

        let portfolio: Self = figment.extract().map_err(|source| Error::PortfolioLoad {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Validate the portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if any project identifier is malformed or
    /// duplicated.
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();

        for project in &self.projects {
            let identifier = project.identifier.trim();
            let parts: Vec<&str> = identifier.split('/').collect();

            if parts.len() != 2
                || parts.iter().any(|p| p.is_empty())
                || identifier.contains(char::is_whitespace)
            {
                return Err(Error::portfolio_validation(format!(
                    "project identifier '{}' is not of the form owner/repo",
                    project.identifier
                )));
            }

            if !seen.insert(identifier.to_string()) {
                return Err(Error::portfolio_validation(format!(
                    "duplicate project identifier '{identifier}'"
                )));
            }
        }

        Ok(())
    }

    /// Look up a project by identifier.
    #[must_use]
    pub fn project(&self, identifier: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.identifier == identifier)
    }
}

impl Project {
    /// The project's public repository URL.
    #[must_use]
    pub fn repository_url(&self) -> String {
        format!("https://github.com/{}", self.identifier)
    }
}
