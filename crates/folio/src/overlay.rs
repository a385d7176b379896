//! The project detail overlay.
//!
//! A deliberately minimal state machine: `Closed`, or `Open` on exactly
//! one project. Opening is only possible from `Closed` and dismissing
//! only from `Open`; there are no other transitions. The overlay never
//! triggers fetching - resolution starts eagerly for every project at
//! load time - it only renders whatever the cache holds right now.

use crate::cache::DescriptionCache;
use crate::markdown;
use crate::portfolio::Portfolio;

/// Placeholder shown while the selected project's README is unresolved.
pub const LOADING_README: &str = "Loading README...";

/// The detail overlay state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    /// No project selected.
    #[default]
    Closed,

    /// Showing the project with this identifier.
    Open {
        /// Identifier of the selected project.
        identifier: String,
    },
}

impl Overlay {
    /// Open the overlay on `identifier`.
    ///
    /// Only legal from `Closed`; returns whether the transition happened.
    pub fn open(&mut self, identifier: &str) -> bool {
        match self {
            Self::Closed => {
                *self = Self::Open {
                    identifier: identifier.to_string(),
                };
                true
            }
            Self::Open { .. } => false,
        }
    }

    /// Dismiss the overlay.
    ///
    /// Returns whether the overlay was open.
    pub fn dismiss(&mut self) -> bool {
        match self {
            Self::Open { .. } => {
                *self = Self::Closed;
                true
            }
            Self::Closed => false,
        }
    }

    /// Whether the overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// The selected project identifier, when open.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        match self {
            Self::Open { identifier } => Some(identifier),
            Self::Closed => None,
        }
    }

    /// Render the overlay contents.
    ///
    /// Closed overlays render nothing. An open overlay shows the cached
    /// long-form markdown when present, else the loading placeholder -
    /// including when resolution has already fallen back, matching the
    /// overlay's contract of only ever displaying a real README.
    #[must_use]
    pub fn render(&self, portfolio: &Portfolio, cache: &DescriptionCache, width: usize) -> String {
        let Self::Open { identifier } = self else {
            return String::new();
        };

        let Some(project) = portfolio.project(identifier) else {
            return String::new();
        };

        let entry = cache.get(identifier);
        let long_form = entry.as_ref().and_then(|e| e.long_form.as_deref());

        let title = long_form
            .and_then(markdown::first_heading)
            .unwrap_or_else(|| project.title.clone());

        let rule = "=".repeat(width);
        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&title);
        out.push('\n');
        out.push_str(&format!("View on GitHub: {}\n", project.repository_url()));
        out.push_str(&rule);
        out.push('\n');
        match long_form {
            Some(body) => {
                out.push_str(body);
                if !body.ends_with('\n') {
                    out.push('\n');
                }
            }
            None => {
                out.push_str(LOADING_README);
                out.push('\n');
            }
        }
        out.push_str(&rule);
        out.push('\n');
        out
    }
}
