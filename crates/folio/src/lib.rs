//! `folio` - A terminal portfolio presenter
//!
//! This library renders a personal portfolio (profile, education, skills,
//! experience, projects, testimonials) to the terminal, resolving each
//! project's long-form description from a remote `README.md` with a
//! branch-fallback chain and graceful degradation to static summaries.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod markdown;
pub mod overlay;
pub mod portfolio;
pub mod view;

pub use cache::{DescriptionCache, DescriptionEntry, DescriptionUpdate};
pub use config::Config;
pub use error::{Error, Result};
pub use fetch::{ContentSource, HttpSource, Resolution, Resolver};
pub use logging::init_logging;
pub use overlay::Overlay;
pub use portfolio::{Portfolio, Project};
