//! # folio Design Documentation
//!
//! This crate contains design documentation and architectural decision
//! records for the folio project.
//!
//! ## Documentation Location
//!
//! All design documents are located in the `docs/` directory at the root
//! of this crate.
//!
//! Key documents:
//! - `architecture.md` - Overall system architecture
//! - `resolution.md` - The README resolution pipeline and its fallback chain

// This is a documentation-only crate
#![no_std]
