//! Core types for the glform converter.
//!
//! This crate provides the foundational types used across all other glform crates:
//! - The control model (controls, the form, and the per-run `FormModel` arena)
//! - The fixed source → target type mapping table
//! - Diagnostics for skipped input
//! - Error types

pub mod diagnostics;
pub mod errors;
pub mod model;
pub mod types;

pub use diagnostics::*;
pub use errors::*;
pub use model::*;
pub use types::*;
