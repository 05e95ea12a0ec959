//! # cake-core
//!
//! Core types, error definitions, and settings for cakedays.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – the error hierarchy, the process-wide
//! `Settings` (processing year), and the text parsers used at the roster
//! boundary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global settings (processing year).
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Year type used for the processing year.
pub type Year = u16;

/// Number of cakes (or attendees) on a cake day.
pub type CakeCount = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedProcessingYear, Settings};
