//! Common types and utilities for protoclass.
//!
//! This crate provides the foundational pieces shared by the runtime and the CLI:
//! - Error kinds (`ConfigurationError`, `ImplementationMissingError`, `ClassError`)
//! - Validated dotted class paths (`ClassPath`)
//! - Reserved directive keys and well-known member names

// Error taxonomy for class composition and contract dispatch
pub mod error;
pub use error::{ClassError, ClassResult, ConfigurationError, ImplementationMissingError};

// Dotted class paths ("my.awesome.Hero")
pub mod path;
pub use path::ClassPath;

// Reserved directive keys and well-known names
pub mod names;
pub use names::TypeKind;
