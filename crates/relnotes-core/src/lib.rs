//! relnotes core - shared error types and configuration
//!
//! This crate provides the error taxonomy and the optional configuration
//! file support used by the release notes converter and its CLI.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ConfigError, NoteError, RelnotesError, Result};
