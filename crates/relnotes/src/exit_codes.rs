//! Exit codes for the CLI

use relnotes_core::RelnotesError;

/// Success
pub const SUCCESS: u8 = 0;

/// General error (including IO)
pub const ERROR: u8 = 1;

/// Usage error; matches the code clap exits with on bad arguments
pub const USAGE_ERROR: u8 = 2;

/// Configuration error
pub const CONFIG_ERROR: u8 = 3;

/// Release notes input error (malformed record, missing field, bad date)
pub const INPUT_ERROR: u8 = 4;

/// Map a command error to its exit code
pub fn for_error(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<RelnotesError>() {
        Some(RelnotesError::Config(_)) => CONFIG_ERROR,
        Some(RelnotesError::Note(_)) => INPUT_ERROR,
        Some(RelnotesError::Io { .. }) | None => ERROR,
    }
}
