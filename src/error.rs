//! Error taxonomy shared by the leaf modules (config, API, shell).
//!
//! Commands and the entry point work in `anyhow::Result` and attach context
//! the usual way; these typed variants exist so callers and tests can tell
//! a bad config file apart from a failed API call or git invocation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The config file is absent or does not parse as JSON.
    #[error("config file {} is missing or corrupt: {reason}", .path.display())]
    ConfigMissingOrCorrupt { path: PathBuf, reason: String },

    /// Credentials are present but empty. Not retryable — the user has to
    /// run `rnplay --authenticate` first.
    #[error("saved credentials are missing a token or email — run `rnplay --authenticate` first")]
    InvalidConfig,

    /// Non-2xx response or transport failure from the rnplay API. Single
    /// attempt, no retries; the underlying message is reported verbatim.
    #[error("rnplay API request failed: {0}")]
    RemoteApi(String),

    /// A shelled-out command exited non-zero (or failed to spawn). The raw
    /// output is passed through to the user unmodified.
    #[error("command `{command}` failed: {output}")]
    ShellCommand { command: String, output: String },
}

pub type Result<T> = std::result::Result<T, Error>;
