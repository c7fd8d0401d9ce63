//! Shell command runner.
//!
//! Everything the CLI delegates to the system (git, the platform URL
//! opener) goes through [`run`]: build the command line synchronously,
//! execute it asynchronously, and surface a non-zero exit as
//! [`Error::ShellCommand`] with the raw stderr attached. The orchestrator
//! never interprets git's output, it just reports it.

use std::path::Path;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Run `command` through `sh -c`, optionally inside `dir`.
pub async fn run(command: &str, dir: Option<&Path>) -> Result<()> {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    let output = cmd.output().await.map_err(|e| Error::ShellCommand {
        command: command.to_string(),
        output: e.to_string(),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Error::ShellCommand {
            command: command.to_string(),
            output: stderr,
        });
    }

    Ok(())
}

/// Command line for registering an existing repo's remote.
pub fn git_remote_add(remote: &str, url: &str) -> String {
    format!("git remote add {} {}", remote, url)
}

/// Command line used inside freshly copied split targets, which are not
/// repositories yet.
pub fn git_init_with_remote(remote: &str, url: &str) -> String {
    format!("git init && git remote add {} {}", remote, url)
}
