//! Hand a URL to the platform's default browser.
//!
//! This is an external collaborator: we shell out to the OS opener and do
//! not verify what the browser does with the URL.

use crate::error::Result;
use crate::shell;

pub async fn open_url(url: &str) -> Result<()> {
    shell::run(&format!("{} {}", opener_command(), url), None).await
}

fn opener_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "start"
    } else {
        "xdg-open"
    }
}
