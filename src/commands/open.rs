use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::{self, LocalConfig};
use crate::env::Env;
use crate::browser;

/// Entry point for `rnplay --open`: look up the app linked to this
/// directory and hand its web page to the browser.
pub async fn run(dir: &Path, env: &Env) -> Result<()> {
    let local = config::read_local_config(dir)?;

    match open_target(&local, env) {
        Some(url) => {
            println!("{} Opening {}", "→".blue().bold(), url.cyan());
            browser::open_url(&url).await?;
        }
        None => {
            println!(
                "{} No app is linked to this directory yet — run {} first.",
                "!".yellow().bold(),
                "rnplay --create".bold()
            );
        }
    }

    Ok(())
}

/// The URL to open, or `None` when no app has been created here. Pure so
/// the decision is testable without a browser.
pub fn open_target(local: &LocalConfig, env: &Env) -> Option<String> {
    local
        .url_token
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(|t| env.app_page_url(t))
}
