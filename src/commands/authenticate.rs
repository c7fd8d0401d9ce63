use anyhow::{bail, Result};
use colored::Colorize;
use dialoguer::{Confirm, Input};
use std::path::Path;

use crate::config::{self, GlobalConfig};
use crate::env::Env;

/// Entry point for `rnplay --authenticate`: prompt for the API token and
/// account email, then persist them as the global config.
pub fn run(home: &Path, env: &Env) -> Result<()> {
    let path = config::global_config_path(home);

    if path.exists() {
        let overwrite = Confirm::new()
            .with_prompt("Credentials already saved — overwrite?")
            .default(false)
            .interact()?;
        if !overwrite {
            bail!("Aborted.");
        }
    }

    println!(
        "{} Your token and email are shown at {}",
        "→".blue().bold(),
        env.settings_url().cyan()
    );

    let token: String = Input::new().with_prompt("API token").interact_text()?;
    let email: String = Input::new().with_prompt("Account email").interact_text()?;

    let cfg = GlobalConfig {
        token: token.trim().to_string(),
        email: email.trim().to_string(),
    }
    .check()?;

    config::save_global_config(home, &cfg)?;

    println!(
        "{} Credentials saved to {}",
        "✓".green().bold(),
        path.display().to_string().yellow()
    );
    println!(
        "  Next: run {} inside a project to create its app.",
        "rnplay --create".bold()
    );

    Ok(())
}
