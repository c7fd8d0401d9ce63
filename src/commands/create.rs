use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;
use std::path::Path;

use crate::api::ApiClient;
use crate::config::{self, LocalConfig};
use crate::env::{Env, GIT_REMOTE_NAME};
use crate::{manifest, shell};

/// Entry point for `rnplay --create`.
///
/// Linear, fail-fast pipeline: validate credentials → resolve the app name
/// → mint a url token via the API → persist the local config → register
/// the git remote → report. There is no rollback: a failure after the
/// local config is written leaves it in place.
pub async fn run(home: &Path, dir: &Path, env: &Env, api: &ApiClient) -> Result<()> {
    let credentials = config::read_global_config(home)?.check()?;

    let name = resolve_app_name(dir)?;

    let url_token = api.create_app(&name, &credentials).await?;

    config::save_local_config(dir, &LocalConfig { url_token: Some(url_token.clone()) })?;

    let remote_url = env.git_remote_url(&credentials.token, &url_token);
    shell::run(&shell::git_remote_add(GIT_REMOTE_NAME, &remote_url), Some(dir)).await?;

    println!(
        "{} Created app '{}' (token {})",
        "✓".green().bold(),
        name.cyan(),
        url_token.yellow()
    );
    println!("  Added git remote '{}'.", GIT_REMOTE_NAME.cyan());
    println!(
        "  Next: {} to publish, then {} to view it.",
        format!("git push {} master", GIT_REMOTE_NAME).bold(),
        "rnplay --open".bold()
    );

    Ok(())
}

/// Prefer the manifest-declared package name; fall back to a prompt.
fn resolve_app_name(dir: &Path) -> Result<String> {
    if let Some(name) = manifest::package_name(dir) {
        println!(
            "{} Using app name '{}' from {}",
            "→".blue().bold(),
            name.cyan(),
            manifest::MANIFEST_FILE
        );
        return Ok(name);
    }

    let name: String = Input::new().with_prompt("App name").interact_text()?;
    Ok(name.trim().to_string())
}
