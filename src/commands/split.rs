use anyhow::{anyhow, bail, Result};
use colored::Colorize;
use futures_util::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::api::ApiClient;
use crate::config;
use crate::env::Env;
use crate::{manifest, split};

/// Entry point for `rnplay --split`.
///
/// Provisions every manifest split entry concurrently and waits for all of
/// them. Entries are independent: one entry failing does not stop the
/// others, but any failure makes the command fail once everything has
/// settled.
pub async fn run(home: &Path, dir: &Path, env: &Env, api: &ApiClient) -> Result<()> {
    let credentials = config::read_global_config(home)?.check()?;

    let manifest = manifest::load(dir)
        .ok_or_else(|| anyhow!("no readable {} in this directory", manifest::MANIFEST_FILE))?;
    let entries = manifest.split_entries();
    if entries.is_empty() {
        bail!(
            "{} declares no rnplay split entries — nothing to do",
            manifest::MANIFEST_FILE
        );
    }

    println!(
        "{} Splitting into {} sub-project(s)...",
        "→".blue().bold(),
        entries.len().to_string().yellow()
    );

    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} sub-projects {msg}")
            .unwrap(),
    );

    let scratch_root = std::env::temp_dir().join("rnplay-split");

    let results: Vec<(String, Result<std::path::PathBuf>)> = join_all(entries.iter().map(
        |(name, source)| {
            let pb = &pb;
            let credentials = &credentials;
            let scratch_root = &scratch_root;
            async move {
                let source = dir.join(source);
                let result =
                    split::provision(api, env, credentials, name, &source, scratch_root).await;
                pb.inc(1);
                (name.clone(), result)
            }
        },
    ))
    .await;
    pb.finish_with_message("done");

    let mut failed = 0usize;
    for (name, result) in &results {
        match result {
            Ok(target) => println!(
                "{} {} provisioned at {}",
                "✓".green().bold(),
                name.cyan(),
                target.display().to_string().yellow()
            ),
            Err(e) => {
                failed += 1;
                println!("{} {} failed: {}", "✗".red().bold(), name.cyan(), e);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} sub-project(s) failed", failed, results.len());
    }

    println!(
        "  Each sub-project has its own '{}' remote — cd in and push.",
        crate::env::GIT_REMOTE_NAME.cyan()
    );

    Ok(())
}
