//! Per-entry provisioning for the split workflow.
//!
//! Each manifest split entry gets the full create pipeline against a copy
//! of its source directory: copy → create remote app → write local config
//! into the copy → `git init` + `git remote add` inside the copy. The
//! command layer fans these out concurrently and joins all of them; this
//! module keeps the single-entry pipeline testable on its own.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::api::ApiClient;
use crate::config::{self, GlobalConfig, LocalConfig};
use crate::env::{Env, GIT_REMOTE_NAME};
use crate::shell;

/// Copy `src` into `dst` recursively. `dst` is created if needed; existing
/// files are overwritten.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Provision one sub-project; returns the path of the provisioned copy.
///
/// Failures abort this entry only — the caller decides how to aggregate
/// them across entries.
pub async fn provision(
    api: &ApiClient,
    env: &Env,
    credentials: &GlobalConfig,
    name: &str,
    source: &Path,
    scratch_root: &Path,
) -> Result<PathBuf> {
    let target = scratch_root.join(name);
    if target.exists() {
        // A stale copy from an earlier run would make `git remote add` refuse.
        std::fs::remove_dir_all(&target)
            .with_context(|| format!("failed to clear {}", target.display()))?;
    }
    copy_dir_recursive(source, &target).with_context(|| {
        format!("failed to copy {} to {}", source.display(), target.display())
    })?;

    let url_token = api.create_app(name, credentials).await?;

    config::save_local_config(&target, &LocalConfig { url_token: Some(url_token.clone()) })?;

    let remote_url = env.git_remote_url(&credentials.token, &url_token);
    let command = shell::git_init_with_remote(GIT_REMOTE_NAME, &remote_url);
    shell::run(&command, Some(&target)).await?;

    Ok(target)
}
