//! Service addressing.
//!
//! Every URL the CLI touches hangs off one host name, which an optional
//! deployment-environment prefix (from `RNPLAY_ENV`) can rewrite, e.g.
//! `RNPLAY_ENV=staging` → `staging.rnplay.org`. The `Env` is built once at
//! startup and passed to collaborators; nothing else reads process state.

pub const BASE_HOST: &str = "rnplay.org";
pub const ENV_VAR: &str = "RNPLAY_ENV";

/// Name under which the remote is registered in the local git repo.
pub const GIT_REMOTE_NAME: &str = "rnplay";

#[derive(Debug, Clone)]
pub struct Env {
    host: String,
}

impl Env {
    pub fn new(prefix: Option<&str>) -> Self {
        let host = match prefix {
            Some(p) if !p.is_empty() => format!("{}.{}", p, BASE_HOST),
            _ => BASE_HOST.to_string(),
        };
        Self { host }
    }

    pub fn from_process_env() -> Self {
        Self::new(std::env::var(ENV_VAR).ok().as_deref())
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Base URL for REST calls, e.g. `https://rnplay.org`.
    pub fn api_base(&self) -> String {
        format!("https://{}", self.host)
    }

    /// Web page of an app, e.g. `https://rnplay.org/apps/abc123`.
    pub fn app_page_url(&self, url_token: &str) -> String {
        format!("https://{}/apps/{}", self.host, url_token)
    }

    /// Where to obtain credentials (shown during `--authenticate`).
    pub fn settings_url(&self) -> String {
        format!("https://{}/settings", self.host)
    }

    /// Clone/push URL with the API token embedded as the git credential.
    pub fn git_remote_url(&self, token: &str, url_token: &str) -> String {
        format!("https://{}:@git.{}/{}.git", token, self.host, url_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_host_has_no_prefix() {
        let env = Env::new(None);
        assert_eq!(env.host(), "rnplay.org");
        assert_eq!(env.api_base(), "https://rnplay.org");
    }

    #[test]
    fn test_empty_prefix_is_ignored() {
        let env = Env::new(Some(""));
        assert_eq!(env.host(), "rnplay.org");
    }

    #[test]
    fn test_prefix_rewrites_every_url() {
        let env = Env::new(Some("staging"));
        assert_eq!(env.api_base(), "https://staging.rnplay.org");
        assert_eq!(env.app_page_url("abc"), "https://staging.rnplay.org/apps/abc");
        assert!(env.git_remote_url("t", "abc").contains("git.staging.rnplay.org"));
    }

    #[test]
    fn test_app_page_url_appends_token_unchanged() {
        let env = Env::new(None);
        assert_eq!(env.app_page_url("abc123"), "https://rnplay.org/apps/abc123");
    }

    #[test]
    fn test_git_remote_url_shape() {
        let env = Env::new(None);
        assert_eq!(
            env.git_remote_url("secret", "abc123"),
            "https://secret:@git.rnplay.org/abc123.git"
        );
    }
}
