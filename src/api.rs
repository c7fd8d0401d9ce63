//! rnplay REST API client.
//!
//! One endpoint matters: `POST {base}/apps.json` creates a remote app record
//! and returns the `url_token` that every later step (local config, git
//! remote URL, web page) is keyed on. Single attempt, no retries.

use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::GlobalConfig;
use crate::error::{Error, Result};

pub const EMAIL_HEADER: &str = "X-User-Email";
pub const TOKEN_HEADER: &str = "X-User-Token";

#[derive(Serialize)]
struct CreateAppRequest<'a> {
    app: AppParams<'a>,
}

#[derive(Serialize)]
struct AppParams<'a> {
    name: &'a str,
    uses_git: u8,
}

#[derive(Deserialize)]
struct CreateAppResponse {
    url_token: String,
}

pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` comes from [`crate::env::Env::api_base`]; tests point it
    /// at a local mock server instead.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a remote git-backed app; returns its `url_token`.
    pub async fn create_app(&self, name: &str, credentials: &GlobalConfig) -> Result<String> {
        let url = format!("{}/apps.json", self.base_url);
        println!("{} Creating app '{}'...", "→".blue().bold(), name.cyan());

        let response = self
            .http
            .post(&url)
            .header(EMAIL_HEADER, &credentials.email)
            .header(TOKEN_HEADER, &credentials.token)
            .json(&CreateAppRequest { app: AppParams { name, uses_git: 1 } })
            .send()
            .await
            .map_err(|e| Error::RemoteApi(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RemoteApi(format!("{} returned {}", url, status)));
        }

        let body: CreateAppResponse = response
            .json()
            .await
            .map_err(|e| Error::RemoteApi(format!("unexpected response body: {}", e)))?;

        Ok(body.url_token)
    }
}
