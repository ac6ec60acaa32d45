use std::env;
use thiserror::Error;

pub const GITLAB_URL_VAR: &str = "GITLAB_URL";
pub const PRIVATE_TOKEN_VAR: &str = "GITLAB_PRIVATE_TOKEN";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("{0} must be an http(s) URL, got '{1}'")]
    InvalidUrl(&'static str, String),
}

/// Connection settings for the GitLab instance
#[derive(Clone)]
pub struct Settings {
    pub gitlab_url: String,
    pub private_token: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("gitlab_url", &self.gitlab_url)
            .field("private_token", &"<redacted>")
            .finish()
    }
}

impl Settings {
    /// Load settings from the environment, after merging a `.env` file from
    /// the working directory if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let gitlab_url = required(GITLAB_URL_VAR)?;
        let private_token = required(PRIVATE_TOKEN_VAR)?;

        if !(gitlab_url.starts_with("http://") || gitlab_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(GITLAB_URL_VAR, gitlab_url));
        }

        Ok(Self {
            gitlab_url,
            private_token,
        })
    }
}
