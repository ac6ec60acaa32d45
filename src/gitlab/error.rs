use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to the GitLab REST API.
#[derive(Error, Debug)]
pub enum GitLabError {
    /// The private token was rejected when authenticating.
    #[error("GitLab authentication failed ({status}): {body}")]
    Authentication { status: StatusCode, body: String },

    /// Any other non-success response.
    #[error("GitLab API error ({status}) on {path}: {body}")]
    Api {
        status: StatusCode,
        path: String,
        body: String,
    },

    /// Connection, TLS or body-decoding failure.
    #[error("GitLab request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl GitLabError {
    /// True when a repository endpoint answered as if the project had no
    /// repository behind it (empty project or repository feature disabled).
    pub fn is_missing_repository(&self) -> bool {
        matches!(
            self,
            GitLabError::Api { status, .. }
                if *status == StatusCode::NOT_FOUND || *status == StatusCode::FORBIDDEN
        )
    }
}
