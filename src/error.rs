//! Error types for gitlab_release operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gitlab_release operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all gitlab_release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Token rejected or identity could not be resolved
    #[error("Authentication failed: {0}")]
    Auth(#[source] GitLabError),

    /// A release already exists for the requested tag
    #[error("The release {tag} exists.")]
    ReleaseExists {
        /// Tag name
        tag: String,
    },

    /// An asset failed to upload
    #[error("Upload of '{}' failed: {source}", .path.display())]
    Upload {
        /// Local path of the asset
        path: PathBuf,
        /// Underlying API error
        #[source]
        source: GitLabError,
    },

    /// The release creation request failed
    #[error("Release creation failed: {0}")]
    Create(#[source] GitLabError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),
}

/// Errors raised by the GitLab API client
#[derive(Error, Debug)]
pub enum GitLabError {
    /// Transport-level failure (DNS, TLS, connection, body decoding)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{message} (HTTP {status})")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message reported by GitLab
        message: String,
    },

    /// A local file could not be read for upload
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the file
        path: PathBuf,
        /// IO error
        #[source]
        source: std::io::Error,
    },

    /// The token cannot be sent as a header value
    #[error("Access token contains characters that are not valid in an HTTP header")]
    InvalidToken,

    /// An endpoint URL could not be built
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl GitLabError {
    /// HTTP status reported by the API, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            GitLabError::Api { status, .. } => Some(*status),
            GitLabError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::Auth(GitLabError::Api { status: 401, .. }) => vec![
                "Check that DRONE_ACCESS_TOKEN holds a valid, unexpired token".to_string(),
                "The token needs the 'api' scope".to_string(),
            ],
            ReleaseError::Auth(_) => vec![
                "Verify DRONE_DOMAIN points at a reachable GitLab instance".to_string(),
                "Check that DRONE_ACCESS_TOKEN is set".to_string(),
            ],
            ReleaseError::ReleaseExists { tag } => vec![
                format!("Push a new tag instead of reusing '{}'", tag),
                "Delete the existing release in GitLab if it was created by mistake".to_string(),
            ],
            ReleaseError::Upload {
                source: GitLabError::Io { .. },
                ..
            } => vec!["Check that the asset was built and the path is relative to the workspace".to_string()],
            ReleaseError::Upload { .. } => vec![
                "Assets uploaded before the failure remain in the project uploads".to_string(),
                "Check the project's upload size limit".to_string(),
            ],
            ReleaseError::Create(GitLabError::Api { status: 422, .. }) => vec![
                "Verify DRONE_REF names an existing commit, branch or tag".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
