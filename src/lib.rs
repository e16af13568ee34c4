//! # GitLab Release
//!
//! Create GitLab releases from a CI job.
//!
//! One run authenticates with an access token, refuses to continue if the tag
//! already has a release, uploads the given build artifacts to the project's
//! uploads, and creates the release with a link to every uploaded file.
//!
//! ## Usage
//!
//! ```bash
//! gitlab_release --domain gitlab.com --repo group/app --tag v1.0 \
//!     --release "Release 1.0" --ref main --description "Notes" \
//!     --access-token "$TOKEN" --assets dist/app.tar.gz,dist/app.zip
//! ```
//!
//! Every flag can also be set through its `DRONE_*` environment variable.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod error;
pub mod gitlab;
pub mod release;

// Re-export main types for public API
pub use cli::Args;
pub use error::{CliError, GitLabError, ReleaseError, Result};
pub use gitlab::{AssetLink, GitLabApi, GitLabClient};
pub use release::{ReleaseOutcome, ReleasePhase, ReleaseRequest, Session};

use std::fmt;
use std::path::PathBuf;

/// Configuration for one release run
#[derive(Clone)]
pub struct ReleaseConfig {
    /// GitLab access token
    pub access_token: String,
    /// GitLab host name, e.g. `gitlab.com`
    pub domain: String,
    /// Project ID or path (`group/app`)
    pub project: String,
    /// Release title
    pub release_name: String,
    /// Tag the release is created for
    pub tag: String,
    /// Markdown description, passed through unchanged
    pub description: String,
    /// Commit SHA, tag or branch the release is cut from
    pub git_ref: String,
    /// Local files to upload and link, in display order
    pub assets: Vec<PathBuf>,
}

impl ReleaseConfig {
    /// REST API base URL: `https://{domain}/api/v4/`
    pub fn api_base_url(&self) -> String {
        format!("https://{}/api/v4/", self.domain)
    }

    /// Base URL uploaded files are served from: `https://{domain}/`
    pub fn registry_base_url(&self) -> String {
        format!("https://{}/", self.domain)
    }

    /// Check that the derived endpoints are valid URLs
    pub fn validate(&self) -> Result<()> {
        for endpoint in [self.api_base_url(), self.registry_base_url()] {
            url::Url::parse(&endpoint).map_err(|e| CliError::InvalidArguments {
                reason: format!("'{}' does not form a valid URL ({}): {}", self.domain, endpoint, e),
            })?;
        }
        Ok(())
    }
}

impl fmt::Debug for ReleaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseConfig")
            .field("access_token", &"<redacted>")
            .field("domain", &self.domain)
            .field("project", &self.project)
            .field("release_name", &self.release_name)
            .field("tag", &self.tag)
            .field("description", &self.description)
            .field("git_ref", &self.git_ref)
            .field("assets", &self.assets)
            .finish()
    }
}

impl From<&Args> for ReleaseConfig {
    fn from(args: &Args) -> Self {
        Self {
            access_token: args.access_token.clone(),
            domain: args.domain.trim().to_string(),
            project: args.repo.clone(),
            release_name: args.release.clone(),
            tag: args.tag.clone(),
            description: args.description.clone(),
            git_ref: args.git_ref.clone(),
            assets: args.assets.clone(),
        }
    }
}
