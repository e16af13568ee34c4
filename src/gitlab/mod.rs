//! GitLab integration for release operations
//!
//! The release workflow talks to GitLab only through the [`GitLabApi`] trait.
//! [`GitLabClient`] is the REST implementation used by the binary.

mod client;
mod models;

pub use client::GitLabClient;
pub use models::{AssetLink, CreateReleaseOptions, ProjectFile, Release, ReleaseAssets, User};

use crate::error::GitLabError;
use async_trait::async_trait;
use std::path::Path;

/// GitLab REST operations consumed by the release workflow
#[async_trait]
pub trait GitLabApi: Send + Sync {
    /// Resolve the user that owns the access token (`GET /user`)
    async fn current_user(&self) -> Result<User, GitLabError>;

    /// Fetch a release by tag; `Ok(None)` when GitLab answers 404
    async fn get_release(&self, project: &str, tag: &str) -> Result<Option<Release>, GitLabError>;

    /// Upload a local file to the project's uploads
    async fn upload_file(&self, project: &str, path: &Path) -> Result<ProjectFile, GitLabError>;

    /// Create a release
    async fn create_release(
        &self,
        project: &str,
        options: &CreateReleaseOptions,
    ) -> Result<Release, GitLabError>;
}
