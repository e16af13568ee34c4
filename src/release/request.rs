//! Release creation request

use super::TagClearance;
use crate::ReleaseConfig;
use crate::gitlab::{AssetLink, CreateReleaseOptions, ReleaseAssets};

/// Everything needed to create one release
#[derive(Debug, Clone)]
pub struct ReleaseRequest {
    project: String,
    name: String,
    tag: String,
    git_ref: String,
    description: String,
    links: Vec<AssetLink>,
}

impl ReleaseRequest {
    /// Build a request for the tag the guard cleared
    pub fn new(
        clearance: TagClearance,
        project: impl Into<String>,
        name: impl Into<String>,
        git_ref: impl Into<String>,
        description: impl Into<String>,
        links: Vec<AssetLink>,
    ) -> Self {
        Self {
            project: project.into(),
            name: name.into(),
            tag: clearance.into_tag(),
            git_ref: git_ref.into(),
            description: description.into(),
            links,
        }
    }

    /// Build a request from the invocation's configuration
    pub fn from_config(clearance: TagClearance, config: &ReleaseConfig, links: Vec<AssetLink>) -> Self {
        Self::new(
            clearance,
            &config.project,
            &config.release_name,
            &config.git_ref,
            &config.description,
            links,
        )
    }

    /// Project ID or path
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Asset links, in upload order
    pub fn links(&self) -> &[AssetLink] {
        &self.links
    }

    pub(super) fn into_options(self) -> CreateReleaseOptions {
        CreateReleaseOptions {
            name: self.name,
            tag_name: self.tag,
            description: self.description,
            git_ref: self.git_ref,
            assets: ReleaseAssets { links: self.links },
        }
    }
}
