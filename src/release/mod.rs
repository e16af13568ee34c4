//! Release workflow.
//!
//! Runs strictly in order, stopping at the first failure:
//! - `session`: authenticate and resolve the token's owner
//! - `guard`: refuse to continue if the tag already has a release
//! - `uploader`: upload assets (skipped when none are given)
//! - `creator`: create the release with the asset links

mod creator;
mod guard;
mod request;
mod session;
mod uploader;

pub use creator::create;
pub use guard::{TagClearance, check_absent};
pub use request::ReleaseRequest;
pub use session::Session;
pub use uploader::{asset_url, upload_all};

use crate::ReleaseConfig;
use crate::cli::RuntimeConfig;
use crate::error::{ReleaseError, Result};
use crate::gitlab::{AssetLink, GitLabApi, GitLabClient, Release, User};
use std::fmt;

/// Step the workflow has reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleasePhase {
    /// Nothing done yet
    Start,
    /// Token validated
    Authenticated,
    /// No release exists for the tag
    GuardPassed,
    /// All assets uploaded
    AssetsUploaded,
    /// No assets were given
    NoAssets,
    /// Release created
    Created,
    /// Workflow finished
    Done,
}

impl fmt::Display for ReleasePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReleasePhase::Start => "start",
            ReleasePhase::Authenticated => "authenticated",
            ReleasePhase::GuardPassed => "guard passed",
            ReleasePhase::AssetsUploaded => "assets uploaded",
            ReleasePhase::NoAssets => "no assets",
            ReleasePhase::Created => "created",
            ReleasePhase::Done => "done",
        };
        f.write_str(name)
    }
}

/// Result of a successful release run
#[derive(Debug, Clone)]
pub struct ReleaseOutcome {
    /// Final phase, always [`ReleasePhase::Done`]
    pub phase: ReleasePhase,
    /// User the token belongs to
    pub user: User,
    /// Links attached to the release, in input order
    pub asset_links: Vec<AssetLink>,
    /// Release as returned by GitLab
    pub release: Release,
}

/// Run the workflow against the GitLab instance named in `release`
pub async fn run(release: &ReleaseConfig, config: &RuntimeConfig) -> Result<ReleaseOutcome> {
    let client = GitLabClient::new(&release.access_token, &release.api_base_url())
        .map_err(ReleaseError::Auth)?;
    run_with_api(release, client, config).await
}

/// Run the workflow against any [`GitLabApi`] implementation
pub async fn run_with_api<A: GitLabApi>(
    release: &ReleaseConfig,
    api: A,
    config: &RuntimeConfig,
) -> Result<ReleaseOutcome> {
    let mut phase = ReleasePhase::Start;
    let result = execute(release, api, config, &mut phase).await;
    if let Err(e) = &result {
        log::debug!("release workflow failed after phase '{}': {}", phase, e);
    }
    result
}

async fn execute<A: GitLabApi>(
    release: &ReleaseConfig,
    api: A,
    config: &RuntimeConfig,
    phase: &mut ReleasePhase,
) -> Result<ReleaseOutcome> {
    let session = Session::establish(api, config).await?;
    advance(phase, ReleasePhase::Authenticated);

    let clearance = check_absent(&session, &release.project, &release.tag, config).await?;
    advance(phase, ReleasePhase::GuardPassed);

    let asset_links = if release.assets.is_empty() {
        advance(phase, ReleasePhase::NoAssets);
        Vec::new()
    } else {
        let links = upload_all(
            &session,
            &release.project,
            &release.registry_base_url(),
            &release.assets,
            config,
        )
        .await?;
        advance(phase, ReleasePhase::AssetsUploaded);
        links
    };

    let request = ReleaseRequest::from_config(clearance, release, asset_links.clone());
    let created = create(&session, request, config).await?;
    advance(phase, ReleasePhase::Created);

    advance(phase, ReleasePhase::Done);
    Ok(ReleaseOutcome {
        phase: *phase,
        user: session.user().clone(),
        asset_links,
        release: created,
    })
}

fn advance(phase: &mut ReleasePhase, next: ReleasePhase) {
    log::debug!("release phase: {} -> {}", phase, next);
    *phase = next;
}
