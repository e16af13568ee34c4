//! Submit the release

use super::{ReleaseRequest, Session};
use crate::cli::RuntimeConfig;
use crate::error::{ReleaseError, Result};
use crate::gitlab::{GitLabApi, Release};

/// Create the release described by `request` in one API call
pub async fn create<A: GitLabApi>(
    session: &Session<A>,
    request: ReleaseRequest,
    config: &RuntimeConfig,
) -> Result<Release> {
    let project = request.project().to_string();
    let tag = request.tag().to_string();
    let options = request.into_options();

    let release = session
        .api()
        .create_release(&project, &options)
        .await
        .map_err(ReleaseError::Create)?;

    config.success_println(&format!("The release {} {} is created.", project, tag));
    Ok(release)
}
