//! Guard against publishing the same tag twice

use super::Session;
use crate::cli::RuntimeConfig;
use crate::error::{ReleaseError, Result};
use crate::gitlab::GitLabApi;

/// Evidence that no release existed for a tag when the guard ran.
///
/// Only [`check_absent`] produces one, and a [`ReleaseRequest`](super::ReleaseRequest)
/// cannot be built without it.
#[derive(Debug)]
pub struct TagClearance {
    tag: String,
}

impl TagClearance {
    /// The cleared tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub(super) fn into_tag(self) -> String {
        self.tag
    }
}

/// Fail with [`ReleaseError::ReleaseExists`] if `project` already has a release for `tag`.
///
/// Only a release object returned by GitLab blocks the workflow. A failed query
/// (network error, unexpected status) counts as "absent" and is reported as a
/// warning.
pub async fn check_absent<A: GitLabApi>(
    session: &Session<A>,
    project: &str,
    tag: &str,
    config: &RuntimeConfig,
) -> Result<TagClearance> {
    match session.api().get_release(project, tag).await {
        Ok(Some(existing)) => {
            log::debug!(
                "found release {:?} for tag {}",
                existing.name.as_deref().unwrap_or_default(),
                existing.tag_name
            );
            Err(ReleaseError::ReleaseExists {
                tag: tag.to_string(),
            })
        }
        Ok(None) => Ok(TagClearance {
            tag: tag.to_string(),
        }),
        Err(e) => {
            log::warn!(
                "could not check for an existing release {} in {}: {}; continuing as if absent",
                tag,
                project,
                e
            );
            config.warning_println(&format!(
                "Could not check for an existing release {}: {}",
                tag, e
            ));
            Ok(TagClearance {
                tag: tag.to_string(),
            })
        }
    }
}
