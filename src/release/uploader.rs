//! Upload release assets to the project's uploads

use super::Session;
use crate::cli::RuntimeConfig;
use crate::error::{ReleaseError, Result};
use crate::gitlab::{AssetLink, GitLabApi};
use std::path::PathBuf;

/// Upload `paths` one at a time and return their links in the same order.
///
/// Stops at the first failed upload. Files uploaded before the failure stay
/// on the server.
pub async fn upload_all<A: GitLabApi>(
    session: &Session<A>,
    project: &str,
    registry_base_url: &str,
    paths: &[PathBuf],
    config: &RuntimeConfig,
) -> Result<Vec<AssetLink>> {
    if paths.is_empty() {
        return Ok(Vec::new());
    }

    config.println("Uploading assets...");

    let mut links = Vec::with_capacity(paths.len());
    for path in paths {
        config.println(&progress_line("Uploading asset", &path.display().to_string()));

        let file = session
            .api()
            .upload_file(project, path)
            .await
            .map_err(|source| ReleaseError::Upload {
                path: path.clone(),
                source,
            })?;

        config.println(&progress_line("Done", &file.url));

        let url = asset_url(registry_base_url, project, &file.url);
        config.verbose_println(&format!("{} -> {}", file.alt, url));
        links.push(AssetLink {
            name: file.alt,
            url,
        });
    }

    config.println("Upload successful.");
    Ok(links)
}

/// Download URL of an uploaded file: plain concatenation, no separator handling
pub fn asset_url(registry_base_url: &str, project: &str, relative_url: &str) -> String {
    format!("{}{}{}", registry_base_url, project, relative_url)
}

fn progress_line(label: &str, value: &str) -> String {
    format!("{:<20}: {}", label, value)
}
