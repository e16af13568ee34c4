//! Release command execution.

use crate::ReleaseConfig;
use crate::cli::RuntimeConfig;
use crate::error::Result;

/// Execute release command
pub(super) async fn execute_release(release: &ReleaseConfig, config: &RuntimeConfig) -> Result<()> {
    release.validate()?;

    config.verbose_println(&format!("API: {}", release.api_base_url()));
    config.verbose_println(&format!(
        "Project: {}, tag: {}, ref: {}",
        release.project, release.tag, release.git_ref
    ));

    let outcome = crate::release::run(release, config).await?;

    config.verbose_println(&format!(
        "Finished ({}) with {} asset link(s)",
        outcome.phase,
        outcome.asset_links.len()
    ));
    Ok(())
}
