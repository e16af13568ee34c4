//! Command execution.
//!
//! Turns parsed arguments into a release run and its outcome into an exit code.

mod release;

use crate::ReleaseConfig;
use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;

use release::execute_release;

/// Execute the release described by the parsed arguments
pub async fn execute_command(args: Args) -> Result<i32> {
    let config = RuntimeConfig::from(&args);

    if let Err(validation_error) = args.validate() {
        config.error_println(&format!("Invalid arguments: {}", validation_error));
        return Ok(1);
    }

    let release = ReleaseConfig::from(&args);
    log::debug!("{:?}", release);

    match execute_release(&release, &config).await {
        Ok(()) => Ok(0),
        Err(e) => {
            config.error_println(&e.to_string());

            if config.is_verbose() {
                let suggestions = e.recovery_suggestions();
                if !suggestions.is_empty() {
                    config.println("\n💡 Recovery suggestions:");
                    for suggestion in suggestions {
                        config.println(&format!("  • {}", suggestion));
                    }
                }
            }

            Ok(1)
        }
    }
}
