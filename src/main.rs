//! GitLab Release - create a GitLab release with linked assets from a CI job.

use gitlab_release::cli;
use gitlab_release::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    // Warnings on by default so a swallowed release lookup failure shows up in CI logs
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            let output = OutputManager::new(false, false);
            output.error(&format!("Fatal error: {e}"));
            process::exit(1);
        }
    }
}
