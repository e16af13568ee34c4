//! Command line argument parsing and validation.
//!
//! Every flag can also be supplied through a `DRONE_*` environment variable,
//! which is how CI plugins receive their settings.

use clap::Parser;
use std::path::PathBuf;

/// Create a release on GitLab
#[derive(Parser, Debug)]
#[command(
    name = "gitlab_release",
    version,
    about = "Create a release on GitLab",
    long_about = "Create a GitLab release for a tag, uploading build artifacts and
linking them to the release.

Fails if a release for the tag already exists.

Usage:
  gitlab_release --domain gitlab.com --repo group/app --tag v1.0 \\
      --release 'Release 1.0' --ref main --description 'Notes' \\
      --access-token $TOKEN --assets dist/app.tar.gz,dist/app.zip"
)]
pub struct Args {
    /// GitLab access token
    #[arg(long, env = "DRONE_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,

    /// GitLab domain name
    #[arg(long, env = "DRONE_DOMAIN")]
    pub domain: String,

    /// The GitLab project ID or URL-encoded path of the project
    #[arg(long, env = "DRONE_REPO")]
    pub repo: String,

    /// The release name
    #[arg(long, env = "DRONE_RELEASE")]
    pub release: String,

    /// The tag name
    #[arg(long, env = "DRONE_TAG")]
    pub tag: String,

    /// The description of the release, supports Markdown
    #[arg(long, env = "DRONE_DESCRIPTION")]
    pub description: String,

    /// Commit SHA, tag or branch the release is created from
    #[arg(long = "ref", env = "DRONE_REF", value_name = "REF")]
    pub git_ref: String,

    /// Optional paths of files to upload and link to the release
    #[arg(
        long,
        env = "DRONE_ASSETS",
        value_delimiter = ',',
        num_args = 1..,
        value_parser = parse_asset_path
    )]
    pub assets: Vec<PathBuf>,

    /// Print request-level details
    #[arg(short, long, env = "DRONE_VERBOSE")]
    pub verbose: bool,

    /// Suppress progress output (errors are still printed)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    ///
    /// Only the token and the values that end up in request URLs must be non-blank.
    /// The release name, description and ref are passed to GitLab as given.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("access-token", &self.access_token),
            ("domain", &self.domain),
            ("repo", &self.repo),
            ("tag", &self.tag),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(format!("--{} must not be empty", name));
            }
        }

        if self.domain.contains("://") || self.domain.ends_with('/') {
            return Err(format!(
                "--domain expects a bare host name such as 'gitlab.com', got '{}'",
                self.domain
            ));
        }

        if let Some(asset) = self.assets.iter().find(|p| p.as_os_str().is_empty()) {
            return Err(format!("--assets contains an empty path: {:?}", asset));
        }

        Ok(())
    }
}

/// Asset paths are trimmed so `a.zip, b.zip` lists two files
fn parse_asset_path(value: &str) -> Result<PathBuf, String> {
    Ok(PathBuf::from(value.trim()))
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl RuntimeConfig {
    /// Create runtime configuration
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self::with_output(super::OutputManager::new(verbose, quiet))
    }

    /// Create runtime configuration around an existing output manager
    pub fn with_output(output: super::OutputManager) -> Self {
        Self { output }
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print message
    pub fn println(&self, message: &str) {
        self.output.println(message);
    }

    /// Print verbose message (only with --verbose)
    pub fn verbose_println(&self, message: &str) {
        self.output.verbose(message);
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print warning message
    pub fn warning_println(&self, message: &str) {
        self.output.warn(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        self.output.success(message);
    }

    /// Check if verbose output is enabled
    pub fn is_verbose(&self) -> bool {
        self.output.is_verbose()
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self::new(args.verbose, args.quiet)
    }
}
