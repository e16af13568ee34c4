//! Authenticated GitLab session

use crate::cli::RuntimeConfig;
use crate::error::{ReleaseError, Result};
use crate::gitlab::{GitLabApi, GitLabClient, User};

/// API handle whose token has been confirmed by resolving its owner
pub struct Session<A> {
    api: A,
    user: User,
}

impl Session<GitLabClient> {
    /// Build a REST client for `api_base_url` and validate `token` against it
    pub async fn connect(token: &str, api_base_url: &str, config: &RuntimeConfig) -> Result<Self> {
        let client = GitLabClient::new(token, api_base_url).map_err(ReleaseError::Auth)?;
        Self::establish(client, config).await
    }
}

impl<A: GitLabApi> Session<A> {
    /// Validate the API's token with a single "who am I" call
    pub async fn establish(api: A, config: &RuntimeConfig) -> Result<Self> {
        let user = api.current_user().await.map_err(ReleaseError::Auth)?;

        log::debug!("authenticated as {} (id {})", user.username, user.id);
        config.println(&format!("Login with {}", user.name));

        Ok(Self { api, user })
    }

    /// The API handle
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The user owning the token
    pub fn user(&self) -> &User {
        &self.user
    }
}
