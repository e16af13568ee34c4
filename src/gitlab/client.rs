//! REST client for the GitLab v4 API

use super::{CreateReleaseOptions, GitLabApi, ProjectFile, Release, User};
use crate::error::GitLabError;
use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio_util::io::ReaderStream;
use url::Url;

/// Header GitLab reads personal/project access tokens from
const TOKEN_HEADER: &str = "private-token";

/// Characters left unescaped in a single path segment (RFC 3986 unreserved)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// GitLab API client bound to one base URL and one token
#[derive(Debug, Clone)]
pub struct GitLabClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GitLabClient {
    /// Create a client for `base_url` (e.g. `https://gitlab.com/api/v4/`)
    pub fn new(token: &str, base_url: &str) -> Result<Self, GitLabError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut token_value = HeaderValue::from_str(token).map_err(|_| GitLabError::InvalidToken)?;
        token_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(TOKEN_HEADER), token_value);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, GitLabError> {
        Ok(self.base_url.join(path)?)
    }

    fn project_endpoint(&self, project: &str, rest: &str) -> Result<Url, GitLabError> {
        self.endpoint(&format!("projects/{}/{}", escape_segment(project), rest))
    }
}

#[async_trait]
impl GitLabApi for GitLabClient {
    async fn current_user(&self) -> Result<User, GitLabError> {
        let url = self.endpoint("user")?;
        log::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    async fn get_release(&self, project: &str, tag: &str) -> Result<Option<Release>, GitLabError> {
        let url = self.project_endpoint(project, &format!("releases/{}", escape_segment(tag)))?;
        log::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(response).await.map(Some)
    }

    async fn upload_file(&self, project: &str, path: &Path) -> Result<ProjectFile, GitLabError> {
        let io_error = |source| GitLabError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = tokio::fs::File::open(path).await.map_err(io_error)?;
        let metadata = file.metadata().await.map_err(io_error)?;
        if !metadata.is_file() {
            return Err(io_error(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let body = reqwest::Body::wrap_stream(ReaderStream::new(file));
        let part = Part::stream_with_length(body, metadata.len())
            .file_name(file_name)
            .mime_str("application/octet-stream")?;
        let form = Form::new().part("file", part);

        let url = self.project_endpoint(project, "uploads")?;
        log::debug!("POST {} ({} bytes)", url, metadata.len());

        let response = self.http.post(url).multipart(form).send().await?;
        decode(response).await
    }

    async fn create_release(
        &self,
        project: &str,
        options: &CreateReleaseOptions,
    ) -> Result<Release, GitLabError> {
        let url = self.project_endpoint(project, "releases")?;
        log::debug!(
            "POST {} (tag {}, {} link(s))",
            url,
            options.tag_name,
            options.assets.links.len()
        );

        let response = self.http.post(url).json(options).send().await?;
        decode(response).await
    }
}

/// Percent-encode a value as one URL path segment (`group/app` -> `group%2Fapp`)
pub(crate) fn escape_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GitLabError> {
    let status = response.status();
    log::debug!("-> {}", status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GitLabError::Api {
            status: status.as_u16(),
            message: error_message(status, &body),
        });
    }

    Ok(response.json::<T>().await?)
}

/// Extract GitLab's `message`/`error` field from an error body
fn error_message(status: StatusCode, body: &str) -> String {
    let field = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message").or_else(|| value.get("error")).cloned());

    match field {
        Some(serde_json::Value::String(message)) => message,
        Some(other) => other.to_string(),
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    }
}
