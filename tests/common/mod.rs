//! In-memory GitLab used by the workflow tests. Records every call.

#![allow(dead_code)]

use async_trait::async_trait;
use gitlab_release::gitlab::{AssetLink, CreateReleaseOptions, GitLabApi, ProjectFile, Release, User};
use gitlab_release::{GitLabError, ReleaseConfig};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One API call seen by the fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CurrentUser,
    GetRelease {
        project: String,
        tag: String,
    },
    UploadFile {
        project: String,
        path: PathBuf,
    },
    CreateRelease {
        project: String,
        name: String,
        tag_name: String,
        git_ref: String,
        description: String,
        links: Vec<AssetLink>,
    },
}

/// How the fake answers the release lookup
#[derive(Debug, Clone, Copy)]
pub enum Lookup {
    Absent,
    Exists,
    Fails,
}

/// Shared view of the calls made, usable after the fake moved into a session
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().expect("call log poisoned").clone()
    }

    pub fn uploads(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::UploadFile { path, .. } => Some(path),
                _ => None,
            })
            .collect()
    }

    pub fn created(&self) -> Option<Call> {
        self.calls()
            .into_iter()
            .find(|call| matches!(call, Call::CreateRelease { .. }))
    }

    fn push(&self, call: Call) {
        self.0.lock().expect("call log poisoned").push(call);
    }
}

pub struct FakeGitLab {
    log: CallLog,
    token_valid: bool,
    lookup: Lookup,
    failing_upload: Option<PathBuf>,
    create_fails: bool,
}

impl FakeGitLab {
    pub fn new() -> Self {
        Self {
            log: CallLog::default(),
            token_valid: true,
            lookup: Lookup::Absent,
            failing_upload: None,
            create_fails: false,
        }
    }

    pub fn with_invalid_token(mut self) -> Self {
        self.token_valid = false;
        self
    }

    pub fn with_lookup(mut self, lookup: Lookup) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn with_failing_upload(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_upload = Some(path.into());
        self
    }

    pub fn with_failing_create(mut self) -> Self {
        self.create_fails = true;
        self
    }

    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

/// Relative URL the fake hands out for the n-th upload
pub fn upload_url(index: usize, path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("/uploads/secret{}/{}", index, name)
}

#[async_trait]
impl GitLabApi for FakeGitLab {
    async fn current_user(&self) -> Result<User, GitLabError> {
        self.log.push(Call::CurrentUser);
        if !self.token_valid {
            return Err(GitLabError::Api {
                status: 401,
                message: "401 Unauthorized".to_string(),
            });
        }
        Ok(User {
            id: 1,
            username: "ci-bot".to_string(),
            name: "CI Bot".to_string(),
        })
    }

    async fn get_release(&self, project: &str, tag: &str) -> Result<Option<Release>, GitLabError> {
        self.log.push(Call::GetRelease {
            project: project.to_string(),
            tag: tag.to_string(),
        });
        match self.lookup {
            Lookup::Absent => Ok(None),
            Lookup::Exists => Ok(Some(Release {
                tag_name: tag.to_string(),
                name: Some("Existing".to_string()),
                description: None,
                created_at: None,
            })),
            Lookup::Fails => Err(GitLabError::Api {
                status: 502,
                message: "Bad Gateway".to_string(),
            }),
        }
    }

    async fn upload_file(&self, project: &str, path: &Path) -> Result<ProjectFile, GitLabError> {
        self.log.push(Call::UploadFile {
            project: project.to_string(),
            path: path.to_path_buf(),
        });
        if self.failing_upload.as_deref() == Some(path) {
            return Err(GitLabError::Api {
                status: 413,
                message: "Request Entity Too Large".to_string(),
            });
        }

        let index = self.log.uploads().len() - 1;
        Ok(ProjectFile {
            alt: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            url: upload_url(index, path),
            full_path: None,
            markdown: None,
        })
    }

    async fn create_release(
        &self,
        project: &str,
        options: &CreateReleaseOptions,
    ) -> Result<Release, GitLabError> {
        self.log.push(Call::CreateRelease {
            project: project.to_string(),
            name: options.name.clone(),
            tag_name: options.tag_name.clone(),
            git_ref: options.git_ref.clone(),
            description: options.description.clone(),
            links: options.assets.links.clone(),
        });
        if self.create_fails {
            return Err(GitLabError::Api {
                status: 422,
                message: "Ref is not specified".to_string(),
            });
        }
        Ok(Release {
            tag_name: options.tag_name.clone(),
            name: Some(options.name.clone()),
            description: Some(options.description.clone()),
            created_at: Some("2026-10-16T00:00:00.000Z".to_string()),
        })
    }
}

pub fn release_config(assets: &[&str]) -> ReleaseConfig {
    ReleaseConfig {
        access_token: "glpat-test".to_string(),
        domain: "gitlab.example.com".to_string(),
        project: "group/app".to_string(),
        release_name: "Release 1.0".to_string(),
        tag: "v1.0".to_string(),
        description: "First release".to_string(),
        git_ref: "main".to_string(),
        assets: assets.iter().map(PathBuf::from).collect(),
    }
}
