//! Wire models for the GitLab REST API (v4)

use serde::{Deserialize, Serialize};

/// Authenticated user returned by `GET /user`
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// Numeric user ID
    pub id: u64,
    /// Login name
    pub username: String,
    /// Display name
    pub name: String,
}

/// Release object returned by the releases API
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Tag the release points at
    pub tag_name: String,
    /// Release title
    #[serde(default)]
    pub name: Option<String>,
    /// Markdown description
    #[serde(default)]
    pub description: Option<String>,
    /// Creation timestamp as reported by GitLab
    #[serde(default)]
    pub created_at: Option<String>,
}

/// File returned by `POST /projects/:id/uploads`
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectFile {
    /// Display name (the uploaded file name)
    pub alt: String,
    /// Path relative to the project URL, e.g. `/uploads/<secret>/app.tar.gz`
    pub url: String,
    /// Path relative to the instance root
    #[serde(default)]
    pub full_path: Option<String>,
    /// Markdown snippet linking the file
    #[serde(default)]
    pub markdown: Option<String>,
}

/// Named link attached to a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLink {
    /// Link name shown on the release page
    pub name: String,
    /// Absolute download URL
    pub url: String,
}

/// Asset section of a release creation request
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReleaseAssets {
    /// Links in display order
    pub links: Vec<AssetLink>,
}

/// Body of `POST /projects/:id/releases`
#[derive(Debug, Clone, Serialize)]
pub struct CreateReleaseOptions {
    /// Release title
    pub name: String,
    /// Tag to create or reuse
    pub tag_name: String,
    /// Markdown description
    pub description: String,
    /// Commit SHA, tag or branch the tag is created from
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// Asset links
    pub assets: ReleaseAssets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_release_options_wire_format() {
        let options = CreateReleaseOptions {
            name: "Release 1.0".to_string(),
            tag_name: "v1.0".to_string(),
            description: "First".to_string(),
            git_ref: "main".to_string(),
            assets: ReleaseAssets {
                links: vec![AssetLink {
                    name: "app.tar.gz".to_string(),
                    url: "https://gitlab.example.com/group/app/uploads/abc/app.tar.gz".to_string(),
                }],
            },
        };

        let value = serde_json::to_value(&options).expect("serializable");
        assert_eq!(value["ref"], "main");
        assert!(value.get("git_ref").is_none());
        assert_eq!(value["assets"]["links"][0]["name"], "app.tar.gz");
    }

    #[test]
    fn test_project_file_ignores_unknown_fields() {
        let file: ProjectFile = serde_json::from_str(
            r#"{"id":7,"alt":"app.zip","url":"/uploads/abc/app.zip","markdown":"[app.zip](/uploads/abc/app.zip)"}"#,
        )
        .expect("valid upload response");
        assert_eq!(file.alt, "app.zip");
        assert_eq!(file.url, "/uploads/abc/app.zip");
        assert!(file.full_path.is_none());
    }
}
