//! Report sink: attachment storage under the reports directory
//!
//! Attachments land in `{reports_dir}/artifacts/{test-id}/` with a
//! timestamped filename; the returned metadata is folded into the run
//! report manifest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use swag_core::{Result, SwagError};
use tracing::debug;

/// Declared content type of an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Png,
    Json,
}

impl ContentType {
    pub fn extension(&self) -> &str {
        match self {
            Self::Png => "png",
            Self::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &str {
        match self {
            Self::Png => "image/png",
            Self::Json => "application/json",
        }
    }
}

/// Metadata for one stored attachment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Test the attachment belongs to
    pub test_id: String,
    /// Declared name, e.g. `screenshot_passed`
    pub name: String,
    /// Path relative to the artifacts directory
    pub path: PathBuf,
    /// MIME type
    pub mime_type: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// When stored
    pub created_at: DateTime<Utc>,
}

/// Writes attachments beneath the reports directory
pub struct ArtifactStore {
    base_dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(reports_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: reports_dir.as_ref().join("artifacts"),
        }
    }

    /// Store one attachment for a test
    pub fn attach(
        &self,
        test_id: &str,
        name: &str,
        content_type: ContentType,
        data: &[u8],
    ) -> Result<Attachment> {
        let test_dir = self.base_dir.join(sanitize(test_id));
        std::fs::create_dir_all(&test_dir).map_err(|e| {
            SwagError::Artifact(format!(
                "Failed to create artifact directory {}: {}",
                test_dir.display(),
                e
            ))
        })?;

        let timestamp = Utc::now().format("%Y%m%d-%H%M%S%.3f");
        let filename = format!("{}-{}.{}", timestamp, name, content_type.extension());
        let file_path = test_dir.join(&filename);

        std::fs::write(&file_path, data).map_err(|e| {
            SwagError::Artifact(format!(
                "Failed to write attachment {}: {}",
                file_path.display(),
                e
            ))
        })?;

        debug!(
            "Stored attachment {} ({} bytes)",
            file_path.display(),
            data.len()
        );

        Ok(Attachment {
            test_id: test_id.to_string(),
            name: name.to_string(),
            path: PathBuf::from(sanitize(test_id)).join(filename),
            mime_type: content_type.mime_type().to_string(),
            size_bytes: data.len() as u64,
            created_at: Utc::now(),
        })
    }

    /// Absolute path of a stored attachment
    pub fn absolute_path(&self, attachment: &Attachment) -> PathBuf {
        self.base_dir.join(&attachment.path)
    }
}

/// Make a test id safe as a directory name
fn sanitize(test_id: &str) -> String {
    test_id
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => c,
            _ => '-',
        })
        .collect::<String>()
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_test_ids() {
        assert_eq!(sanitize("test_login::case"), "test_login--case");
        assert_eq!(
            sanitize("test_login::login[standard_user]"),
            "test_login--login-standard_user"
        );
    }

    #[test]
    fn test_attach_writes_file_with_status_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let attachment = store
            .attach("test_cart::badge", "screenshot_failed", ContentType::Png, b"png-bytes")
            .unwrap();

        assert_eq!(attachment.mime_type, "image/png");
        assert_eq!(attachment.size_bytes, 9);
        assert!(attachment.name.contains("failed"));

        let on_disk = store.absolute_path(&attachment);
        assert_eq!(std::fs::read(on_disk).unwrap(), b"png-bytes");
    }

    #[test]
    fn test_content_type_metadata() {
        assert_eq!(ContentType::Png.extension(), "png");
        assert_eq!(ContentType::Png.mime_type(), "image/png");
        assert_eq!(ContentType::Json.mime_type(), "application/json");
    }
}
