//! Volume snapshot module
//!
//! Point-in-time listings of the configured mount directories. Snapshots
//! are computed fresh for every request and never cached.

use std::io;

/// The three mounts this service exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeKind {
    Data,
    Config,
    Logs,
}

impl VolumeKind {
    /// Heading label used on the dashboard
    pub const fn label(self) -> &'static str {
        match self {
            Self::Data => "Data",
            Self::Config => "Config",
            Self::Logs => "Logs",
        }
    }
}

/// Mount state observed at listing time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VolumeStatus {
    /// Listed successfully and contains at least one entry
    Mounted,
    /// Listed successfully but empty
    Empty,
    /// Listing failed; carries the error text shown inline
    Error(String),
}

/// One volume's listing
#[derive(Debug, Clone)]
pub struct VolumeSnapshot {
    pub kind: VolumeKind,
    pub path: String,
    pub files: Vec<String>,
    pub status: VolumeStatus,
}

impl VolumeSnapshot {
    /// List a volume directory, converting failure into an inline error
    /// state instead of propagating it.
    pub async fn capture(kind: VolumeKind, path: &str) -> Self {
        match list_dir(path).await {
            Ok(files) => {
                let status = if files.is_empty() {
                    VolumeStatus::Empty
                } else {
                    VolumeStatus::Mounted
                };
                Self {
                    kind,
                    path: path.to_string(),
                    files,
                    status,
                }
            }
            Err(e) => Self {
                kind,
                path: path.to_string(),
                files: Vec::new(),
                status: VolumeStatus::Error(e.to_string()),
            },
        }
    }

    pub const fn is_error(&self) -> bool {
        matches!(self.status, VolumeStatus::Error(_))
    }
}

/// List entry names in a directory, sorted for stable output
async fn list_dir(path: &str) -> io::Result<Vec<String>> {
    let mut reader = tokio::fs::read_dir(path).await?;
    let mut names = Vec::new();
    while let Some(entry) = reader.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_capture_lists_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();

        let snap = VolumeSnapshot::capture(VolumeKind::Data, dir.path().to_str().unwrap()).await;
        assert_eq!(snap.status, VolumeStatus::Mounted);
        assert_eq!(snap.files, vec!["a.txt", "b.txt"]);
    }

    #[tokio::test]
    async fn test_capture_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let snap = VolumeSnapshot::capture(VolumeKind::Config, dir.path().to_str().unwrap()).await;
        assert_eq!(snap.status, VolumeStatus::Empty);
        assert!(snap.files.is_empty());
    }

    #[tokio::test]
    async fn test_capture_missing_directory_is_inline_error() {
        let snap = VolumeSnapshot::capture(VolumeKind::Logs, "/nonexistent/podboard-test").await;
        assert!(snap.is_error());
        assert!(snap.files.is_empty());
        match snap.status {
            VolumeStatus::Error(msg) => assert!(!msg.is_empty()),
            other => panic!("expected error status, got {other:?}"),
        }
    }
}
