//! Image Cleanup Service
//!
//! 负责清理孤儿图片文件
//!
//! Uploads and row writes are separate operations, so an upload whose
//! follow-up row write fails leaves a file referenced by nothing. The
//! sweep deletes every stored image whose filename is not in the
//! referenced set the caller collected from the listing tables.

use std::collections::HashSet;
use std::path::PathBuf;
use serde::Serialize;
use tokio::fs;

/// Result of one sweep
#[derive(Debug, Clone, Serialize)]
pub struct CleanupReport {
    pub scanned: usize,
    pub deleted: usize,
}

/// 图片清理服务
#[derive(Clone)]
pub struct ImageCleanupService {
    /// 图片目录路径: {work_dir}/images/
    images_dir: PathBuf,
}

impl ImageCleanupService {
    pub fn new(images_dir: PathBuf) -> Self {
        Self { images_dir }
    }

    /// Delete stored images whose filename is not referenced.
    ///
    /// Unreadable directory entries are skipped; a failed delete is
    /// logged and the sweep continues.
    pub async fn sweep(&self, referenced: &HashSet<String>) -> CleanupReport {
        let mut scanned = 0;
        let mut deleted = 0;

        let mut entries = match fs::read_dir(&self.images_dir).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = ?self.images_dir, error = %e, "Failed to read images dir");
                return CleanupReport { scanned, deleted };
            }
        };

        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            scanned += 1;
            if referenced.contains(filename) {
                continue;
            }

            match fs::remove_file(&path).await {
                Ok(_) => deleted += 1,
                Err(e) => {
                    tracing::warn!(file = %filename, error = %e, "Failed to delete orphan image");
                }
            }
        }

        if deleted > 0 {
            tracing::info!(count = deleted, "Orphan images cleaned up");
        }

        CleanupReport { scanned, deleted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sweep_deletes_only_unreferenced_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("keep.jpg"), b"flyer").unwrap();
        std::fs::write(dir.path().join("orphan.jpg"), b"stale").unwrap();

        let mut referenced = HashSet::new();
        referenced.insert("keep.jpg".to_string());

        let service = ImageCleanupService::new(dir.path().to_path_buf());
        let report = service.sweep(&referenced).await;

        assert_eq!(report.scanned, 2);
        assert_eq!(report.deleted, 1);
        assert!(dir.path().join("keep.jpg").exists());
        assert!(!dir.path().join("orphan.jpg").exists());
    }

    #[tokio::test]
    async fn test_sweep_of_missing_dir_reports_nothing() {
        let service = ImageCleanupService::new(PathBuf::from("/nonexistent/vitrina-images"));
        let report = service.sweep(&HashSet::new()).await;
        assert_eq!(report.scanned, 0);
        assert_eq!(report.deleted, 0);
    }
}
