//! Finding source photos in a folder.

use std::path::{Path, PathBuf};

/// File extensions (lowercase) accepted as photos.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tiff"];

/// Supplies the ordered list of photos in a folder.
pub trait ImageSource {
    /// Photos in `folder`, or `None` if the folder cannot be read.
    fn list_images(&self, folder: &Path) -> Option<Vec<PathBuf>>;
}

/// Lists photos directly inside a directory (not recursive), sorted by path.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectorySource;

impl ImageSource for DirectorySource {
    fn list_images(&self, folder: &Path) -> Option<Vec<PathBuf>> {
        let entries = match std::fs::read_dir(folder) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(folder = %folder.display(), error = %e, "Cannot read folder");
                return None;
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_supported_image(path))
            .collect();
        files.sort();

        tracing::debug!(folder = %folder.display(), count = files.len(), "Found images");
        Some(files)
    }
}

/// Whether `path` has a supported photo extension (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_image(Path::new("a.jpg")));
        assert!(is_supported_image(Path::new("a.JPEG")));
        assert!(is_supported_image(Path::new("dir/b.Tiff")));
        assert!(!is_supported_image(Path::new("a.webp")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("README")));
    }

    #[test]
    fn test_lists_sorted_images_only() {
        let dir = TempDir::new().unwrap();
        for name in ["c.png", "a.JPG", "b.txt", "b.gif"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.jpg")).unwrap();

        let files = DirectorySource.list_images(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.gif", "c.png"]);
    }

    #[test]
    fn test_empty_folder() {
        let dir = TempDir::new().unwrap();
        assert_eq!(DirectorySource.list_images(dir.path()), Some(vec![]));
    }

    #[test]
    fn test_missing_folder() {
        let dir = TempDir::new().unwrap();
        assert_eq!(DirectorySource.list_images(&dir.path().join("BIG")), None);
    }
}
