//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::config::{Config, ThreadLink};
use crate::error::Result;

/// Build the destination folder path for one thread:
/// `<output_directory>/<prefix>_<board>_<thread>`.
pub fn thread_folder(config: &Config, link: &ThreadLink) -> PathBuf {
    let base_dir = config.output_directory();

    base_dir.join(format!(
        "{}_{}_{}",
        config.options.folder_prefix, link.board, link.thread
    ))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_folder_pattern() {
        let mut config = Config::default();
        config.options.output_directory = Some(PathBuf::from("/downloads"));

        let link = ThreadLink {
            board: "b".to_string(),
            thread: "292606618".to_string(),
        };

        assert_eq!(
            thread_folder(&config, &link),
            PathBuf::from("/downloads/2ch_files_b_292606618")
        );
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b/c");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Idempotent on an existing directory
        ensure_dir(&nested).unwrap();
    }
}
