use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist and was created
    Created,
    /// An existing file was replaced
    Overwritten,
}

/// A generated file held in memory until it is written.
///
/// Writing always replaces whatever is at the path; keeping earlier
/// versions is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the content as UTF-8, creating parent directories as needed.
    pub fn write(&self) -> Result<WriteResult> {
        let existed = self.exists();
        write_file(&self.path, &self.content)?;
        let result = if existed {
            WriteResult::Overwritten
        } else {
            WriteResult::Created
        };
        tracing::debug!(path = %self.path.display(), ?result, "wrote file");
        Ok(result)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| Error::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("my.h");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("my.c");

        let file = File::new(&path, "const char * version = \"0.01\";\n");
        assert!(!file.exists());
        let result = file.write().unwrap();

        assert_eq!(result, WriteResult::Created);
        assert!(file.exists());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "const char * version = \"0.01\";\n"
        );
    }

    #[test]
    fn test_file_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("my.c");

        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Overwritten);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_reports_io_error() {
        let temp = TempDir::new().unwrap();
        // A directory sits where the file should go.
        let path = temp.path().join("taken.c");
        fs::create_dir(&path).unwrap();

        match File::new(&path, "x").write() {
            Err(Error::Io { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
