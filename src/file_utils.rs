use anyhow::{Result, Context, anyhow};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }
        Ok(())
    }

    /// Read a UTF-8 file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        if !Self::file_exists(path) {
            return Err(anyhow!("Input file does not exist: {}", path.display()));
        }
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Write `content` to `path` all at once.
    ///
    /// The content goes to a temporary file next to the destination, which
    /// is renamed over it only after the write succeeded. A failure leaves
    /// any previous file untouched and no partial output behind; the
    /// temporary file is removed when dropped.
    pub fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        let path = path.as_ref();
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        Self::ensure_dir(parent)?;

        let dir = if parent.as_os_str().is_empty() { Path::new(".") } else { parent };
        let mut temp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;

        temp.write_all(content.as_bytes())
            .and_then(|_| temp.flush())
            .with_context(|| format!("Failed to write output for: {}", path.display()))?;

        temp.persist(path)
            .map_err(|e| anyhow!("Failed to write to file {}: {}", path.display(), e.error))?;

        Ok(())
    }
}
