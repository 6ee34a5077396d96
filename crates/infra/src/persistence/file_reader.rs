use std::{fs::File, io::Read, path::Path};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Read the entire file into memory. The handle is closed before returning,
    /// on success and on failure alike.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = Self::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
