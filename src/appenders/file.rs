//! File appender implementation

use crate::core::{Appender, LogRecord, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends formatted records to a text file, one record per write.
///
/// Several appenders may hold the same path open; with the `file` feature each
/// write takes an advisory exclusive lock so records never interleave.
pub struct FileAppender {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileAppender {
    /// Open `path` for appending, creating the file if it does not exist.
    ///
    /// The parent directory must already exist.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::io_operation("opening log file", path.display().to_string(), e))?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(feature = "file")]
    fn write_locked(path: &Path, writer: &mut BufWriter<File>, bytes: &[u8]) -> Result<()> {
        use fs2::FileExt;

        writer
            .get_ref()
            .lock_exclusive()
            .map_err(|_| LoggerError::file_lock(path.display().to_string()))?;
        let written = writer.write_all(bytes).and_then(|()| writer.flush());
        let unlocked = writer.get_ref().unlock();
        written?;
        unlocked?;
        Ok(())
    }

    #[cfg(not(feature = "file"))]
    fn write_locked(_path: &Path, writer: &mut BufWriter<File>, bytes: &[u8]) -> Result<()> {
        writer.write_all(bytes)?;
        writer.flush()?;
        Ok(())
    }
}

impl Appender for FileAppender {
    fn append(&mut self, text: &str, _record: &LogRecord) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;

        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');

        Self::write_locked(&self.path, writer, line.as_bytes())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
