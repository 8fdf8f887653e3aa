//! Line-flushed report file writer.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::ReportError;

#[cfg(windows)]
const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEPARATOR: &str = "\n";

/// Append-only writer that flushes after every line.
///
/// Creation truncates the file and writes one placeholder blank line;
/// the file is then reopened in append mode for all further writes. Every
/// [`append_line`][Self::append_line] reaches the file before returning,
/// so rows written before a crash are preserved.
pub struct ReportWriter {
    path: PathBuf,
    file: File,
}

impl ReportWriter {
    /// Creates (or truncates) the report file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::IoError`] if the file cannot be created or
    /// reopened for append.
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        {
            let mut file = File::create(path).map_err(|e| io_error(path, e))?;
            file.write_all(LINE_SEPARATOR.as_bytes())
                .map_err(|e| io_error(path, e))?;
        }

        let file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| io_error(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Appends one line, terminated by the platform line separator, and
    /// flushes it.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::IoError`] if the write fails.
    pub fn append_line(&mut self, text: &str) -> Result<(), ReportError> {
        self.file
            .write_all(text.as_bytes())
            .and_then(|()| self.file.write_all(LINE_SEPARATOR.as_bytes()))
            .and_then(|()| self.file.flush())
            .map_err(|e| io_error(&self.path, e))
    }

    /// Path of the report file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ReportError {
    ReportError::IoError {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn starts_with_a_placeholder_blank_line() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.html");

        let _writer = ReportWriter::create(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), LINE_SEPARATOR);
    }

    #[test]
    fn appends_lines_in_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.html");

        let mut writer = ReportWriter::create(&path).unwrap();
        writer.append_line("<table>").unwrap();
        writer.append_line("</table>").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["", "<table>", "</table>"]);
    }

    #[test]
    fn each_line_is_flushed_immediately() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.html");

        let mut writer = ReportWriter::create(&path).unwrap();
        writer.append_line("partial").unwrap();

        // visible before the writer is dropped
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("partial"));
    }

    #[test]
    fn create_truncates_an_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.html");
        fs::write(&path, "stale content from a previous run").unwrap();

        let _writer = ReportWriter::create(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), LINE_SEPARATOR);
    }
}
