use crate::ports::outbound::OutputPresenter;
use crate::shared::security::validate_output_target;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Writes the rendered report to the `--output` path
pub struct ReportFileWriter {
    output_path: PathBuf,
}

impl ReportFileWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl OutputPresenter for ReportFileWriter {
    fn present(&self, content: &str) -> Result<()> {
        validate_output_target(&self.output_path)?;

        fs::write(&self.output_path, content).with_context(|| {
            format!(
                "Failed to write report file: {}\n\n💡 Hint: Please verify that you have write permissions",
                self.output_path.display()
            )
        })?;

        eprintln!("✅ Report written: {}", self.output_path.display());
        Ok(())
    }
}

/// Prints the rendered report on stdout; the default when `--output` is absent
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(content.as_bytes())
            .and_then(|()| out.flush())
            .context("Failed to write report to stdout")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_file_writer_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.md");
        fs::write(&path, "old").unwrap();

        ReportFileWriter::new(path.clone()).present("new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_report_file_writer_missing_parent() {
        let dir = TempDir::new().unwrap();
        let writer = ReportFileWriter::new(dir.path().join("a").join("b.md"));
        assert!(writer.present("x").is_err());
    }

    #[test]
    fn test_stdout_presenter() {
        assert!(StdoutPresenter::default().present("").is_ok());
    }
}
