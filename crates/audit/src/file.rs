//! File-backed audit log.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{AuditConfig, AuditError, AuditFormat, AuditRecord, AuditSink};

const RULE: &str = "------------------------------------";

/// Appends records to a file, opening it in append mode for every write.
///
/// The parent directory is created on demand. Nothing is buffered between
/// calls, so a record is either written by `append` or reported as failed.
#[derive(Debug, Clone)]
pub struct FileAuditLog {
    path: PathBuf,
    format: AuditFormat,
}

impl FileAuditLog {
    pub fn new(path: impl Into<PathBuf>, format: AuditFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn from_config(config: &AuditConfig) -> Self {
        Self::new(config.path.clone(), config.format)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> AuditFormat {
        self.format
    }

    fn render(&self, record: &AuditRecord) -> Result<String, AuditError> {
        match self.format {
            AuditFormat::Text => Ok(format!(
                "[{}] {}\n{}\n{RULE}\n",
                record.recorded_at.to_rfc3339(),
                record.action,
                record.message
            )),
            AuditFormat::Json => {
                let mut line = serde_json::to_string(record)?;
                line.push('\n');
                Ok(line)
            }
        }
    }

    fn io_error(&self, source: std::io::Error) -> AuditError {
        AuditError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl AuditSink for FileAuditLog {
    fn append(&self, record: &AuditRecord) -> Result<(), AuditError> {
        let entry = self.render(record)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        file.write_all(entry.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| self.io_error(e))?;

        tracing::trace!(
            action = %record.action,
            path = %self.path.display(),
            "audit record appended"
        );
        Ok(())
    }
}
