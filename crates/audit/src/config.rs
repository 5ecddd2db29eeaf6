//! Audit log configuration (environment-driven).

use core::str::FromStr;
use std::path::PathBuf;

/// Path of the audit log file.
pub const AUDIT_LOG_ENV: &str = "DEPOT_AUDIT_LOG";
/// `text` or `json`.
pub const AUDIT_FORMAT_ENV: &str = "DEPOT_AUDIT_FORMAT";

const DEFAULT_AUDIT_LOG: &str = "audit/warehouse.log";

/// On-disk layout of audit records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuditFormat {
    /// Human-readable blocks separated by a rule line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for AuditFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(AuditFormat::Text),
            "json" | "jsonl" => Ok(AuditFormat::Json),
            other => Err(format!("unknown audit format '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    pub path: PathBuf,
    pub format: AuditFormat,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_AUDIT_LOG),
            format: AuditFormat::default(),
        }
    }
}

impl AuditConfig {
    /// Read `DEPOT_AUDIT_LOG` / `DEPOT_AUDIT_FORMAT` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing keys use defaults; an
    /// unrecognized format falls back to text.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = match lookup(AUDIT_LOG_ENV).filter(|p| !p.trim().is_empty()) {
            Some(p) => PathBuf::from(p),
            None => {
                tracing::info!("{AUDIT_LOG_ENV} not set; using {DEFAULT_AUDIT_LOG}");
                PathBuf::from(DEFAULT_AUDIT_LOG)
            }
        };

        let format = match lookup(AUDIT_FORMAT_ENV) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{e}; falling back to text audit format");
                AuditFormat::Text
            }),
            None => AuditFormat::default(),
        };

        Self { path, format }
    }
}
