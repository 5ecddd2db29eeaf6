//! Domain error model.

use thiserror::Error;

use crate::id::ArticleId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (authorization,
/// missing records, conflicts). A domain error always means nothing was mutated.
/// Infrastructure concerns (the audit sink) belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. arithmetic overflow on a count or total).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The record a transition needs is not where it is expected to be.
    #[error("not found: {0}")]
    NotFound(String),

    /// A conflict occurred (e.g. duplicate order id).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Not enough stock on hand to satisfy a request.
    #[error("insufficient stock for article {article}: requested {requested}, available {available}")]
    InsufficientStock {
        article: ArticleId,
        requested: u64,
        available: u64,
    },

    /// The acting staff member lacks the required authorization.
    #[error("unauthorized")]
    Unauthorized,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Whether this is a conflict-class failure (duplicate id or short stock).
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_) | Self::InsufficientStock { .. })
    }
}
