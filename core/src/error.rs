//! Error types for the lyricdraft core
//!
//! Two layers:
//! - `ValidationError`: raised by value objects and `EntityId` on malformed input
//! - `DomainError`: everything a use case can return (validation, not found,
//!   quota, repository failures)
//!
//! Errors carry a machine-checkable kind plus structured context. Turning them
//! into user-facing text is the job of `crate::presentation`.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Free-text field that a value object guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FolderName,
    ProjectTitle,
    SectionName,
    PhraseText,
    GenreName,
    GenreDescription,
    TagName,
    TagColor,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::FolderName => write!(f, "folder name"),
            Field::ProjectTitle => write!(f, "project title"),
            Field::SectionName => write!(f, "section name"),
            Field::PhraseText => write!(f, "phrase text"),
            Field::GenreName => write!(f, "genre name"),
            Field::GenreDescription => write!(f, "genre description"),
            Field::TagName => write!(f, "tag name"),
            Field::TagColor => write!(f, "tag color"),
        }
    }
}

/// Kind of entity an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Folder,
    Project,
    Section,
    Line,
    Phrase,
    Tag,
    Genre,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Folder => write!(f, "Folder"),
            EntityKind::Project => write!(f, "Project"),
            EntityKind::Section => write!(f, "Section"),
            EntityKind::Line => write!(f, "Line"),
            EntityKind::Phrase => write!(f, "Phrase"),
            EntityKind::Tag => write!(f, "Tag"),
            EntityKind::Genre => write!(f, "Genre"),
        }
    }
}

/// Input rejected by a value object or by `EntityId`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Empty { field: Field },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: Field, max: usize },

    #[error("{field} has an invalid format")]
    InvalidFormat { field: Field },

    #[error("invalid id: {raw:?}")]
    InvalidId { raw: String },
}

impl ValidationError {
    /// The field that failed, if the error is tied to one
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::Empty { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field } => Some(*field),
            ValidationError::InvalidId { .. } => None,
        }
    }
}

/// Machine-checkable classification of a `DomainError`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    NotFound,
    AlreadyExists,
    QuotaExceeded,
    Repository,
}

/// Errors surfaced by use cases
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    #[error("{entity} already exists: {name}")]
    AlreadyExists { entity: EntityKind, name: String },

    #[error("{entity} quota exceeded (limit {limit})")]
    QuotaExceeded { entity: EntityKind, limit: u64 },

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found(entity: EntityKind, id: impl fmt::Display) -> Self {
        DomainError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation(_) => ErrorKind::Validation,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            DomainError::QuotaExceeded { .. } => ErrorKind::QuotaExceeded,
            DomainError::Repository(_) => ErrorKind::Repository,
        }
    }
}
