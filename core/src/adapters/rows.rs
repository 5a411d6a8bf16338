//! Storage row shapes
//!
//! Rows mirror the persisted column layout: snake_case fields, string ids and
//! epoch timestamps. Older clients wrote seconds, newer ones milliseconds, so
//! every timestamp goes through `normalize_timestamp` on the way in. Rows are
//! always written back in milliseconds.
//!
//! Converting a row into an entity re-runs the value-object checks; a row that
//! fails them is reported as a repository error, not a validation error, since
//! the caller never supplied that data.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Folder, Genre, Line, Phrase, Project, Section, Tag};
use crate::domain::time::timestamp_from_epoch;
use crate::domain::value_objects::EntityId;
use crate::error::DomainError;

pub const FOLDERS: &str = "folders";
pub const PROJECTS: &str = "projects";
pub const SECTIONS: &str = "sections";
pub const LINES: &str = "lines";
pub const PHRASES: &str = "phrases";
pub const TAGS: &str = "tags";
pub const GENRES: &str = "genres";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub order_index: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub genre_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRow {
    pub id: String,
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub order_index: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRow {
    pub id: String,
    pub section_id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub line_index: i32,
    #[serde(default)]
    pub mora_count: Option<u32>,
    #[serde(default)]
    pub rhyme_tail: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseRow {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub section_names: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

fn malformed(table: &str, id: &str, reason: impl Display) -> DomainError {
    DomainError::Repository(format!("malformed {} row {}: {}", table, id, reason))
}

fn row_id(table: &str, id: &str, raw: &str) -> Result<EntityId, DomainError> {
    EntityId::parse(raw).map_err(|e| malformed(table, id, e))
}

fn optional_row_id(
    table: &str,
    id: &str,
    raw: Option<&str>,
) -> Result<Option<EntityId>, DomainError> {
    raw.map(|raw| row_id(table, id, raw)).transpose()
}

fn row_time(table: &str, id: &str, raw: i64) -> Result<DateTime<Utc>, DomainError> {
    timestamp_from_epoch(raw)
        .ok_or_else(|| malformed(table, id, format!("timestamp {} out of range", raw)))
}

fn epoch_millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

impl FolderRow {
    pub fn into_entity(self) -> Result<Folder, DomainError> {
        let id = row_id(FOLDERS, &self.id, &self.id)?;
        Folder::reconstruct(
            id,
            &self.name,
            self.order_index,
            row_time(FOLDERS, &self.id, self.created_at)?,
            row_time(FOLDERS, &self.id, self.updated_at)?,
        )
        .map_err(|e| malformed(FOLDERS, &self.id, e))
    }
}

impl From<&Folder> for FolderRow {
    fn from(folder: &Folder) -> Self {
        Self {
            id: folder.id().to_string(),
            name: folder.name().to_string(),
            order_index: folder.order_index(),
            created_at: epoch_millis(folder.created_at()),
            updated_at: epoch_millis(folder.updated_at()),
        }
    }
}

impl ProjectRow {
    /// Rehydrate a project with its already loaded sections
    pub fn into_entity(self, sections: Vec<Section>) -> Result<Project, DomainError> {
        let id = row_id(PROJECTS, &self.id, &self.id)?;
        Project::reconstruct(
            id,
            &self.title,
            optional_row_id(PROJECTS, &self.id, self.folder_id.as_deref())?,
            optional_row_id(PROJECTS, &self.id, self.genre_id.as_deref())?,
            sections,
            row_time(PROJECTS, &self.id, self.created_at)?,
            row_time(PROJECTS, &self.id, self.updated_at)?,
        )
        .map_err(|e| malformed(PROJECTS, &self.id, e))
    }
}

/// The project columns only; sections are stored as their own rows
impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            title: project.title().to_string(),
            folder_id: project.folder_id().map(ToString::to_string),
            genre_id: project.genre_id().map(ToString::to_string),
            created_at: epoch_millis(project.created_at()),
            updated_at: epoch_millis(project.updated_at()),
        }
    }
}

impl SectionRow {
    pub fn into_entity(self) -> Result<Section, DomainError> {
        Section::reconstruct(
            row_id(SECTIONS, &self.id, &self.id)?,
            row_id(SECTIONS, &self.id, &self.project_id)?,
            &self.name,
            self.order_index,
            row_time(SECTIONS, &self.id, self.created_at)?,
            row_time(SECTIONS, &self.id, self.updated_at)?,
        )
        .map_err(|e| malformed(SECTIONS, &self.id, e))
    }
}

impl From<&Section> for SectionRow {
    fn from(section: &Section) -> Self {
        Self {
            id: section.id().to_string(),
            project_id: section.project_id().to_string(),
            name: section.name().to_string(),
            order_index: section.order_index(),
            created_at: epoch_millis(section.created_at()),
            updated_at: epoch_millis(section.updated_at()),
        }
    }
}

impl LineRow {
    pub fn into_entity(self) -> Result<Line, DomainError> {
        Ok(Line::reconstruct(
            row_id(LINES, &self.id, &self.id)?,
            row_id(LINES, &self.id, &self.section_id)?,
            &self.text,
            self.line_index,
            self.mora_count,
            self.rhyme_tail.as_deref(),
            row_time(LINES, &self.id, self.created_at)?,
            row_time(LINES, &self.id, self.updated_at)?,
        ))
    }
}

impl From<&Line> for LineRow {
    fn from(line: &Line) -> Self {
        Self {
            id: line.id().to_string(),
            section_id: line.section_id().to_string(),
            text: line.text().to_string(),
            line_index: line.line_index(),
            mora_count: line.mora_count(),
            rhyme_tail: line.rhyme_tail().map(str::to_string),
            created_at: epoch_millis(line.created_at()),
            updated_at: epoch_millis(line.updated_at()),
        }
    }
}

impl PhraseRow {
    pub fn into_entity(self) -> Result<Phrase, DomainError> {
        Phrase::reconstruct(
            row_id(PHRASES, &self.id, &self.id)?,
            &self.text,
            self.note.as_deref(),
            row_time(PHRASES, &self.id, self.created_at)?,
            row_time(PHRASES, &self.id, self.updated_at)?,
        )
        .map_err(|e| malformed(PHRASES, &self.id, e))
    }
}

impl From<&Phrase> for PhraseRow {
    fn from(phrase: &Phrase) -> Self {
        Self {
            id: phrase.id().to_string(),
            text: phrase.text().to_string(),
            note: phrase.note().map(str::to_string),
            created_at: epoch_millis(phrase.created_at()),
            updated_at: epoch_millis(phrase.updated_at()),
        }
    }
}

impl TagRow {
    pub fn into_entity(self) -> Result<Tag, DomainError> {
        Tag::reconstruct(
            row_id(TAGS, &self.id, &self.id)?,
            &self.name,
            self.color.as_deref(),
            row_time(TAGS, &self.id, self.created_at)?,
        )
        .map_err(|e| malformed(TAGS, &self.id, e))
    }
}

impl From<&Tag> for TagRow {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id().to_string(),
            name: tag.name().to_string(),
            color: tag.color().as_deref().map(str::to_string),
            created_at: epoch_millis(tag.created_at()),
        }
    }
}

impl GenreRow {
    pub fn into_entity(self) -> Result<Genre, DomainError> {
        Genre::reconstruct(
            row_id(GENRES, &self.id, &self.id)?,
            &self.name,
            self.description.as_deref(),
            &self.section_names,
            row_time(GENRES, &self.id, self.created_at)?,
            row_time(GENRES, &self.id, self.updated_at)?,
        )
        .map_err(|e| malformed(GENRES, &self.id, e))
    }
}

impl From<&Genre> for GenreRow {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id().to_string(),
            name: genre.name().to_string(),
            description: genre.description().as_deref().map(str::to_string),
            section_names: genre
                .section_names()
                .iter()
                .map(ToString::to_string)
                .collect(),
            created_at: epoch_millis(genre.created_at()),
            updated_at: epoch_millis(genre.updated_at()),
        }
    }
}
