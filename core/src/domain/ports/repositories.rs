//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (the hosted backend in the app,
//! `adapters::memory` in-process).
//!
//! All repositories are scoped to the signed-in user by the implementation;
//! `count_by_user` counts that user's rows and backs quota checks.

use async_trait::async_trait;

use crate::domain::entities::{Folder, Genre, Line, Phrase, Project, Section, Tag};
use crate::domain::value_objects::{EntityId, TagName};
use crate::error::DomainError;

/// Repository for Folder entities
#[async_trait]
pub trait FolderRepository: Send + Sync {
    /// Insert or update a folder
    async fn save(&self, folder: &Folder) -> Result<(), DomainError>;

    /// Find a folder by ID
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Folder>, DomainError>;

    /// All folders, ordered by `order_index`
    async fn find_all(&self) -> Result<Vec<Folder>, DomainError>;

    /// Delete a folder. Projects inside it are kept and lose their folder.
    async fn delete(&self, id: &EntityId) -> Result<(), DomainError>;

    async fn count_by_user(&self) -> Result<u64, DomainError>;

    /// Re-sequence folders atomically: `ids[i]` gets `order_index = i`
    async fn reorder(&self, ids: &[EntityId]) -> Result<(), DomainError>;
}

/// Repository for Project aggregates
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Insert or update a project
    ///
    /// The sections it holds are stored only when the project is first
    /// inserted; later changes to sections go through `SectionRepository`.
    async fn save(&self, project: &Project) -> Result<(), DomainError>;

    /// Find a project by ID, sections loaded in order
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Project>, DomainError>;

    /// All projects, most recently updated first
    async fn find_all(&self) -> Result<Vec<Project>, DomainError>;

    /// Projects in a folder, or outside any folder with `None`
    async fn find_by_folder(
        &self,
        folder_id: Option<&EntityId>,
    ) -> Result<Vec<Project>, DomainError>;

    /// Delete a project and cascade to its sections and lines
    async fn delete(&self, id: &EntityId) -> Result<(), DomainError>;

    async fn count_by_user(&self) -> Result<u64, DomainError>;
}

/// Repository for Section entities
#[async_trait]
pub trait SectionRepository: Send + Sync {
    async fn save(&self, section: &Section) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Section>, DomainError>;

    /// Sections of a project, ordered by `order_index`
    async fn find_by_project(&self, project_id: &EntityId) -> Result<Vec<Section>, DomainError>;

    /// Delete a section and cascade to its lines
    async fn delete(&self, id: &EntityId) -> Result<(), DomainError>;

    async fn count_by_user(&self) -> Result<u64, DomainError>;

    /// Re-sequence sections atomically: `ids[i]` gets `order_index = i`
    async fn reorder(&self, ids: &[EntityId]) -> Result<(), DomainError>;
}

/// Repository for Line entities
#[async_trait]
pub trait LineRepository: Send + Sync {
    async fn save(&self, line: &Line) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Line>, DomainError>;

    /// Lines of a section, ordered by `line_index`
    async fn find_by_section(&self, section_id: &EntityId) -> Result<Vec<Line>, DomainError>;

    /// Delete a line; deleting a missing line is not an error
    async fn delete(&self, id: &EntityId) -> Result<(), DomainError>;

    async fn count_by_user(&self) -> Result<u64, DomainError>;

    /// Re-sequence lines atomically: `ids[i]` gets `line_index = i`
    async fn reorder(&self, ids: &[EntityId]) -> Result<(), DomainError>;
}

/// Repository for Phrase entities
#[async_trait]
pub trait PhraseRepository: Send + Sync {
    async fn save(&self, phrase: &Phrase) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Phrase>, DomainError>;

    /// All phrases, newest first
    async fn find_all(&self) -> Result<Vec<Phrase>, DomainError>;

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError>;

    async fn count_by_user(&self) -> Result<u64, DomainError>;
}

/// Repository for Tag entities
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn save(&self, tag: &Tag) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Tag>, DomainError>;

    /// All tags, ordered by name
    async fn find_all(&self) -> Result<Vec<Tag>, DomainError>;

    /// Delete a tag; deleting a missing tag is not an error
    async fn delete(&self, id: &EntityId) -> Result<(), DomainError>;

    async fn count_by_user(&self) -> Result<u64, DomainError>;

    /// Check whether a tag with this exact name exists
    async fn exists_by_name(&self, name: &TagName) -> Result<bool, DomainError>;
}

/// Repository for Genre entities
#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn save(&self, genre: &Genre) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Genre>, DomainError>;

    /// All genres, ordered by name
    async fn find_all(&self) -> Result<Vec<Genre>, DomainError>;

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError>;

    async fn count_by_user(&self) -> Result<u64, DomainError>;
}
