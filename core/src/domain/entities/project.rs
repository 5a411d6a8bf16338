//! Project domain entity
//!
//! A song draft. The project is the aggregate root for its sections; deleting
//! a project removes its sections and their lines.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::section::Section;
use crate::domain::time::touch;
use crate::domain::value_objects::{EntityId, ProjectTitle, SectionName};
use crate::error::ValidationError;

/// A song draft made of ordered sections
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    id: EntityId,
    title: ProjectTitle,
    folder_id: Option<EntityId>,
    genre_id: Option<EntityId>,
    sections: Vec<Section>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project
    ///
    /// One section is created per entry in `section_names`, indexed in the
    /// order given.
    pub fn create(
        title: &str,
        folder_id: Option<EntityId>,
        genre_id: Option<EntityId>,
        section_names: &[SectionName],
    ) -> Result<Self, ValidationError> {
        Ok(Self::with_title(
            ProjectTitle::new(title)?,
            folder_id,
            genre_id,
            section_names,
        ))
    }

    /// Build a project from an already validated title
    pub(crate) fn with_title(
        title: ProjectTitle,
        folder_id: Option<EntityId>,
        genre_id: Option<EntityId>,
        section_names: &[SectionName],
    ) -> Self {
        let id = EntityId::generate();
        let sections = section_names
            .iter()
            .zip(0..)
            .map(|(name, index)| Section::with_name(id.clone(), name.clone(), index))
            .collect();
        let now = Utc::now();

        Self {
            id,
            title,
            folder_id,
            genre_id,
            sections,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rehydrate a stored project. Sections are kept sorted by `order_index`.
    pub fn reconstruct(
        id: EntityId,
        title: &str,
        folder_id: Option<EntityId>,
        genre_id: Option<EntityId>,
        mut sections: Vec<Section>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        sections.sort_by_key(Section::order_index);
        Ok(Self {
            id,
            title: ProjectTitle::new(title)?,
            folder_id,
            genre_id,
            sections,
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn title(&self) -> &ProjectTitle {
        &self.title
    }

    pub fn folder_id(&self) -> Option<&EntityId> {
        self.folder_id.as_ref()
    }

    pub fn genre_id(&self) -> Option<&EntityId> {
        self.genre_id.as_ref()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section names in display order
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name().as_str()).collect()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn update_title(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = ProjectTitle::new(title)?;
        self.updated_at = touch(self.updated_at);
        Ok(())
    }

    /// Move into a folder, or out of any folder with `None`
    pub fn move_to_folder(&mut self, folder_id: Option<EntityId>) {
        self.folder_id = folder_id;
        self.updated_at = touch(self.updated_at);
    }

    pub fn set_genre(&mut self, genre_id: Option<EntityId>) {
        self.genre_id = genre_id;
        self.updated_at = touch(self.updated_at);
    }
}
