//! Section domain entity
//!
//! A named part of a song (verse, chorus, ...) inside a project.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::time::touch;
use crate::domain::value_objects::{EntityId, SectionName};
use crate::error::ValidationError;

/// A section of a project
///
/// `order_index` is expected to be unique within its project. The entity does
/// not check this; reorder operations re-sequence the whole project at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    id: EntityId,
    project_id: EntityId,
    name: SectionName,
    order_index: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Section {
    pub fn create(
        project_id: EntityId,
        name: &str,
        order_index: i32,
    ) -> Result<Self, ValidationError> {
        Ok(Self::with_name(project_id, SectionName::new(name)?, order_index))
    }

    /// Build a section from an already validated name
    pub(crate) fn with_name(project_id: EntityId, name: SectionName, order_index: i32) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::generate(),
            project_id,
            name,
            order_index,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn reconstruct(
        id: EntityId,
        project_id: EntityId,
        name: &str,
        order_index: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            project_id,
            name: SectionName::new(name)?,
            order_index,
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn project_id(&self) -> &EntityId {
        &self.project_id
    }

    pub fn name(&self) -> &SectionName {
        &self.name
    }

    pub fn order_index(&self) -> i32 {
        self.order_index
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn update_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = SectionName::new(name)?;
        self.updated_at = touch(self.updated_at);
        Ok(())
    }

    pub fn reorder(&mut self, order_index: i32) {
        self.order_index = order_index;
        self.updated_at = touch(self.updated_at);
    }
}
