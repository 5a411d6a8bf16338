//! Tag domain entity

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_objects::{EntityId, TagColor, TagName};
use crate::error::ValidationError;

/// A label that can be attached to projects. Tags are created once and never
/// edited; a different tag is a new tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    id: EntityId,
    name: TagName,
    color: TagColor,
    created_at: DateTime<Utc>,
}

impl Tag {
    pub fn create(name: &str, color: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: EntityId::generate(),
            name: TagName::new(name)?,
            color: TagColor::new(color)?,
            created_at: Utc::now(),
        })
    }

    pub fn reconstruct(
        id: EntityId,
        name: &str,
        color: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: TagName::new(name)?,
            color: TagColor::new(color)?,
            created_at,
        })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &TagName {
        &self.name
    }

    pub fn color(&self) -> &TagColor {
        &self.color
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
