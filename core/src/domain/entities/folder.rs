//! Folder domain entity
//!
//! Groups projects. Folders are ordered by `order_index` in the sidebar.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::time::touch;
use crate::domain::value_objects::{EntityId, FolderName};
use crate::error::ValidationError;

/// A user-defined folder of projects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Folder {
    id: EntityId,
    name: FolderName,
    order_index: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Folder {
    /// Create a new folder; `order_index` defaults to 0
    pub fn create(name: &str, order_index: Option<i32>) -> Result<Self, ValidationError> {
        let name = FolderName::new(name)?;
        let now = Utc::now();
        Ok(Self {
            id: EntityId::generate(),
            name,
            order_index: order_index.unwrap_or(0),
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrate a stored folder
    pub fn reconstruct(
        id: EntityId,
        name: &str,
        order_index: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: FolderName::new(name)?,
            order_index,
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &FolderName {
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

    /// Rename the folder. On error the folder is left untouched.
    pub fn update_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = FolderName::new(name)?;
        self.updated_at = touch(self.updated_at);
        Ok(())
    }

    pub fn reorder(&mut self, order_index: i32) {
        self.order_index = order_index;
        self.updated_at = touch(self.updated_at);
    }
}
