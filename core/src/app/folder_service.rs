//! Folder service
//!
//! Create, rename, delete and reorder folders.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::quota;
use crate::domain::entities::Folder;
use crate::domain::ports::FolderRepository;
use crate::domain::value_objects::EntityId;
use crate::error::{DomainError, EntityKind};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFolderInput {
    pub name: String,
    #[serde(default)]
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFolderInput {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteFolderInput {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReorderFoldersInput {
    pub folder_ids: Vec<String>,
}

/// Result of creating or updating a folder
#[derive(Debug, Clone, Serialize)]
pub struct FolderResult {
    pub folder: Folder,
}

/// Service for folder use cases
pub struct FolderService<FR>
where
    FR: FolderRepository,
{
    folders: Arc<FR>,
    quota: Option<u64>,
}

impl<FR> FolderService<FR>
where
    FR: FolderRepository,
{
    pub fn new(folders: Arc<FR>) -> Self {
        Self {
            folders,
            quota: None,
        }
    }

    /// Limit how many folders a user may own
    pub fn with_quota(mut self, quota: Option<u64>) -> Self {
        self.quota = quota;
        self
    }

    /// Create a folder
    ///
    /// The name is validated before any repository call.
    pub async fn create(&self, input: CreateFolderInput) -> Result<FolderResult, DomainError> {
        let folder = Folder::create(&input.name, input.order_index)?;

        if let Some(limit) = self.quota {
            let count = self.folders.count_by_user().await?;
            quota::ensure_below(EntityKind::Folder, count, limit)?;
        }

        self.folders.save(&folder).await?;
        tracing::debug!(folder_id = %folder.id(), "Folder created");

        Ok(FolderResult { folder })
    }

    /// Rename a folder
    pub async fn update(&self, input: UpdateFolderInput) -> Result<FolderResult, DomainError> {
        let id = EntityId::parse(&input.id)?;
        let mut folder = self.load(&id).await?;

        folder.update_name(&input.name)?;
        self.folders.save(&folder).await?;
        tracing::debug!(folder_id = %id, "Folder renamed");

        Ok(FolderResult { folder })
    }

    /// Delete a folder after checking that it exists
    pub async fn delete(&self, input: DeleteFolderInput) -> Result<(), DomainError> {
        let id = EntityId::parse(&input.id)?;
        self.load(&id).await?;

        self.folders.delete(&id).await?;
        tracing::debug!(folder_id = %id, "Folder deleted");
        Ok(())
    }

    /// Re-sequence folders in the given order
    ///
    /// Every id is validated first; one malformed id aborts the whole call.
    pub async fn reorder(&self, input: ReorderFoldersInput) -> Result<(), DomainError> {
        let ids = EntityId::parse_all(&input.folder_ids)?;
        if ids.is_empty() {
            return Ok(());
        }

        self.folders.reorder(&ids).await?;
        tracing::debug!(count = ids.len(), "Folders reordered");
        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<Folder, DomainError> {
        let id = EntityId::parse(id)?;
        self.load(&id).await
    }

    /// All folders in display order
    pub async fn list(&self) -> Result<Vec<Folder>, DomainError> {
        self.folders.find_all().await
    }

    async fn load(&self, id: &EntityId) -> Result<Folder, DomainError> {
        self.folders
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Folder, id))
    }
}
