//! Tag service
//!
//! Tags are created once and deleted; they are never edited or reordered.
//! Names are unique per user.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::quota;
use crate::domain::entities::Tag;
use crate::domain::ports::TagRepository;
use crate::domain::value_objects::EntityId;
use crate::error::{DomainError, EntityKind};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTagInput {
    pub name: String,
    /// `#RRGGBB`; the default color is used when absent
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteTagInput {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagResult {
    pub tag: Tag,
}

/// Service for tag use cases
pub struct TagService<TR>
where
    TR: TagRepository,
{
    tags: Arc<TR>,
    quota: Option<u64>,
}

impl<TR> TagService<TR>
where
    TR: TagRepository,
{
    pub fn new(tags: Arc<TR>) -> Self {
        Self { tags, quota: None }
    }

    pub fn with_quota(mut self, quota: Option<u64>) -> Self {
        self.quota = quota;
        self
    }

    /// Create a tag, rejecting a name that is already taken
    pub async fn create(&self, input: CreateTagInput) -> Result<TagResult, DomainError> {
        let tag = Tag::create(&input.name, input.color.as_deref())?;

        if self.tags.exists_by_name(tag.name()).await? {
            return Err(DomainError::AlreadyExists {
                entity: EntityKind::Tag,
                name: tag.name().to_string(),
            });
        }

        if let Some(limit) = self.quota {
            let count = self.tags.count_by_user().await?;
            quota::ensure_below(EntityKind::Tag, count, limit)?;
        }

        self.tags.save(&tag).await?;
        tracing::debug!(tag_id = %tag.id(), "Tag created");

        Ok(TagResult { tag })
    }

    /// Delete a tag without an existence check
    pub async fn delete(&self, input: DeleteTagInput) -> Result<(), DomainError> {
        let id = EntityId::parse(&input.id)?;
        self.tags.delete(&id).await?;
        tracing::debug!(tag_id = %id, "Tag deleted");
        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<Tag, DomainError> {
        let id = EntityId::parse(id)?;
        self.tags
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Tag, &id))
    }

    pub async fn list(&self) -> Result<Vec<Tag>, DomainError> {
        self.tags.find_all().await
    }
}
