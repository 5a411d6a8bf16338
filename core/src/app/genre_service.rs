//! Genre service
//!
//! Genres are section-name templates used when creating projects.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::quota;
use crate::domain::entities::Genre;
use crate::domain::ports::GenreRepository;
use crate::domain::value_objects::EntityId;
use crate::error::{DomainError, EntityKind};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGenreInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub section_names: Vec<String>,
}

/// Full replacement of a genre's editable fields, as submitted by the edit form
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGenreInput {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub section_names: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteGenreInput {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenreResult {
    pub genre: Genre,
}

/// Service for genre use cases
pub struct GenreService<GR>
where
    GR: GenreRepository,
{
    genres: Arc<GR>,
    quota: Option<u64>,
}

impl<GR> GenreService<GR>
where
    GR: GenreRepository,
{
    pub fn new(genres: Arc<GR>) -> Self {
        Self {
            genres,
            quota: None,
        }
    }

    pub fn with_quota(mut self, quota: Option<u64>) -> Self {
        self.quota = quota;
        self
    }

    pub async fn create(&self, input: CreateGenreInput) -> Result<GenreResult, DomainError> {
        let genre = Genre::create(
            &input.name,
            input.description.as_deref(),
            &input.section_names,
        )?;

        if let Some(limit) = self.quota {
            let count = self.genres.count_by_user().await?;
            quota::ensure_below(EntityKind::Genre, count, limit)?;
        }

        self.genres.save(&genre).await?;
        tracing::debug!(genre_id = %genre.id(), "Genre created");

        Ok(GenreResult { genre })
    }

    /// Replace name, description and template in one step
    ///
    /// Any invalid field aborts the update; nothing is saved.
    pub async fn update(&self, input: UpdateGenreInput) -> Result<GenreResult, DomainError> {
        let id = EntityId::parse(&input.id)?;
        let mut genre = self.load(&id).await?;

        genre.update_name(&input.name)?;
        genre.update_description(input.description.as_deref())?;
        genre.replace_section_names(&input.section_names)?;

        self.genres.save(&genre).await?;
        tracing::debug!(genre_id = %id, "Genre updated");

        Ok(GenreResult { genre })
    }

    pub async fn delete(&self, input: DeleteGenreInput) -> Result<(), DomainError> {
        let id = EntityId::parse(&input.id)?;
        self.load(&id).await?;

        self.genres.delete(&id).await?;
        tracing::debug!(genre_id = %id, "Genre deleted");
        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<Genre, DomainError> {
        let id = EntityId::parse(id)?;
        self.load(&id).await
    }

    pub async fn list(&self) -> Result<Vec<Genre>, DomainError> {
        self.genres.find_all().await
    }

    async fn load(&self, id: &EntityId) -> Result<Genre, DomainError> {
        self.genres
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Genre, id))
    }
}
