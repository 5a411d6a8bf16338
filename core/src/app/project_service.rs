//! Project service
//!
//! Handles song drafts: creation (optionally from a genre template), title,
//! folder and genre changes, and deletion.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::quota;
use crate::domain::entities::Project;
use crate::domain::ports::{GenreRepository, ProjectRepository};
use crate::domain::value_objects::{EntityId, ProjectTitle, SectionName};
use crate::error::{DomainError, EntityKind};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectInput {
    pub title: String,
    #[serde(default)]
    pub folder_id: Option<String>,
    /// When set, the genre's section names become the project's sections
    #[serde(default)]
    pub genre_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectTitleInput {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveProjectInput {
    pub id: String,
    /// Target folder; `None` takes the project out of its folder
    #[serde(default)]
    pub folder_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetProjectGenreInput {
    pub id: String,
    #[serde(default)]
    pub genre_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteProjectInput {
    pub id: String,
}

/// Result of creating or updating a project
#[derive(Debug, Clone, Serialize)]
pub struct ProjectResult {
    pub project: Project,
}

/// Service for project use cases
pub struct ProjectService<PR, GR>
where
    PR: ProjectRepository,
    GR: GenreRepository,
{
    projects: Arc<PR>,
    genres: Arc<GR>,
    quota: Option<u64>,
}

impl<PR, GR> ProjectService<PR, GR>
where
    PR: ProjectRepository,
    GR: GenreRepository,
{
    pub fn new(projects: Arc<PR>, genres: Arc<GR>) -> Self {
        Self {
            projects,
            genres,
            quota: None,
        }
    }

    pub fn with_quota(mut self, quota: Option<u64>) -> Self {
        self.quota = quota;
        self
    }

    /// Create a project
    ///
    /// Title and ids are validated before any I/O. With a genre, the genre is
    /// loaded (NotFound if missing) and its template seeds the sections.
    pub async fn create(&self, input: CreateProjectInput) -> Result<ProjectResult, DomainError> {
        let title = ProjectTitle::new(&input.title)?;
        let folder_id = EntityId::parse_optional(input.folder_id.as_deref())?;
        let genre_id = EntityId::parse_optional(input.genre_id.as_deref())?;

        let template: Vec<SectionName> = match &genre_id {
            Some(id) => self
                .genres
                .find_by_id(id)
                .await?
                .ok_or_else(|| DomainError::not_found(EntityKind::Genre, id))?
                .section_names()
                .to_vec(),
            None => Vec::new(),
        };

        let project = Project::with_title(title, folder_id, genre_id, &template);

        if let Some(limit) = self.quota {
            let count = self.projects.count_by_user().await?;
            quota::ensure_below(EntityKind::Project, count, limit)?;
        }

        self.projects.save(&project).await?;
        tracing::debug!(
            project_id = %project.id(),
            sections = project.sections().len(),
            "Project created"
        );

        Ok(ProjectResult { project })
    }

    pub async fn update_title(
        &self,
        input: UpdateProjectTitleInput,
    ) -> Result<ProjectResult, DomainError> {
        let id = EntityId::parse(&input.id)?;
        let mut project = self.load(&id).await?;

        project.update_title(&input.title)?;
        self.projects.save(&project).await?;
        tracing::debug!(project_id = %id, "Project title updated");

        Ok(ProjectResult { project })
    }

    /// Move a project into a folder, or out of its folder
    pub async fn move_to_folder(
        &self,
        input: MoveProjectInput,
    ) -> Result<ProjectResult, DomainError> {
        let id = EntityId::parse(&input.id)?;
        let folder_id = EntityId::parse_optional(input.folder_id.as_deref())?;
        let mut project = self.load(&id).await?;

        project.move_to_folder(folder_id);
        self.projects.save(&project).await?;
        tracing::debug!(project_id = %id, "Project moved");

        Ok(ProjectResult { project })
    }

    /// Set or clear the genre reference. Existing sections are left alone.
    pub async fn set_genre(
        &self,
        input: SetProjectGenreInput,
    ) -> Result<ProjectResult, DomainError> {
        let id = EntityId::parse(&input.id)?;
        let genre_id = EntityId::parse_optional(input.genre_id.as_deref())?;
        let mut project = self.load(&id).await?;

        project.set_genre(genre_id);
        self.projects.save(&project).await?;
        tracing::debug!(project_id = %id, has_genre = project.genre_id().is_some(), "Project genre updated");

        Ok(ProjectResult { project })
    }

    /// Delete a project; the repository cascades to sections and lines
    pub async fn delete(&self, input: DeleteProjectInput) -> Result<(), DomainError> {
        let id = EntityId::parse(&input.id)?;
        self.load(&id).await?;

        self.projects.delete(&id).await?;
        tracing::debug!(project_id = %id, "Project deleted");
        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<Project, DomainError> {
        let id = EntityId::parse(id)?;
        self.load(&id).await
    }

    pub async fn list(&self) -> Result<Vec<Project>, DomainError> {
        self.projects.find_all().await
    }

    /// Projects in a folder, or those outside any folder with `None`
    pub async fn list_by_folder(
        &self,
        folder_id: Option<&str>,
    ) -> Result<Vec<Project>, DomainError> {
        let folder_id = EntityId::parse_optional(folder_id)?;
        self.projects.find_by_folder(folder_id.as_ref()).await
    }

    async fn load(&self, id: &EntityId) -> Result<Project, DomainError> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Project, id))
    }
}
