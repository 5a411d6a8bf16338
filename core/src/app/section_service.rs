//! Section service

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Project, Section};
use crate::domain::ports::{ProjectRepository, SectionRepository};
use crate::domain::value_objects::{EntityId, SectionName};
use crate::error::{DomainError, EntityKind};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSectionInput {
    pub project_id: String,
    pub name: String,
    /// Defaults to the end of the project
    #[serde(default)]
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenameSectionInput {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteSectionInput {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReorderSectionsInput {
    pub section_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionResult {
    pub section: Section,
}

/// Service for section use cases
pub struct SectionService<SR, PR>
where
    SR: SectionRepository,
    PR: ProjectRepository,
{
    sections: Arc<SR>,
    projects: Arc<PR>,
}

impl<SR, PR> SectionService<SR, PR>
where
    SR: SectionRepository,
    PR: ProjectRepository,
{
    pub fn new(sections: Arc<SR>, projects: Arc<PR>) -> Self {
        Self { sections, projects }
    }

    /// Add a section to an existing project
    pub async fn create(&self, input: CreateSectionInput) -> Result<SectionResult, DomainError> {
        let name = SectionName::new(&input.name)?;
        let project_id = EntityId::parse(&input.project_id)?;

        let project = self.load_project(&project_id).await?;
        let order_index = input
            .order_index
            .unwrap_or_else(|| next_order_index(&project));

        let section = Section::with_name(project_id, name, order_index);
        self.sections.save(&section).await?;
        tracing::debug!(
            section_id = %section.id(),
            project_id = %section.project_id(),
            order_index,
            "Section created"
        );

        Ok(SectionResult { section })
    }

    pub async fn rename(&self, input: RenameSectionInput) -> Result<SectionResult, DomainError> {
        let id = EntityId::parse(&input.id)?;
        let mut section = self.load(&id).await?;

        section.update_name(&input.name)?;
        self.sections.save(&section).await?;
        tracing::debug!(section_id = %id, "Section renamed");

        Ok(SectionResult { section })
    }

    /// Delete a section and, through the repository, its lines
    pub async fn delete(&self, input: DeleteSectionInput) -> Result<(), DomainError> {
        let id = EntityId::parse(&input.id)?;
        self.load(&id).await?;

        self.sections.delete(&id).await?;
        tracing::debug!(section_id = %id, "Section deleted");
        Ok(())
    }

    /// Re-sequence sections; one malformed id aborts the whole call
    pub async fn reorder(&self, input: ReorderSectionsInput) -> Result<(), DomainError> {
        let ids = EntityId::parse_all(&input.section_ids)?;
        if ids.is_empty() {
            return Ok(());
        }

        self.sections.reorder(&ids).await?;
        tracing::debug!(count = ids.len(), "Sections reordered");
        Ok(())
    }

    pub async fn list_by_project(&self, project_id: &str) -> Result<Vec<Section>, DomainError> {
        let project_id = EntityId::parse(project_id)?;
        self.sections.find_by_project(&project_id).await
    }

    async fn load(&self, id: &EntityId) -> Result<Section, DomainError> {
        self.sections
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Section, id))
    }

    async fn load_project(&self, id: &EntityId) -> Result<Project, DomainError> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Project, id))
    }
}

fn next_order_index(project: &Project) -> i32 {
    project
        .sections()
        .iter()
        .map(|s| s.order_index() + 1)
        .max()
        .unwrap_or(0)
}
