//! Line service
//!
//! Lyric lines inside a section. Deleting a line does not check existence
//! first: deleting an already-missing line is treated as done.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Line;
use crate::domain::ports::{LineRepository, SectionRepository};
use crate::domain::value_objects::EntityId;
use crate::error::{DomainError, EntityKind};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLineInput {
    pub section_id: String,
    #[serde(default)]
    pub text: String,
    /// Defaults to the end of the section
    #[serde(default)]
    pub line_index: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLineTextInput {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLineAnalysisInput {
    pub id: String,
    #[serde(default)]
    pub mora_count: Option<u32>,
    #[serde(default)]
    pub rhyme_tail: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteLineInput {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReorderLinesInput {
    pub line_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineResult {
    pub line: Line,
}

/// Service for line use cases
pub struct LineService<LR, SR>
where
    LR: LineRepository,
    SR: SectionRepository,
{
    lines: Arc<LR>,
    sections: Arc<SR>,
}

impl<LR, SR> LineService<LR, SR>
where
    LR: LineRepository,
    SR: SectionRepository,
{
    pub fn new(lines: Arc<LR>, sections: Arc<SR>) -> Self {
        Self { lines, sections }
    }

    /// Add a line to an existing section
    ///
    /// Without an explicit `line_index` the line is appended, which costs one
    /// extra read of the section's lines.
    pub async fn create(&self, input: CreateLineInput) -> Result<LineResult, DomainError> {
        let section_id = EntityId::parse(&input.section_id)?;

        if self.sections.find_by_id(&section_id).await?.is_none() {
            return Err(DomainError::not_found(EntityKind::Section, &section_id));
        }

        let line_index = match input.line_index {
            Some(index) => index,
            None => self
                .lines
                .find_by_section(&section_id)
                .await?
                .iter()
                .map(|l| l.line_index() + 1)
                .max()
                .unwrap_or(0),
        };

        let line = Line::create(section_id, &input.text, line_index);
        self.lines.save(&line).await?;
        tracing::debug!(line_id = %line.id(), line_index, "Line created");

        Ok(LineResult { line })
    }

    pub async fn update_text(&self, input: UpdateLineTextInput) -> Result<LineResult, DomainError> {
        let id = EntityId::parse(&input.id)?;
        let mut line = self.load(&id).await?;

        line.update_text(&input.text);
        self.lines.save(&line).await?;
        tracing::debug!(line_id = %id, char_count = line.char_count(), "Line text updated");

        Ok(LineResult { line })
    }

    /// Store mora count and rhyme tail computed by external tooling
    pub async fn update_analysis(
        &self,
        input: UpdateLineAnalysisInput,
    ) -> Result<LineResult, DomainError> {
        let id = EntityId::parse(&input.id)?;
        let mut line = self.load(&id).await?;

        line.update_analysis(input.mora_count, input.rhyme_tail.as_deref());
        self.lines.save(&line).await?;
        tracing::debug!(line_id = %id, mora_count = ?line.mora_count(), "Line analysis updated");

        Ok(LineResult { line })
    }

    pub async fn delete(&self, input: DeleteLineInput) -> Result<(), DomainError> {
        let id = EntityId::parse(&input.id)?;
        self.lines.delete(&id).await?;
        tracing::debug!(line_id = %id, "Line deleted");
        Ok(())
    }

    pub async fn reorder(&self, input: ReorderLinesInput) -> Result<(), DomainError> {
        let ids = EntityId::parse_all(&input.line_ids)?;
        if ids.is_empty() {
            return Ok(());
        }

        self.lines.reorder(&ids).await?;
        tracing::debug!(count = ids.len(), "Lines reordered");
        Ok(())
    }

    pub async fn list_by_section(&self, section_id: &str) -> Result<Vec<Line>, DomainError> {
        let section_id = EntityId::parse(section_id)?;
        self.lines.find_by_section(&section_id).await
    }

    async fn load(&self, id: &EntityId) -> Result<Line, DomainError> {
        self.lines
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Line, id))
    }
}
