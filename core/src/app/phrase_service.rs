//! Phrase service
//!
//! The phrase scratchpad: save, edit and discard lyric fragments.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::quota;
use crate::domain::entities::Phrase;
use crate::domain::ports::PhraseRepository;
use crate::domain::value_objects::EntityId;
use crate::error::{DomainError, EntityKind};

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePhraseInput {
    pub text: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePhraseTextInput {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePhraseNoteInput {
    pub id: String,
    /// `None` or a blank note clears it
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeletePhraseInput {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhraseResult {
    pub phrase: Phrase,
}

/// Service for phrase use cases
pub struct PhraseService<PhR>
where
    PhR: PhraseRepository,
{
    phrases: Arc<PhR>,
    quota: Option<u64>,
}

impl<PhR> PhraseService<PhR>
where
    PhR: PhraseRepository,
{
    pub fn new(phrases: Arc<PhR>) -> Self {
        Self {
            phrases,
            quota: None,
        }
    }

    pub fn with_quota(mut self, quota: Option<u64>) -> Self {
        self.quota = quota;
        self
    }

    pub async fn create(&self, input: CreatePhraseInput) -> Result<PhraseResult, DomainError> {
        let phrase = Phrase::create(&input.text, input.note.as_deref())?;

        if let Some(limit) = self.quota {
            let count = self.phrases.count_by_user().await?;
            quota::ensure_below(EntityKind::Phrase, count, limit)?;
        }

        self.phrases.save(&phrase).await?;
        tracing::debug!(phrase_id = %phrase.id(), "Phrase created");

        Ok(PhraseResult { phrase })
    }

    pub async fn update_text(
        &self,
        input: UpdatePhraseTextInput,
    ) -> Result<PhraseResult, DomainError> {
        let id = EntityId::parse(&input.id)?;
        let mut phrase = self.load(&id).await?;

        phrase.update_text(&input.text)?;
        self.phrases.save(&phrase).await?;
        tracing::debug!(phrase_id = %id, "Phrase text updated");

        Ok(PhraseResult { phrase })
    }

    pub async fn update_note(
        &self,
        input: UpdatePhraseNoteInput,
    ) -> Result<PhraseResult, DomainError> {
        let id = EntityId::parse(&input.id)?;
        let mut phrase = self.load(&id).await?;

        phrase.update_note(input.note.as_deref());
        self.phrases.save(&phrase).await?;
        tracing::debug!(phrase_id = %id, has_note = phrase.note().is_some(), "Phrase note updated");

        Ok(PhraseResult { phrase })
    }

    pub async fn delete(&self, input: DeletePhraseInput) -> Result<(), DomainError> {
        let id = EntityId::parse(&input.id)?;
        self.load(&id).await?;

        self.phrases.delete(&id).await?;
        tracing::debug!(phrase_id = %id, "Phrase deleted");
        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<Phrase, DomainError> {
        let id = EntityId::parse(id)?;
        self.load(&id).await
    }

    pub async fn list(&self) -> Result<Vec<Phrase>, DomainError> {
        self.phrases.find_all().await
    }

    async fn load(&self, id: &EntityId) -> Result<Phrase, DomainError> {
        self.phrases
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Phrase, id))
    }
}
