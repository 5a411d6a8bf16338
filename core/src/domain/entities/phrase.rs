//! Phrase domain entity
//!
//! Free-standing scratchpad entries: lyric fragments kept for later use.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::time::touch;
use crate::domain::value_objects::{EntityId, PhraseText};
use crate::error::ValidationError;

/// A saved phrase with an optional note
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phrase {
    id: EntityId,
    text: PhraseText,
    note: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Phrase {
    pub fn create(text: &str, note: Option<&str>) -> Result<Self, ValidationError> {
        let text = PhraseText::new(text)?;
        let now = Utc::now();
        Ok(Self {
            id: EntityId::generate(),
            text,
            note: normalize_note(note),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn reconstruct(
        id: EntityId,
        text: &str,
        note: Option<&str>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            text: PhraseText::new(text)?,
            note: normalize_note(note),
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn text(&self) -> &PhraseText {
        &self.text
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn update_text(&mut self, text: &str) -> Result<(), ValidationError> {
        self.text = PhraseText::new(text)?;
        self.updated_at = touch(self.updated_at);
        Ok(())
    }

    /// Replace the note; a blank note clears it
    pub fn update_note(&mut self, note: Option<&str>) {
        self.note = normalize_note(note);
        self.updated_at = touch(self.updated_at);
    }
}

fn normalize_note(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|note| !note.is_empty())
        .map(str::to_string)
}
