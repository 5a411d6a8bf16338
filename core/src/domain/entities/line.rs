//! Line domain entity

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::time::touch;
use crate::domain::value_objects::EntityId;

/// One lyric line within a section
///
/// Text is stored verbatim and may be empty; blank lines are part of a lyric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    id: EntityId,
    section_id: EntityId,
    text: String,
    line_index: i32,
    mora_count: Option<u32>,
    rhyme_tail: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Line {
    pub fn create(section_id: EntityId, text: &str, line_index: i32) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::generate(),
            section_id,
            text: text.to_string(),
            line_index,
            mora_count: None,
            rhyme_tail: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstruct(
        id: EntityId,
        section_id: EntityId,
        text: &str,
        line_index: i32,
        mora_count: Option<u32>,
        rhyme_tail: Option<&str>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            section_id,
            text: text.to_string(),
            line_index,
            mora_count,
            rhyme_tail: normalize_rhyme_tail(rhyme_tail),
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn section_id(&self) -> &EntityId {
        &self.section_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_index(&self) -> i32 {
        self.line_index
    }

    pub fn mora_count(&self) -> Option<u32> {
        self.mora_count
    }

    pub fn rhyme_tail(&self) -> Option<&str> {
        self.rhyme_tail.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Number of characters, not counting whitespace
    pub fn char_count(&self) -> usize {
        self.text.chars().filter(|c| !c.is_whitespace()).count()
    }

    /// True for blank lines (empty or whitespace only)
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn update_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.updated_at = touch(self.updated_at);
    }

    /// Store analysis results produced by external tooling
    pub fn update_analysis(&mut self, mora_count: Option<u32>, rhyme_tail: Option<&str>) {
        self.mora_count = mora_count;
        self.rhyme_tail = normalize_rhyme_tail(rhyme_tail);
        self.updated_at = touch(self.updated_at);
    }

    pub fn reorder(&mut self, line_index: i32) {
        self.line_index = line_index;
        self.updated_at = touch(self.updated_at);
    }
}

fn normalize_rhyme_tail(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|tail| !tail.is_empty())
        .map(str::to_string)
}
