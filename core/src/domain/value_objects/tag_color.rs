//! Optional display color of a tag

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Field, ValidationError};

/// Color used when a tag has none of its own
pub const DEFAULT_TAG_COLOR: &str = "#6B7280";

static HEX_TRIPLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid regex"));

/// `#RRGGBB` color, or no color at all
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TagColor(Option<String>);

impl TagColor {
    pub fn absent() -> Self {
        Self(None)
    }

    pub fn new(raw: Option<&str>) -> Result<Self, ValidationError> {
        let Some(raw) = raw else {
            return Ok(Self::absent());
        };
        let trimmed = raw.trim();
        if !HEX_TRIPLET.is_match(trimmed) {
            return Err(ValidationError::InvalidFormat {
                field: Field::TagColor,
            });
        }
        Ok(Self(Some(trimmed.to_string())))
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// The color to render, falling back to `DEFAULT_TAG_COLOR`
    pub fn resolved(&self) -> &str {
        self.0.as_deref().unwrap_or(DEFAULT_TAG_COLOR)
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resolved())
    }
}
