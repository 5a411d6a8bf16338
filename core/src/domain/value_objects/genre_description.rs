//! Optional free-text description of a genre

use std::fmt;

use serde::Serialize;

use super::text::normalize_required;
use crate::error::{Field, ValidationError};

/// Genre description. Absence is a legal state of its own; a present
/// description follows the required-text rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GenreDescription(Option<String>);

impl GenreDescription {
    pub const MAX_LEN: usize = 200;

    pub fn absent() -> Self {
        Self(None)
    }

    pub fn new(raw: Option<&str>) -> Result<Self, ValidationError> {
        match raw {
            None => Ok(Self::absent()),
            Some(raw) => {
                normalize_required(Field::GenreDescription, Some(raw), Self::MAX_LEN)
                    .map(|text| Self(Some(text)))
            }
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }
}

impl fmt::Display for GenreDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_deref().unwrap_or_default())
    }
}
