//! Required free-text value objects
//!
//! Every type here follows the same contract: the input is trimmed, must not
//! be empty afterwards, and must fit in `MAX_LEN` characters (inclusive,
//! measured after trimming).

use crate::error::{Field, ValidationError};

/// Trim `raw` and check it against the required-text rules for `field`
pub(crate) fn normalize_required(
    field: Field,
    raw: Option<&str>,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_string())
}

macro_rules! define_required_text {
    (
        $(#[$meta:meta])*
        $name:ident { field: $field:expr, max: $max:expr }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub const MAX_LEN: usize = $max;

            pub fn new(raw: &str) -> Result<Self, ValidationError> {
                normalize_required($field, Some(raw), Self::MAX_LEN).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl TryFrom<Option<&str>> for $name {
            type Error = ValidationError;

            fn try_from(raw: Option<&str>) -> Result<Self, Self::Error> {
                normalize_required($field, raw, Self::MAX_LEN).map(Self)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ValidationError;

            fn try_from(raw: &str) -> Result<Self, Self::Error> {
                Self::new(raw)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

define_required_text! {
    /// Display name of a folder
    FolderName { field: Field::FolderName, max: 100 }
}

define_required_text! {
    /// Title of a song draft
    ProjectTitle { field: Field::ProjectTitle, max: 200 }
}

define_required_text! {
    /// Name of a section within a project ("Verse", "Chorus", ...)
    SectionName { field: Field::SectionName, max: 50 }
}

define_required_text! {
    /// Scratchpad phrase. Internal newlines are kept as-is.
    PhraseText { field: Field::PhraseText, max: 500 }
}

define_required_text! {
    GenreName { field: Field::GenreName, max: 50 }
}

define_required_text! {
    TagName { field: Field::TagName, max: 30 }
}
