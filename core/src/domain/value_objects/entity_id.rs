//! Opaque entity identifier
//!
//! Ids travel through the UI as plain strings. Anything coming from outside
//! goes through `EntityId::parse` before it reaches a repository, so malformed
//! ids never hit persistence.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

use crate::error::ValidationError;

/// Length of the canonical hyphenated UUID form
const HYPHENATED_LEN: usize = 36;

/// Unique identifier shared by every entity kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Validate a caller-supplied id
    ///
    /// Only the hyphenated UUID form is accepted; the string is kept as given,
    /// so equality stays string equality.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.len() != HYPHENATED_LEN || Uuid::try_parse(raw).is_err() {
            return Err(ValidationError::InvalidId {
                raw: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    /// Validate a list of ids, failing on the first malformed one
    pub fn parse_all<S: AsRef<str>>(raws: &[S]) -> Result<Vec<Self>, ValidationError> {
        raws.iter().map(|raw| Self::parse(raw.as_ref())).collect()
    }

    /// Validate an optional id; `None` stays `None`
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, ValidationError> {
        raw.map(Self::parse).transpose()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EntityId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for EntityId {
    type Error = ValidationError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_round_trips() {
        let id = EntityId::generate();
        let parsed = EntityId::parse(id.as_str()).unwrap();
        assert_eq!(parsed, id);
        assert_eq!(parsed.to_string(), id.to_string());
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in [
            "invalid-id",
            "",
            "123",
            "6f9619ff8b86d011b42d00c04fc964ff",
            "{6f9619ff-8b86-d011-b42d-00c04fc964ff}",
            "6f9619ff-8b86-d011-b42d-00c04fc964fg",
        ] {
            assert_eq!(
                EntityId::parse(raw).unwrap_err(),
                ValidationError::InvalidId {
                    raw: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn parse_all_fails_on_first_bad_id() {
        let good = EntityId::generate();
        let err = EntityId::parse_all(&[good.to_string(), "nope".to_string()]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidId {
                raw: "nope".to_string()
            }
        );
    }

    #[test]
    fn parse_optional_keeps_none() {
        assert_eq!(EntityId::parse_optional(None).unwrap(), None);
        assert!(EntityId::parse_optional(Some("bad")).is_err());
    }

    #[test]
    fn from_str_uses_same_validation() {
        let id: EntityId = "00000000-0000-0000-0000-000000000000".parse().unwrap();
        assert_eq!(id.as_str(), "00000000-0000-0000-0000-000000000000");
    }
}
