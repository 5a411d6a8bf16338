//! Genre domain entity
//!
//! A genre doubles as a template: its section names pre-populate the sections
//! of a project created with that genre.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::time::touch;
use crate::domain::value_objects::{EntityId, GenreDescription, GenreName, SectionName};
use crate::error::ValidationError;

/// A genre with its section-name template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Genre {
    id: EntityId,
    name: GenreName,
    description: GenreDescription,
    section_names: Vec<SectionName>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Genre {
    pub fn create<S: AsRef<str>>(
        name: &str,
        description: Option<&str>,
        section_names: &[S],
    ) -> Result<Self, ValidationError> {
        let name = GenreName::new(name)?;
        let description = GenreDescription::new(description)?;
        let section_names = parse_section_names(section_names)?;
        let now = Utc::now();
        Ok(Self {
            id: EntityId::generate(),
            name,
            description,
            section_names,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn reconstruct<S: AsRef<str>>(
        id: EntityId,
        name: &str,
        description: Option<&str>,
        section_names: &[S],
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: GenreName::new(name)?,
            description: GenreDescription::new(description)?,
            section_names: parse_section_names(section_names)?,
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &GenreName {
        &self.name
    }

    pub fn description(&self) -> &GenreDescription {
        &self.description
    }

    /// Template section names, in the order new projects receive them
    pub fn section_names(&self) -> &[SectionName] {
        &self.section_names
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn update_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = GenreName::new(name)?;
        self.updated_at = touch(self.updated_at);
        Ok(())
    }

    pub fn update_description(&mut self, description: Option<&str>) -> Result<(), ValidationError> {
        self.description = GenreDescription::new(description)?;
        self.updated_at = touch(self.updated_at);
        Ok(())
    }

    pub fn replace_section_names<S: AsRef<str>>(
        &mut self,
        section_names: &[S],
    ) -> Result<(), ValidationError> {
        self.section_names = parse_section_names(section_names)?;
        self.updated_at = touch(self.updated_at);
        Ok(())
    }
}

fn parse_section_names<S: AsRef<str>>(raw: &[S]) -> Result<Vec<SectionName>, ValidationError> {
    raw.iter().map(|name| SectionName::new(name.as_ref())).collect()
}
