//! Value objects
//!
//! Immutable, self-validating wrappers around primitive field values.

pub mod entity_id;
pub mod genre_description;
pub mod tag_color;
pub mod text;

pub use entity_id::EntityId;
pub use genre_description::GenreDescription;
pub use tag_color::{TagColor, DEFAULT_TAG_COLOR};
pub use text::{FolderName, GenreName, PhraseText, ProjectTitle, SectionName, TagName};
