//! Domain entities
//!
//! Mutable aggregates built from value objects. Each entity owns its
//! lifecycle timestamps and exposes mutation only through validating methods.
//! Entities never talk to repositories.

pub mod folder;
pub mod genre;
pub mod line;
pub mod phrase;
pub mod project;
pub mod section;
pub mod tag;

pub use folder::Folder;
pub use genre::Genre;
pub use line::Line;
pub use phrase::Phrase;
pub use project::Project;
pub use section::Section;
pub use tag::Tag;
