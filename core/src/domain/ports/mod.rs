//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;

pub use repositories::{
    FolderRepository, GenreRepository, LineRepository, PhraseRepository, ProjectRepository,
    SectionRepository, TagRepository,
};
