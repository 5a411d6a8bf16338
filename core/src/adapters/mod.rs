//! Adapters layer
//!
//! Implementations of port traits. The hosted backend lives outside this
//! crate; `rows` fixes the persisted shape it reads and writes, and `memory`
//! serves the same shape in-process.

pub mod memory;
pub mod rows;

pub use memory::{
    InMemoryFolderRepository, InMemoryGenreRepository, InMemoryLineRepository,
    InMemoryPhraseRepository, InMemoryProjectRepository, InMemorySectionRepository,
    InMemoryStore, InMemoryTagRepository,
};
