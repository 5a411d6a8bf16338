//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and repository ports: validate,
//! read at most once, write at most once.

pub mod folder_service;
pub mod genre_service;
pub mod line_service;
pub mod phrase_service;
pub mod project_service;
mod quota;
pub mod section_service;
pub mod tag_service;

pub use folder_service::{
    CreateFolderInput, DeleteFolderInput, FolderResult, FolderService, ReorderFoldersInput,
    UpdateFolderInput,
};
pub use genre_service::{
    CreateGenreInput, DeleteGenreInput, GenreResult, GenreService, UpdateGenreInput,
};
pub use line_service::{
    CreateLineInput, DeleteLineInput, LineResult, LineService, ReorderLinesInput,
    UpdateLineAnalysisInput, UpdateLineTextInput,
};
pub use phrase_service::{
    CreatePhraseInput, DeletePhraseInput, PhraseResult, PhraseService, UpdatePhraseNoteInput,
    UpdatePhraseTextInput,
};
pub use project_service::{
    CreateProjectInput, DeleteProjectInput, MoveProjectInput, ProjectResult, ProjectService,
    SetProjectGenreInput, UpdateProjectTitleInput,
};
pub use section_service::{
    CreateSectionInput, DeleteSectionInput, RenameSectionInput, ReorderSectionsInput,
    SectionResult, SectionService,
};
pub use tag_service::{CreateTagInput, DeleteTagInput, TagResult, TagService};
