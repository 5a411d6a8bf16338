//! In-process composition
//!
//! Wires every service over one `InMemoryStore`, with quotas and locale taken
//! from `Config`. Used for offline mode and for end-to-end tests.

use std::sync::Arc;

use crate::adapters::{
    InMemoryFolderRepository, InMemoryGenreRepository, InMemoryLineRepository,
    InMemoryPhraseRepository, InMemoryProjectRepository, InMemorySectionRepository,
    InMemoryStore, InMemoryTagRepository,
};
use crate::app::{
    FolderService, GenreService, LineService, PhraseService, ProjectService, SectionService,
    TagService,
};
use crate::config::{Config, ConfigError};
use crate::error::DomainError;
use crate::presentation::{user_message, Locale};
use crate::telemetry;

/// Application state shared across callers
#[derive(Clone)]
pub struct LocalApp {
    pub folders: Arc<FolderService<InMemoryFolderRepository>>,
    pub projects: Arc<ProjectService<InMemoryProjectRepository, InMemoryGenreRepository>>,
    pub sections: Arc<SectionService<InMemorySectionRepository, InMemoryProjectRepository>>,
    pub lines: Arc<LineService<InMemoryLineRepository, InMemorySectionRepository>>,
    pub phrases: Arc<PhraseService<InMemoryPhraseRepository>>,
    pub tags: Arc<TagService<InMemoryTagRepository>>,
    pub genres: Arc<GenreService<InMemoryGenreRepository>>,
    pub locale: Locale,
    store: InMemoryStore,
}

impl LocalApp {
    pub fn new(config: &Config) -> Self {
        Self::with_store(InMemoryStore::new(), config)
    }

    pub fn with_store(store: InMemoryStore, config: &Config) -> Self {
        let quotas = config.quotas;
        let folder_repo = Arc::new(store.folders());
        let project_repo = Arc::new(store.projects());
        let section_repo = Arc::new(store.sections());
        let genre_repo = Arc::new(store.genres());

        Self {
            folders: Arc::new(FolderService::new(folder_repo).with_quota(quotas.folders)),
            projects: Arc::new(
                ProjectService::new(project_repo.clone(), genre_repo.clone())
                    .with_quota(quotas.projects),
            ),
            sections: Arc::new(SectionService::new(section_repo.clone(), project_repo)),
            lines: Arc::new(LineService::new(Arc::new(store.lines()), section_repo)),
            phrases: Arc::new(
                PhraseService::new(Arc::new(store.phrases())).with_quota(quotas.phrases),
            ),
            tags: Arc::new(TagService::new(Arc::new(store.tags())).with_quota(quotas.tags)),
            genres: Arc::new(GenreService::new(genre_repo).with_quota(quotas.genres)),
            locale: config.locale,
            store,
        }
    }

    /// Load config from the environment, install tracing and wire the services
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Config::from_env()?;
        telemetry::init_tracing(&config.log_filter);
        tracing::info!(locale = ?config.locale, "Starting lyricdraft in local mode");
        Ok(Self::new(&config))
    }

    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }

    /// User-facing text for an error, in the configured locale
    pub fn message(&self, err: &DomainError) -> String {
        user_message(err, self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{
        CreateFolderInput, CreateGenreInput, CreateLineInput, CreateProjectInput,
        CreateSectionInput, CreateTagInput, DeleteFolderInput, DeleteProjectInput,
        MoveProjectInput, ReorderSectionsInput,
    };
    use crate::config::Quotas;
    use crate::domain::ports::LineRepository;
    use crate::error::ErrorKind;

    fn app() -> LocalApp {
        LocalApp::new(&Config::default())
    }

    #[tokio::test]
    async fn project_from_genre_template_then_cascade_delete() {
        let app = app();

        let genre = app
            .genres
            .create(CreateGenreInput {
                name: "J-POP".to_string(),
                description: Some("王道".to_string()),
                section_names: vec!["Aメロ".into(), "Bメロ".into(), "サビ".into()],
            })
            .await
            .unwrap()
            .genre;

        let project = app
            .projects
            .create(CreateProjectInput {
                title: "夏の終わりに".to_string(),
                folder_id: None,
                genre_id: Some(genre.id().to_string()),
            })
            .await
            .unwrap()
            .project;

        let sections = app
            .sections
            .list_by_project(project.id().as_str())
            .await
            .unwrap();
        let names: Vec<&str> = sections.iter().map(|s| s.name().as_str()).collect();
        assert_eq!(names, vec!["Aメロ", "Bメロ", "サビ"]);

        let chorus = sections[2].id().to_string();
        app.lines
            .create(CreateLineInput {
                section_id: chorus.clone(),
                text: "君の声が".to_string(),
                line_index: None,
            })
            .await
            .unwrap();
        assert_eq!(app.lines.list_by_section(&chorus).await.unwrap().len(), 1);

        app.projects
            .delete(DeleteProjectInput {
                id: project.id().to_string(),
            })
            .await
            .unwrap();

        assert!(app
            .sections
            .list_by_project(project.id().as_str())
            .await
            .unwrap()
            .is_empty());
        assert_eq!(app.store().lines().count_by_user().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn new_section_goes_last_and_reorder_sticks() {
        let app = app();
        let project = app
            .projects
            .create(CreateProjectInput {
                title: "Song".to_string(),
                folder_id: None,
                genre_id: None,
            })
            .await
            .unwrap()
            .project;

        let mut ids = Vec::new();
        for name in ["Verse", "Chorus", "Bridge"] {
            let section = app
                .sections
                .create(CreateSectionInput {
                    project_id: project.id().to_string(),
                    name: name.to_string(),
                    order_index: None,
                })
                .await
                .unwrap()
                .section;
            ids.push(section.id().to_string());
        }

        ids.reverse();
        app.sections
            .reorder(ReorderSectionsInput { section_ids: ids })
            .await
            .unwrap();

        let loaded = app.projects.get(project.id().as_str()).await.unwrap();
        assert_eq!(loaded.section_names(), vec!["Bridge", "Chorus", "Verse"]);
    }

    #[tokio::test]
    async fn deleting_a_folder_keeps_its_projects() {
        let app = app();
        let folder = app
            .folders
            .create(CreateFolderInput {
                name: "マイフォルダ".to_string(),
                order_index: None,
            })
            .await
            .unwrap()
            .folder;
        let project = app
            .projects
            .create(CreateProjectInput {
                title: "Song".to_string(),
                folder_id: None,
                genre_id: None,
            })
            .await
            .unwrap()
            .project;
        app.projects
            .move_to_folder(MoveProjectInput {
                id: project.id().to_string(),
                folder_id: Some(folder.id().to_string()),
            })
            .await
            .unwrap();

        app.folders
            .delete(DeleteFolderInput {
                id: folder.id().to_string(),
            })
            .await
            .unwrap();

        let unfiled = app.projects.list_by_folder(None).await.unwrap();
        assert_eq!(unfiled.len(), 1);
        assert_eq!(unfiled[0].id(), project.id());
    }

    #[tokio::test]
    async fn configured_quota_and_locale_apply() {
        let config = Config {
            locale: Locale::En,
            quotas: Quotas {
                tags: Some(1),
                ..Quotas::default()
            },
            ..Config::default()
        };
        let app = LocalApp::new(&config);

        app.tags
            .create(CreateTagInput {
                name: "rock".to_string(),
                color: None,
            })
            .await
            .unwrap();

        let duplicate = app
            .tags
            .create(CreateTagInput {
                name: "rock".to_string(),
                color: None,
            })
            .await
            .unwrap_err();
        assert_eq!(duplicate.kind(), ErrorKind::AlreadyExists);

        let over = app
            .tags
            .create(CreateTagInput {
                name: "pop".to_string(),
                color: None,
            })
            .await
            .unwrap_err();
        assert_eq!(over.kind(), ErrorKind::QuotaExceeded);
        assert_eq!(app.message(&over), "You can create up to 1 tag items.");
    }
}
