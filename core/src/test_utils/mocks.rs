//! Mock implementations of repository ports
//!
//! In-memory repositories that record every call by method name, so tests can
//! assert not only on results but on which I/O happened (e.g. "save was never
//! called"). A mock can be switched to fail on every call or on one method.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::entities::{Folder, Genre, Line, Phrase, Project, Section, Tag};
use crate::domain::ports::{
    FolderRepository, GenreRepository, LineRepository, PhraseRepository, ProjectRepository,
    SectionRepository, TagRepository,
};
use crate::domain::value_objects::{EntityId, TagName};
use crate::error::DomainError;

/// Entities the mocks can store
pub trait Identified: Clone + Send + Sync {
    fn entity_id(&self) -> &EntityId;
}

macro_rules! identified {
    ($($ty:ty),+) => {
        $(impl Identified for $ty {
            fn entity_id(&self) -> &EntityId {
                self.id()
            }
        })+
    };
}

identified!(Folder, Project, Section, Line, Phrase, Tag, Genre);

/// Failure mode of a mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    Never,
    Always,
    On(&'static str),
}

/// In-memory repository that records calls
pub struct MockRepository<T> {
    items: RwLock<HashMap<EntityId, T>>,
    calls: RwLock<Vec<&'static str>>,
    reorders: RwLock<Vec<Vec<EntityId>>>,
    failure: Failure,
}

pub type MockFolderRepository = MockRepository<Folder>;
pub type MockProjectRepository = MockRepository<Project>;
pub type MockSectionRepository = MockRepository<Section>;
pub type MockLineRepository = MockRepository<Line>;
pub type MockPhraseRepository = MockRepository<Phrase>;
pub type MockTagRepository = MockRepository<Tag>;
pub type MockGenreRepository = MockRepository<Genre>;

impl<T: Identified> Default for MockRepository<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
            calls: RwLock::new(Vec::new()),
            reorders: RwLock::new(Vec::new()),
            failure: Failure::Never,
        }
    }
}

impl<T: Identified> MockRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a repository error
    pub fn failing() -> Self {
        Self {
            failure: Failure::Always,
            ..Self::default()
        }
    }

    /// Only calls to `method` fail
    pub fn failing_on(method: &'static str) -> Self {
        Self {
            failure: Failure::On(method),
            ..Self::default()
        }
    }

    /// Pre-populate with an entity for testing
    pub fn with(self, item: T) -> Self {
        self.items
            .write()
            .unwrap()
            .insert(item.entity_id().clone(), item);
        self
    }

    /// Number of calls made to `method`
    pub fn calls(&self, method: &str) -> usize {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|m| **m == method)
            .count()
    }

    /// Total number of calls made to any method
    pub fn total_calls(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// The id lists passed to `reorder`, in call order
    pub fn reorders(&self) -> Vec<Vec<EntityId>> {
        self.reorders.read().unwrap().clone()
    }

    pub fn stored(&self, id: &EntityId) -> Option<T> {
        self.items.read().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap().len()
    }

    fn record(&self, method: &'static str) -> Result<(), DomainError> {
        self.calls.write().unwrap().push(method);
        match self.failure {
            Failure::Always => Err(DomainError::Repository(format!("mock failure in {}", method))),
            Failure::On(m) if m == method => {
                Err(DomainError::Repository(format!("mock failure in {}", method)))
            }
            _ => Ok(()),
        }
    }

    fn put(&self, method: &'static str, item: &T) -> Result<(), DomainError> {
        self.record(method)?;
        self.items
            .write()
            .unwrap()
            .insert(item.entity_id().clone(), item.clone());
        Ok(())
    }

    fn get(&self, id: &EntityId) -> Result<Option<T>, DomainError> {
        self.record("find_by_id")?;
        Ok(self.stored(id))
    }

    fn all_where(
        &self,
        method: &'static str,
        keep: impl Fn(&T) -> bool,
    ) -> Result<Vec<T>, DomainError> {
        self.record(method)?;
        Ok(self
            .items
            .read()
            .unwrap()
            .values()
            .filter(|item| keep(item))
            .cloned()
            .collect())
    }

    fn remove(&self, id: &EntityId) -> Result<(), DomainError> {
        self.record("delete")?;
        self.items.write().unwrap().remove(id);
        Ok(())
    }

    fn count(&self) -> Result<u64, DomainError> {
        self.record("count_by_user")?;
        Ok(self.len() as u64)
    }

    fn record_reorder(&self, ids: &[EntityId]) -> Result<(), DomainError> {
        self.record("reorder")?;
        self.reorders.write().unwrap().push(ids.to_vec());
        Ok(())
    }
}

#[async_trait]
impl FolderRepository for MockRepository<Folder> {
    async fn save(&self, folder: &Folder) -> Result<(), DomainError> {
        self.put("save", folder)
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Folder>, DomainError> {
        self.get(id)
    }

    async fn find_all(&self) -> Result<Vec<Folder>, DomainError> {
        let mut folders = self.all_where("find_all", |_| true)?;
        folders.sort_by_key(Folder::order_index);
        Ok(folders)
    }

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError> {
        self.remove(id)
    }

    async fn count_by_user(&self) -> Result<u64, DomainError> {
        self.count()
    }

    async fn reorder(&self, ids: &[EntityId]) -> Result<(), DomainError> {
        self.record_reorder(ids)
    }
}

#[async_trait]
impl ProjectRepository for MockRepository<Project> {
    async fn save(&self, project: &Project) -> Result<(), DomainError> {
        self.put("save", project)
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Project>, DomainError> {
        self.get(id)
    }

    async fn find_all(&self) -> Result<Vec<Project>, DomainError> {
        self.all_where("find_all", |_| true)
    }

    async fn find_by_folder(
        &self,
        folder_id: Option<&EntityId>,
    ) -> Result<Vec<Project>, DomainError> {
        self.all_where("find_by_folder", |p| p.folder_id() == folder_id)
    }

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError> {
        self.remove(id)
    }

    async fn count_by_user(&self) -> Result<u64, DomainError> {
        self.count()
    }
}

#[async_trait]
impl SectionRepository for MockRepository<Section> {
    async fn save(&self, section: &Section) -> Result<(), DomainError> {
        self.put("save", section)
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Section>, DomainError> {
        self.get(id)
    }

    async fn find_by_project(&self, project_id: &EntityId) -> Result<Vec<Section>, DomainError> {
        let mut sections = self.all_where("find_by_project", |s| s.project_id() == project_id)?;
        sections.sort_by_key(Section::order_index);
        Ok(sections)
    }

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError> {
        self.remove(id)
    }

    async fn count_by_user(&self) -> Result<u64, DomainError> {
        self.count()
    }

    async fn reorder(&self, ids: &[EntityId]) -> Result<(), DomainError> {
        self.record_reorder(ids)
    }
}

#[async_trait]
impl LineRepository for MockRepository<Line> {
    async fn save(&self, line: &Line) -> Result<(), DomainError> {
        self.put("save", line)
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Line>, DomainError> {
        self.get(id)
    }

    async fn find_by_section(&self, section_id: &EntityId) -> Result<Vec<Line>, DomainError> {
        let mut lines = self.all_where("find_by_section", |l| l.section_id() == section_id)?;
        lines.sort_by_key(Line::line_index);
        Ok(lines)
    }

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError> {
        self.remove(id)
    }

    async fn count_by_user(&self) -> Result<u64, DomainError> {
        self.count()
    }

    async fn reorder(&self, ids: &[EntityId]) -> Result<(), DomainError> {
        self.record_reorder(ids)
    }
}

#[async_trait]
impl PhraseRepository for MockRepository<Phrase> {
    async fn save(&self, phrase: &Phrase) -> Result<(), DomainError> {
        self.put("save", phrase)
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Phrase>, DomainError> {
        self.get(id)
    }

    async fn find_all(&self) -> Result<Vec<Phrase>, DomainError> {
        self.all_where("find_all", |_| true)
    }

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError> {
        self.remove(id)
    }

    async fn count_by_user(&self) -> Result<u64, DomainError> {
        self.count()
    }
}

#[async_trait]
impl TagRepository for MockRepository<Tag> {
    async fn save(&self, tag: &Tag) -> Result<(), DomainError> {
        self.put("save", tag)
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Tag>, DomainError> {
        self.get(id)
    }

    async fn find_all(&self) -> Result<Vec<Tag>, DomainError> {
        self.all_where("find_all", |_| true)
    }

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError> {
        self.remove(id)
    }

    async fn count_by_user(&self) -> Result<u64, DomainError> {
        self.count()
    }

    async fn exists_by_name(&self, name: &TagName) -> Result<bool, DomainError> {
        let matches = self.all_where("exists_by_name", |t| t.name() == name)?;
        Ok(!matches.is_empty())
    }
}

#[async_trait]
impl GenreRepository for MockRepository<Genre> {
    async fn save(&self, genre: &Genre) -> Result<(), DomainError> {
        self.put("save", genre)
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Genre>, DomainError> {
        self.get(id)
    }

    async fn find_all(&self) -> Result<Vec<Genre>, DomainError> {
        self.all_where("find_all", |_| true)
    }

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError> {
        self.remove(id)
    }

    async fn count_by_user(&self) -> Result<u64, DomainError> {
        self.count()
    }
}
