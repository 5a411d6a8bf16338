//! In-memory adapters
//!
//! Repository implementations over a single set of row tables shared behind
//! one `tokio::sync::RwLock`. Each repository is a cheap handle onto the same
//! `InMemoryStore`, the way the hosted adapters share one connection.
//!
//! Entities are stored as rows and rehydrated on every read, so reads go
//! through the same validation a real backend would.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::rows::{FolderRow, GenreRow, LineRow, PhraseRow, ProjectRow, SectionRow, TagRow};
use crate::domain::entities::{Folder, Genre, Line, Phrase, Project, Section, Tag};
use crate::domain::ports::{
    FolderRepository, GenreRepository, LineRepository, PhraseRepository, ProjectRepository,
    SectionRepository, TagRepository,
};
use crate::domain::time::normalize_timestamp;
use crate::domain::value_objects::{EntityId, TagName};
use crate::error::{DomainError, EntityKind};

#[derive(Debug, Default)]
struct Tables {
    folders: HashMap<String, FolderRow>,
    projects: HashMap<String, ProjectRow>,
    sections: HashMap<String, SectionRow>,
    lines: HashMap<String, LineRow>,
    phrases: HashMap<String, PhraseRow>,
    tags: HashMap<String, TagRow>,
    genres: HashMap<String, GenreRow>,
}

impl Tables {
    fn sections_of(&self, project_id: &str) -> Result<Vec<Section>, DomainError> {
        let mut sections = self
            .sections
            .values()
            .filter(|row| row.project_id == project_id)
            .cloned()
            .map(SectionRow::into_entity)
            .collect::<Result<Vec<_>, _>>()?;
        sections.sort_by_key(Section::order_index);
        Ok(sections)
    }

    fn project(&self, row: &ProjectRow) -> Result<Project, DomainError> {
        let sections = self.sections_of(&row.id)?;
        row.clone().into_entity(sections)
    }

    /// Remove lines belonging to any of `section_ids`, returning how many went
    fn drop_lines_of(&mut self, section_ids: &[String]) -> usize {
        let before = self.lines.len();
        self.lines
            .retain(|_, line| !section_ids.contains(&line.section_id));
        before - self.lines.len()
    }
}

/// Shared in-process storage
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folders(&self) -> InMemoryFolderRepository {
        InMemoryFolderRepository::new(self.clone())
    }

    pub fn projects(&self) -> InMemoryProjectRepository {
        InMemoryProjectRepository::new(self.clone())
    }

    pub fn sections(&self) -> InMemorySectionRepository {
        InMemorySectionRepository::new(self.clone())
    }

    pub fn lines(&self) -> InMemoryLineRepository {
        InMemoryLineRepository::new(self.clone())
    }

    pub fn phrases(&self) -> InMemoryPhraseRepository {
        InMemoryPhraseRepository::new(self.clone())
    }

    pub fn tags(&self) -> InMemoryTagRepository {
        InMemoryTagRepository::new(self.clone())
    }

    pub fn genres(&self) -> InMemoryGenreRepository {
        InMemoryGenreRepository::new(self.clone())
    }
}

/// Assign `ids[i]` position `i` in one pass
///
/// Every id must already exist and appear once; otherwise nothing is changed.
fn resequence<R>(
    table: &mut HashMap<String, R>,
    ids: &[EntityId],
    entity: EntityKind,
    place: impl Fn(&mut R, i32, i64),
) -> Result<(), DomainError> {
    if let Some(missing) = ids.iter().find(|id| !table.contains_key(id.as_str())) {
        return Err(DomainError::not_found(entity, missing));
    }

    let mut seen = HashSet::with_capacity(ids.len());
    if let Some(duplicate) = ids.iter().find(|id| !seen.insert(id.as_str())) {
        return Err(DomainError::Repository(format!(
            "duplicate id {} in {} reorder",
            duplicate, entity
        )));
    }

    let now = Utc::now().timestamp_millis();
    for (id, index) in ids.iter().zip(0..) {
        if let Some(row) = table.get_mut(id.as_str()) {
            place(row, index, now);
        }
    }
    Ok(())
}

/// Later of the stored timestamp and `now`, in milliseconds
fn bumped(updated_at: i64, now: i64) -> i64 {
    normalize_timestamp(updated_at).max(now)
}

/// In-memory implementation of FolderRepository
#[derive(Debug, Clone)]
pub struct InMemoryFolderRepository {
    store: InMemoryStore,
}

impl InMemoryFolderRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FolderRepository for InMemoryFolderRepository {
    async fn save(&self, folder: &Folder) -> Result<(), DomainError> {
        let row = FolderRow::from(folder);
        self.store
            .tables
            .write()
            .await
            .folders
            .insert(row.id.clone(), row);
        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Folder>, DomainError> {
        let tables = self.store.tables.read().await;
        tables
            .folders
            .get(id.as_str())
            .cloned()
            .map(FolderRow::into_entity)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Folder>, DomainError> {
        let tables = self.store.tables.read().await;
        let mut folders = tables
            .folders
            .values()
            .cloned()
            .map(FolderRow::into_entity)
            .collect::<Result<Vec<_>, _>>()?;
        folders.sort_by_key(|f| (f.order_index(), f.created_at()));
        Ok(folders)
    }

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError> {
        let mut tables = self.store.tables.write().await;
        tables.folders.remove(id.as_str());

        let mut released = 0;
        for project in tables.projects.values_mut() {
            if project.folder_id.as_deref() == Some(id.as_str()) {
                project.folder_id = None;
                released += 1;
            }
        }
        tracing::debug!(folder_id = %id, released, "Folder removed");
        Ok(())
    }

    async fn count_by_user(&self) -> Result<u64, DomainError> {
        Ok(self.store.tables.read().await.folders.len() as u64)
    }

    async fn reorder(&self, ids: &[EntityId]) -> Result<(), DomainError> {
        let mut tables = self.store.tables.write().await;
        resequence(&mut tables.folders, ids, EntityKind::Folder, |row, index, now| {
            row.order_index = index;
            row.updated_at = bumped(row.updated_at, now);
        })
    }
}

/// In-memory implementation of ProjectRepository
#[derive(Debug, Clone)]
pub struct InMemoryProjectRepository {
    store: InMemoryStore,
}

impl InMemoryProjectRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }

    async fn find_where(
        &self,
        keep: impl Fn(&ProjectRow) -> bool,
    ) -> Result<Vec<Project>, DomainError> {
        let tables = self.store.tables.read().await;
        let mut projects = tables
            .projects
            .values()
            .filter(|row| keep(row))
            .map(|row| tables.project(row))
            .collect::<Result<Vec<_>, _>>()?;
        projects.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));
        Ok(projects)
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn save(&self, project: &Project) -> Result<(), DomainError> {
        let mut tables = self.store.tables.write().await;
        let row = ProjectRow::from(project);

        // Sections are seeded on the first save only; afterwards the
        // section rows belong to SectionRepository.
        if !tables.projects.contains_key(&row.id) {
            for section in project.sections() {
                let section_row = SectionRow::from(section);
                tables.sections.insert(section_row.id.clone(), section_row);
            }
        }
        tables.projects.insert(row.id.clone(), row);
        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Project>, DomainError> {
        let tables = self.store.tables.read().await;
        tables
            .projects
            .get(id.as_str())
            .map(|row| tables.project(row))
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Project>, DomainError> {
        self.find_where(|_| true).await
    }

    async fn find_by_folder(
        &self,
        folder_id: Option<&EntityId>,
    ) -> Result<Vec<Project>, DomainError> {
        let folder_id = folder_id.map(EntityId::as_str);
        self.find_where(|row| row.folder_id.as_deref() == folder_id)
            .await
    }

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError> {
        let mut tables = self.store.tables.write().await;
        tables.projects.remove(id.as_str());

        let section_ids: Vec<String> = tables
            .sections
            .values()
            .filter(|row| row.project_id == id.as_str())
            .map(|row| row.id.clone())
            .collect();
        tables
            .sections
            .retain(|section_id, _| !section_ids.contains(section_id));
        let lines = tables.drop_lines_of(&section_ids);

        tracing::debug!(
            project_id = %id,
            sections = section_ids.len(),
            lines,
            "Project removed with its sections"
        );
        Ok(())
    }

    async fn count_by_user(&self) -> Result<u64, DomainError> {
        Ok(self.store.tables.read().await.projects.len() as u64)
    }
}

/// In-memory implementation of SectionRepository
#[derive(Debug, Clone)]
pub struct InMemorySectionRepository {
    store: InMemoryStore,
}

impl InMemorySectionRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SectionRepository for InMemorySectionRepository {
    async fn save(&self, section: &Section) -> Result<(), DomainError> {
        let row = SectionRow::from(section);
        self.store
            .tables
            .write()
            .await
            .sections
            .insert(row.id.clone(), row);
        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Section>, DomainError> {
        let tables = self.store.tables.read().await;
        tables
            .sections
            .get(id.as_str())
            .cloned()
            .map(SectionRow::into_entity)
            .transpose()
    }

    async fn find_by_project(&self, project_id: &EntityId) -> Result<Vec<Section>, DomainError> {
        self.store
            .tables
            .read()
            .await
            .sections_of(project_id.as_str())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError> {
        let mut tables = self.store.tables.write().await;
        tables.sections.remove(id.as_str());
        let lines = tables.drop_lines_of(&[id.to_string()]);
        tracing::debug!(section_id = %id, lines, "Section removed with its lines");
        Ok(())
    }

    async fn count_by_user(&self) -> Result<u64, DomainError> {
        Ok(self.store.tables.read().await.sections.len() as u64)
    }

    async fn reorder(&self, ids: &[EntityId]) -> Result<(), DomainError> {
        let mut tables = self.store.tables.write().await;
        resequence(&mut tables.sections, ids, EntityKind::Section, |row, index, now| {
            row.order_index = index;
            row.updated_at = bumped(row.updated_at, now);
        })
    }
}

/// In-memory implementation of LineRepository
#[derive(Debug, Clone)]
pub struct InMemoryLineRepository {
    store: InMemoryStore,
}

impl InMemoryLineRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LineRepository for InMemoryLineRepository {
    async fn save(&self, line: &Line) -> Result<(), DomainError> {
        let row = LineRow::from(line);
        self.store
            .tables
            .write()
            .await
            .lines
            .insert(row.id.clone(), row);
        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Line>, DomainError> {
        let tables = self.store.tables.read().await;
        tables
            .lines
            .get(id.as_str())
            .cloned()
            .map(LineRow::into_entity)
            .transpose()
    }

    async fn find_by_section(&self, section_id: &EntityId) -> Result<Vec<Line>, DomainError> {
        let tables = self.store.tables.read().await;
        let mut lines = tables
            .lines
            .values()
            .filter(|row| row.section_id == section_id.as_str())
            .cloned()
            .map(LineRow::into_entity)
            .collect::<Result<Vec<_>, _>>()?;
        lines.sort_by_key(Line::line_index);
        Ok(lines)
    }

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError> {
        self.store.tables.write().await.lines.remove(id.as_str());
        Ok(())
    }

    async fn count_by_user(&self) -> Result<u64, DomainError> {
        Ok(self.store.tables.read().await.lines.len() as u64)
    }

    async fn reorder(&self, ids: &[EntityId]) -> Result<(), DomainError> {
        let mut tables = self.store.tables.write().await;
        resequence(&mut tables.lines, ids, EntityKind::Line, |row, index, now| {
            row.line_index = index;
            row.updated_at = bumped(row.updated_at, now);
        })
    }
}

/// In-memory implementation of PhraseRepository
#[derive(Debug, Clone)]
pub struct InMemoryPhraseRepository {
    store: InMemoryStore,
}

impl InMemoryPhraseRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PhraseRepository for InMemoryPhraseRepository {
    async fn save(&self, phrase: &Phrase) -> Result<(), DomainError> {
        let row = PhraseRow::from(phrase);
        self.store
            .tables
            .write()
            .await
            .phrases
            .insert(row.id.clone(), row);
        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Phrase>, DomainError> {
        let tables = self.store.tables.read().await;
        tables
            .phrases
            .get(id.as_str())
            .cloned()
            .map(PhraseRow::into_entity)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Phrase>, DomainError> {
        let tables = self.store.tables.read().await;
        let mut phrases = tables
            .phrases
            .values()
            .cloned()
            .map(PhraseRow::into_entity)
            .collect::<Result<Vec<_>, _>>()?;
        phrases.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(phrases)
    }

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError> {
        self.store.tables.write().await.phrases.remove(id.as_str());
        Ok(())
    }

    async fn count_by_user(&self) -> Result<u64, DomainError> {
        Ok(self.store.tables.read().await.phrases.len() as u64)
    }
}

/// In-memory implementation of TagRepository
#[derive(Debug, Clone)]
pub struct InMemoryTagRepository {
    store: InMemoryStore,
}

impl InMemoryTagRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn save(&self, tag: &Tag) -> Result<(), DomainError> {
        let row = TagRow::from(tag);
        self.store
            .tables
            .write()
            .await
            .tags
            .insert(row.id.clone(), row);
        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Tag>, DomainError> {
        let tables = self.store.tables.read().await;
        tables
            .tags
            .get(id.as_str())
            .cloned()
            .map(TagRow::into_entity)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Tag>, DomainError> {
        let tables = self.store.tables.read().await;
        let mut tags = tables
            .tags
            .values()
            .cloned()
            .map(TagRow::into_entity)
            .collect::<Result<Vec<_>, _>>()?;
        tags.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        Ok(tags)
    }

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError> {
        self.store.tables.write().await.tags.remove(id.as_str());
        Ok(())
    }

    async fn count_by_user(&self) -> Result<u64, DomainError> {
        Ok(self.store.tables.read().await.tags.len() as u64)
    }

    async fn exists_by_name(&self, name: &TagName) -> Result<bool, DomainError> {
        let tables = self.store.tables.read().await;
        Ok(tables.tags.values().any(|row| row.name == name.as_str()))
    }
}

/// In-memory implementation of GenreRepository
#[derive(Debug, Clone)]
pub struct InMemoryGenreRepository {
    store: InMemoryStore,
}

impl InMemoryGenreRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GenreRepository for InMemoryGenreRepository {
    async fn save(&self, genre: &Genre) -> Result<(), DomainError> {
        let row = GenreRow::from(genre);
        self.store
            .tables
            .write()
            .await
            .genres
            .insert(row.id.clone(), row);
        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Genre>, DomainError> {
        let tables = self.store.tables.read().await;
        tables
            .genres
            .get(id.as_str())
            .cloned()
            .map(GenreRow::into_entity)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Genre>, DomainError> {
        let tables = self.store.tables.read().await;
        let mut genres = tables
            .genres
            .values()
            .cloned()
            .map(GenreRow::into_entity)
            .collect::<Result<Vec<_>, _>>()?;
        genres.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        Ok(genres)
    }

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError> {
        self.store.tables.write().await.genres.remove(id.as_str());
        Ok(())
    }

    async fn count_by_user(&self) -> Result<u64, DomainError> {
        Ok(self.store.tables.read().await.genres.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::SectionName;
    use crate::error::ErrorKind;

    fn names(names: &[&str]) -> Vec<SectionName> {
        names.iter().map(|n| SectionName::new(n).unwrap()).collect()
    }

    #[tokio::test]
    async fn project_save_stores_its_sections() {
        let store = InMemoryStore::new();
        let project = Project::create("Song", None, None, &names(&["Aメロ", "サビ"])).unwrap();

        store.projects().save(&project).await.unwrap();

        let loaded = store.projects().find_by_id(project.id()).await.unwrap().unwrap();
        assert_eq!(loaded.section_names(), vec!["Aメロ", "サビ"]);
        let sections = store.sections().find_by_project(project.id()).await.unwrap();
        assert_eq!(sections.len(), 2);
    }

    #[tokio::test]
    async fn project_delete_cascades_to_sections_and_lines() {
        let store = InMemoryStore::new();
        let project = Project::create("Song", None, None, &names(&["Verse"])).unwrap();
        let other = Project::create("Other", None, None, &names(&["Verse"])).unwrap();
        store.projects().save(&project).await.unwrap();
        store.projects().save(&other).await.unwrap();

        let section_id = project.sections()[0].id().clone();
        let other_section_id = other.sections()[0].id().clone();
        let line = Line::create(section_id.clone(), "消える行", 0);
        let kept = Line::create(other_section_id.clone(), "残る行", 0);
        store.lines().save(&line).await.unwrap();
        store.lines().save(&kept).await.unwrap();

        store.projects().delete(project.id()).await.unwrap();

        assert!(store.projects().find_by_id(project.id()).await.unwrap().is_none());
        assert!(store.sections().find_by_id(&section_id).await.unwrap().is_none());
        assert!(store.lines().find_by_id(line.id()).await.unwrap().is_none());
        assert!(store.lines().find_by_id(kept.id()).await.unwrap().is_some());
        assert_eq!(store.sections().count_by_user().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn section_delete_cascades_to_lines() {
        let store = InMemoryStore::new();
        let section = Section::create(EntityId::generate(), "Verse", 0).unwrap();
        store.sections().save(&section).await.unwrap();
        for (text, index) in [("一", 0), ("二", 1)] {
            let line = Line::create(section.id().clone(), text, index);
            store.lines().save(&line).await.unwrap();
        }

        store.sections().delete(section.id()).await.unwrap();

        assert!(store
            .lines()
            .find_by_section(section.id())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn folder_delete_releases_projects() {
        let store = InMemoryStore::new();
        let folder = Folder::create("Drafts", None).unwrap();
        let project = Project::create("Song", Some(folder.id().clone()), None, &[]).unwrap();
        store.folders().save(&folder).await.unwrap();
        store.projects().save(&project).await.unwrap();

        store.folders().delete(folder.id()).await.unwrap();

        let loaded = store.projects().find_by_id(project.id()).await.unwrap().unwrap();
        assert_eq!(loaded.folder_id(), None);
        assert_eq!(store.projects().find_by_folder(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn reorder_assigns_positions_in_list_order() {
        let store = InMemoryStore::new();
        let a = Folder::create("A", Some(0)).unwrap();
        let b = Folder::create("B", Some(1)).unwrap();
        let c = Folder::create("C", Some(2)).unwrap();
        for folder in [&a, &b, &c] {
            store.folders().save(folder).await.unwrap();
        }

        store
            .folders()
            .reorder(&[c.id().clone(), a.id().clone(), b.id().clone()])
            .await
            .unwrap();

        let listed = store.folders().find_all().await.unwrap();
        let order: Vec<&str> = listed.iter().map(|f| f.name().as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn reorder_with_unknown_id_changes_nothing() {
        let store = InMemoryStore::new();
        let section = Section::create(EntityId::generate(), "Verse", 3).unwrap();
        store.sections().save(&section).await.unwrap();

        let err = store
            .sections()
            .reorder(&[EntityId::generate(), section.id().clone()])
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        let loaded = store.sections().find_by_id(section.id()).await.unwrap().unwrap();
        assert_eq!(loaded.order_index(), 3);
    }

    #[tokio::test]
    async fn tag_names_are_matched_exactly() {
        let store = InMemoryStore::new();
        let tag = Tag::create("Rock", None).unwrap();
        store.tags().save(&tag).await.unwrap();

        let exact = TagName::new("Rock").unwrap();
        let other = TagName::new("rock").unwrap();
        assert!(store.tags().exists_by_name(&exact).await.unwrap());
        assert!(!store.tags().exists_by_name(&other).await.unwrap());
    }

    #[tokio::test]
    async fn project_resave_keeps_later_section_changes() {
        let store = InMemoryStore::new();
        let project = Project::create("Song", None, None, &names(&["Verse", "Chorus"])).unwrap();
        store.projects().save(&project).await.unwrap();

        let mut loaded = store.projects().find_by_id(project.id()).await.unwrap().unwrap();
        let verse = loaded.sections()[0].clone();
        let mut chorus = loaded.sections()[1].clone();
        let line = Line::create(chorus.id().clone(), "残る行", 0);
        store.lines().save(&line).await.unwrap();

        store.sections().delete(verse.id()).await.unwrap();
        chorus.update_name("Hook").unwrap();
        store.sections().save(&chorus).await.unwrap();

        loaded.update_title("Renamed").unwrap();
        store.projects().save(&loaded).await.unwrap();

        let reloaded = store.projects().find_by_id(project.id()).await.unwrap().unwrap();
        assert_eq!(reloaded.title().as_str(), "Renamed");
        assert_eq!(reloaded.section_names(), vec!["Hook"]);
        assert!(store.lines().find_by_id(line.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn reorder_with_duplicate_id_changes_nothing() {
        let store = InMemoryStore::new();
        let a = Folder::create("A", Some(0)).unwrap();
        let b = Folder::create("B", Some(1)).unwrap();
        store.folders().save(&a).await.unwrap();
        store.folders().save(&b).await.unwrap();

        let err = store
            .folders()
            .reorder(&[b.id().clone(), a.id().clone(), b.id().clone()])
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Repository);
        let order: Vec<i32> = store
            .folders()
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(Folder::order_index)
            .collect();
        assert_eq!(order, vec![0, 1]);
        let first = store.folders().find_by_id(a.id()).await.unwrap().unwrap();
        assert_eq!(first.order_index(), 0);
    }

    #[tokio::test]
    async fn line_delete_is_idempotent() {
        let store = InMemoryStore::new();
        let id = EntityId::generate();

        store.lines().delete(&id).await.unwrap();
        store.lines().delete(&id).await.unwrap();

        assert_eq!(store.lines().count_by_user().await.unwrap(), 0);
    }
}
