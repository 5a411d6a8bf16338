//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Folder, Genre, Line, Phrase, Project, Section, Tag};
use crate::domain::value_objects::{EntityId, SectionName};

/// Create a test folder with default values
pub fn test_folder() -> Folder {
    test_folder_named("作詞メモ", 0)
}

pub fn test_folder_named(name: &str, order_index: i32) -> Folder {
    Folder::create(name, Some(order_index)).unwrap()
}

/// Create a test project with no sections
pub fn test_project() -> Project {
    Project::create("夏の終わりに", None, None, &[]).unwrap()
}

/// Create a test project with the given sections
pub fn test_project_with_sections(names: &[&str]) -> Project {
    let names: Vec<SectionName> = names.iter().map(|n| SectionName::new(n).unwrap()).collect();
    Project::create("夏の終わりに", None, None, &names).unwrap()
}

pub fn test_section(project_id: &EntityId, name: &str, order_index: i32) -> Section {
    Section::create(project_id.clone(), name, order_index).unwrap()
}

pub fn test_line(section_id: &EntityId, text: &str, line_index: i32) -> Line {
    Line::create(section_id.clone(), text, line_index)
}

pub fn test_phrase() -> Phrase {
    Phrase::create("風が運ぶ約束", Some("サビ候補")).unwrap()
}

pub fn test_tag(name: &str) -> Tag {
    Tag::create(name, None).unwrap()
}

/// Create a test genre with a verse/chorus template
pub fn test_genre() -> Genre {
    Genre::create("J-POP", Some("王道構成"), &["Aメロ", "Bメロ", "サビ"]).unwrap()
}
