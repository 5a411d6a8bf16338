//! User-facing error messages
//!
//! Maps a `DomainError` to the text shown to the songwriter. Japanese is the
//! default locale. Repository failures are logged here and replaced with a
//! generic message; their detail never reaches the user.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{DomainError, EntityKind, Field, ValidationError};

/// Language of user-facing messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale: {0:?} (expected \"ja\" or \"en\")")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" => Ok(Locale::Ja),
            "en" => Ok(Locale::En),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

fn field_label(field: Field, locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => match field {
            Field::FolderName => "フォルダ名",
            Field::ProjectTitle => "タイトル",
            Field::SectionName => "セクション名",
            Field::PhraseText => "フレーズ",
            Field::GenreName => "ジャンル名",
            Field::GenreDescription => "ジャンルの説明",
            Field::TagName => "タグ名",
            Field::TagColor => "タグの色",
        },
        Locale::En => match field {
            Field::FolderName => "Folder name",
            Field::ProjectTitle => "Title",
            Field::SectionName => "Section name",
            Field::PhraseText => "Phrase",
            Field::GenreName => "Genre name",
            Field::GenreDescription => "Genre description",
            Field::TagName => "Tag name",
            Field::TagColor => "Tag color",
        },
    }
}

fn entity_label(entity: EntityKind, locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => match entity {
            EntityKind::Folder => "フォルダ",
            EntityKind::Project => "プロジェクト",
            EntityKind::Section => "セクション",
            EntityKind::Line => "行",
            EntityKind::Phrase => "フレーズ",
            EntityKind::Tag => "タグ",
            EntityKind::Genre => "ジャンル",
        },
        Locale::En => match entity {
            EntityKind::Folder => "Folder",
            EntityKind::Project => "Project",
            EntityKind::Section => "Section",
            EntityKind::Line => "Line",
            EntityKind::Phrase => "Phrase",
            EntityKind::Tag => "Tag",
            EntityKind::Genre => "Genre",
        },
    }
}

fn validation_message(err: &ValidationError, locale: Locale) -> String {
    match (err, locale) {
        (ValidationError::Empty { field }, Locale::Ja) => {
            format!("{}を入力してください", field_label(*field, locale))
        }
        (ValidationError::Empty { field }, Locale::En) => {
            format!("{} is required.", field_label(*field, locale))
        }
        (ValidationError::TooLong { field, max }, Locale::Ja) => {
            format!("{}は{}文字以内で入力してください", field_label(*field, locale), max)
        }
        (ValidationError::TooLong { field, max }, Locale::En) => format!(
            "{} must be {} characters or fewer.",
            field_label(*field, locale),
            max
        ),
        (ValidationError::InvalidFormat { field }, Locale::Ja) => {
            format!("{}の形式が正しくありません", field_label(*field, locale))
        }
        (ValidationError::InvalidFormat { field }, Locale::En) => {
            format!("{} has an invalid format.", field_label(*field, locale))
        }
        (ValidationError::InvalidId { .. }, Locale::Ja) => "IDの形式が正しくありません".to_string(),
        (ValidationError::InvalidId { .. }, Locale::En) => "The ID is malformed.".to_string(),
    }
}

/// Text to show the user for a failed operation
pub fn user_message(err: &DomainError, locale: Locale) -> String {
    match err {
        DomainError::Validation(v) => validation_message(v, locale),
        DomainError::NotFound { entity, .. } => match locale {
            Locale::Ja => format!("{}が見つかりません", entity_label(*entity, locale)),
            Locale::En => format!("{} not found.", entity_label(*entity, locale)),
        },
        DomainError::AlreadyExists { entity, name } => match locale {
            Locale::Ja => format!(
                "「{}」という{}は既に存在します",
                name,
                entity_label(*entity, locale)
            ),
            Locale::En => format!(
                "A {} named \"{}\" already exists.",
                entity_label(*entity, locale).to_lowercase(),
                name
            ),
        },
        DomainError::QuotaExceeded { entity, limit } => match locale {
            Locale::Ja => format!(
                "{}は{}件まで作成できます",
                entity_label(*entity, locale),
                limit
            ),
            Locale::En => format!(
                "You can create up to {} {} items.",
                limit,
                entity_label(*entity, locale).to_lowercase()
            ),
        },
        DomainError::Repository(detail) => {
            tracing::error!("Repository error: {}", detail);
            match locale {
                Locale::Ja => {
                    "エラーが発生しました。しばらくしてから再度お試しください".to_string()
                }
                Locale::En => "Something went wrong. Please try again later.".to_string(),
            }
        }
    }
}
