use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum AppEvent {
    SessionStart,
    ImageUpload(PathBuf),
    TextInput(String),
    RawTextInput {
        text: String,
        source: TextSource,
    },
    ShowResults(Vec<CharacterDetail>),
    ShowTranslation {
        text: String,
        from_lang: String,
        to_lang: String,
    },
    CreateCard(CharacterDetail),
    RemoveCard(Uuid),
    RequestDeck,
    ShowDeck(Vec<DeckEntry>),
    ShowStats {
        streak: u32,
        cards_learned: u32,
    },
    StatusUpdate {
        status: String,
        processing: bool,
    },
    BackendReady,
}

#[derive(Debug, Clone, Copy)]
pub enum TextSource {
    Ocr,
    Watcher,
    Manual,
}

/// One glyph with its reading and gloss, as produced by the lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDetail {
    pub character: String,
    pub pinyin: String,
    pub meaning: String,
}

/// Presentation view of a saved flashcard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckEntry {
    pub id: Uuid,
    pub character: String,
    pub pinyin: String,
    pub meaning: String,
    pub date_added: DateTime<Utc>,
}

/// Assembled output of one processing pass over recognized text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub characters: Vec<CharacterDetail>,
}
