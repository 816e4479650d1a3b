use renzi_core::language::LanguageProcessor;
use renzi_types::CharacterDetail;
use unicode_normalization::UnicodeNormalization;

use crate::gloss::GlossTable;
use crate::pinyin::PinyinTable;

/// Sentinel reading/gloss for characters outside the lookup tables
pub const UNKNOWN: &str = "(unknown)";

/// Chinese language processor: per-character breakdown over the static
/// pinyin/gloss tables
pub struct ChineseProcessor {
    pinyin: PinyinTable,
    glosses: GlossTable,
}

impl ChineseProcessor {
    pub fn new() -> Self {
        Self {
            pinyin: PinyinTable::with_defaults(),
            glosses: GlossTable::with_defaults(),
        }
    }

    fn detail(&self, character: char) -> CharacterDetail {
        CharacterDetail {
            character: character.to_string(),
            pinyin: self.pinyin.get(character).unwrap_or(UNKNOWN).to_string(),
            meaning: self.glosses.get(character).unwrap_or(UNKNOWN).to_string(),
        }
    }
}

impl Default for ChineseProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified CJK ideograph range accepted by the breakdown
fn is_hanzi(character: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&character)
}

impl LanguageProcessor for ChineseProcessor {
    fn language_code(&self) -> &str {
        "zh"
    }

    fn normalize(&self, text: &str) -> String {
        text.nfc()
            .collect::<String>()
            .chars()
            .filter(|c| !c.is_whitespace() || *c == ' ')
            .collect::<String>()
            .trim()
            .to_string()
    }

    fn character_details(&self, text: &str) -> Vec<CharacterDetail> {
        text.chars()
            .filter(|c| is_hanzi(*c))
            .map(|c| self.detail(c))
            .collect()
    }
}
