pub mod gloss;
pub mod pinyin;
pub mod processor;
pub mod translator;

pub use gloss::GlossTable;
pub use pinyin::PinyinTable;
pub use processor::{ChineseProcessor, UNKNOWN};
pub use translator::{ChineseTranslator, TRANSLATION_UNAVAILABLE};
