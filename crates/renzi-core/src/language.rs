use renzi_types::CharacterDetail;

/// Text processing and per-glyph lookup interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "zh", "ja", etc.)
    fn language_code(&self) -> &str;

    /// Normalize text (Unicode normalization, whitespace, etc.)
    fn normalize(&self, text: &str) -> String;

    /// Break text into glyphs of the supported script and look each one up.
    /// Glyphs outside the script are skipped; glyphs without table entries
    /// come back with sentinel readings, never an error.
    fn character_details(&self, text: &str) -> Vec<CharacterDetail>;
}
