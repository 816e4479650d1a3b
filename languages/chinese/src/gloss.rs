use std::collections::HashMap;

/// Short English gloss provider for common characters
pub struct GlossTable {
    glosses: HashMap<char, &'static str>,
}

impl GlossTable {
    /// Create empty table
    pub fn new() -> Self {
        Self {
            glosses: HashMap::new(),
        }
    }

    /// Create with the built-in common-character data set
    pub fn with_defaults() -> Self {
        let entries = [
            ('你', "you"),
            ('好', "good"),
            ('我', "I/me"),
            ('是', "to be"),
            ('在', "at/in"),
            ('这', "this"),
            ('那', "that"),
            ('人', "person"),
            ('大', "big"),
            ('小', "small"),
            ('中', "middle"),
            ('国', "country"),
            ('日', "sun/day"),
            ('月', "moon/month"),
            ('年', "year"),
            ('时', "time"),
            ('天', "sky/day"),
            ('地', "earth/ground"),
            ('上', "up/above"),
            ('下', "down/below"),
            ('前', "front"),
            ('后', "back/after"),
            ('左', "left"),
            ('右', "right"),
            ('东', "east"),
            ('西', "west"),
            ('南', "south"),
            ('北', "north"),
            ('家', "home/family"),
            ('学', "study/learn"),
            ('生', "life/raw"),
            ('工', "work"),
            ('作', "do/make"),
            ('来', "come"),
            ('去', "go"),
            ('说', "speak/say"),
            ('话', "words/speech"),
            ('看', "look/see"),
            ('听', "listen"),
            ('写', "write"),
            ('读', "read"),
            ('吃', "eat"),
            ('喝', "drink"),
            ('睡', "sleep"),
            ('想', "think/want"),
            ('爱', "love"),
            ('会', "can/will"),
            ('能', "able/can"),
            ('有', "have"),
            ('没', "not have"),
            ('个', "individual/measure word"),
            ('多', "many/much"),
            ('少', "few/little"),
            ('新', "new"),
            ('旧', "old"),
            ('开', "open"),
            ('关', "close"),
        ];

        Self {
            glosses: entries.into_iter().collect(),
        }
    }

    /// Get the gloss for a character, None if not in the table
    pub fn get(&self, character: char) -> Option<&'static str> {
        self.glosses.get(&character).copied()
    }

    pub fn len(&self) -> usize {
        self.glosses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glosses.is_empty()
    }
}

impl Default for GlossTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}
