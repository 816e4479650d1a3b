use std::collections::HashMap;

/// Pinyin reading provider for common characters
pub struct PinyinTable {
    readings: HashMap<char, &'static str>,
}

impl PinyinTable {
    /// Create empty table
    pub fn new() -> Self {
        Self {
            readings: HashMap::new(),
        }
    }

    /// Create with the built-in common-character data set
    pub fn with_defaults() -> Self {
        let entries = [
            ('你', "nǐ"),
            ('好', "hǎo"),
            ('我', "wǒ"),
            ('是', "shì"),
            ('在', "zài"),
            ('这', "zhè"),
            ('那', "nà"),
            ('人', "rén"),
            ('大', "dà"),
            ('小', "xiǎo"),
            ('中', "zhōng"),
            ('国', "guó"),
            ('日', "rì"),
            ('月', "yuè"),
            ('年', "nián"),
            ('时', "shí"),
            ('天', "tiān"),
            ('地', "dì"),
            ('上', "shàng"),
            ('下', "xià"),
            ('前', "qián"),
            ('后', "hòu"),
            ('左', "zuǒ"),
            ('右', "yòu"),
            ('东', "dōng"),
            ('西', "xī"),
            ('南', "nán"),
            ('北', "běi"),
            ('家', "jiā"),
            ('学', "xué"),
            ('生', "shēng"),
            ('工', "gōng"),
            ('作', "zuò"),
            ('来', "lái"),
            ('去', "qù"),
            ('说', "shuō"),
            ('话', "huà"),
            ('看', "kàn"),
            ('听', "tīng"),
            ('写', "xiě"),
            ('读', "dú"),
            ('吃', "chī"),
            ('喝', "hē"),
            ('睡', "shuì"),
            ('想', "xiǎng"),
            ('爱', "ài"),
            ('会', "huì"),
            ('能', "néng"),
            ('有', "yǒu"),
            ('没', "méi"),
            ('个', "gè"),
            ('多', "duō"),
            ('少', "shǎo"),
            ('新', "xīn"),
            ('旧', "jiù"),
            ('开', "kāi"),
            ('关', "guān"),
        ];

        Self {
            readings: entries.into_iter().collect(),
        }
    }

    /// Get the reading for a character, None if not in the table
    pub fn get(&self, character: char) -> Option<&'static str> {
        self.readings.get(&character).copied()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl Default for PinyinTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}
