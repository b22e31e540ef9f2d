use std::collections::HashMap;

use super::Terminal;

/// Struct for storing terminal symbols with their respective spelling.
#[derive(Debug, Clone, Default)]
pub struct LexMap {
    map: HashMap<&'static str, Terminal>,
}

impl LexMap {
    pub fn insert(&mut self, key: &'static str, value: Terminal) {
        self.map.insert(key, value);
    }

    /// Whether some terminal's spelling starts with `key`. Used for maximal
    /// munch: scanning continues as long as this holds.
    pub fn can_match(&self, key: &str) -> bool {
        self.map.keys().any(|map_key| map_key.starts_with(key))
    }

    pub fn get(&self, key: &str) -> Option<Terminal> {
        self.map.get(key).copied()
    }
}
