use std::collections::HashMap;

use super::Value;

/// Variable bindings of a running program: one flat scope, where binding an
/// existing name simply overwrites it. Looking a name up clones the value,
/// which for arrays means handing out another handle onto the same storage.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_owned(), value);
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.variables.get(name).cloned()
    }
}
