use crate::graph::Value;
use indexmap::IndexMap;

/// Run-scoped, untyped variable storage.
///
/// Entries keep insertion order so the final dump is deterministic; a
/// cleared and re-set variable moves to the end.
#[derive(Debug, Default, Clone)]
pub struct VariableStore {
    values: IndexMap<String, Value>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Removes a variable, returning whether it existed.
    pub fn clear(&mut self, name: &str) -> bool {
        self.values.shift_remove(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}
