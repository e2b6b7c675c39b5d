//! The variable store.
//!
//! One flat name→value table per script run. Last write wins; reading an
//! absent name yields the expected type's default. The store is owned
//! exclusively by the single run that created it, so there is no locking
//! discipline to speak of.

use act_ir::{Value, ValueType};
use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
pub struct VarStore {
    bindings: FxHashMap<String, Value>,
}

impl VarStore {
    pub fn new() -> Self {
        VarStore::default()
    }

    /// Insert or overwrite a binding.
    pub fn set(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Read a binding as `ty`. Absent names -- and slots whose last write
    /// was under a different type -- yield `ty`'s default.
    pub fn load(&self, name: &str, ty: ValueType) -> Value {
        match self.bindings.get(name) {
            Some(value) if value.value_type() == ty => value.clone(),
            _ => Value::default_for(ty),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_names_yield_type_defaults() {
        let store = VarStore::new();
        assert_eq!(store.load("x", ValueType::INT), Value::Int(0));
        assert_eq!(store.load("x", ValueType::STR), Value::Str(String::new()));
        assert!(store.is_empty());
    }

    #[test]
    fn last_write_wins() {
        let mut store = VarStore::new();
        store.set("x", Value::Int(1));
        store.set("x", Value::Int(2));
        assert_eq!(store.load("x", ValueType::INT), Value::Int(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn stale_typed_slots_read_as_defaults() {
        let mut store = VarStore::new();
        store.set("x", Value::Str("old".to_string()));
        assert_eq!(store.load("x", ValueType::INT), Value::Int(0));
    }
}
