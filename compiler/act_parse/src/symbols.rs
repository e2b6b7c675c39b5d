//! The incrementally built symbol table.
//!
//! `store` forms insert or overwrite the entry for their target name with
//! the stored expression's type; identifier references consult the table in
//! textual order, so a name is only usable after the `store` that defines
//! it. Last write wins, matching the run-time variable store.

use act_ir::ValueType;
use rustc_hash::FxHashMap;

#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    entries: FxHashMap<String, ValueType>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Insert or overwrite a name's type.
    pub fn define(&mut self, name: &str, ty: ValueType) {
        self.entries.insert(name.to_string(), ty);
    }

    /// The type a name currently resolves to, if any `store` defined it.
    pub fn lookup(&self, name: &str) -> Option<ValueType> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
