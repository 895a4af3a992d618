//! Name mapping tables.
//!
//! Two tables drive type-name translation: one for plain and primitive
//! type names, one for generic container names. Both are total: a name
//! without an entry maps to itself, so user-defined types pass through.
//!
//! The tables are data. Adding a mapping never touches the translator;
//! see [`crate::config`] for loading extra entries from TOML.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Built-in plain/primitive type name mappings.
pub const BUILTIN_NAMES: &[(&str, &str)] = &[
    ("Void", "Unit"),
    ("TimeSpan", "Duration"),
    ("Object", "Any"),
    ("Int32", "Int"),
    ("Boolean", "Boolean"),
    ("String", "String"),
    ("ArgumentException", "IllegalArgumentException"),
];

/// Built-in generic container name mappings.
pub const BUILTIN_GENERIC_CONTAINERS: &[(&str, &str)] = &[
    ("ConcurrentQueue", "ConcurrentLinkedQueue"),
    ("ConcurrentDictionary", "ConcurrentHashMap"),
    ("List", "MutableList"),
    ("Set", "MutableSet"),
    ("Stack", "Stack"),
];

static BUILTIN: OnceLock<TypeTables> = OnceLock::new();

/// A source-name to target-name table with identity fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: HashMap<String, String>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut table = Self::new();
        for (source, target) in pairs {
            table.insert(*source, *target);
        }
        table
    }

    /// Add or replace a mapping.
    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.entries.insert(source.into(), target.into());
    }

    /// Translate a name. Unknown names come back unchanged.
    pub fn translate<'a>(&'a self, name: &'a str) -> &'a str {
        self.entries.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Source names with an explicit entry, sorted.
    pub fn source_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<S: Into<String>, T: Into<String>> Extend<(S, T)> for MappingTable {
    fn extend<I: IntoIterator<Item = (S, T)>>(&mut self, iter: I) {
        for (source, target) in iter {
            self.insert(source, target);
        }
    }
}

/// The name table and the generic container table, used together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTables {
    pub names: MappingTable,
    pub generics: MappingTable,
}

impl TypeTables {
    /// Fresh copy of the built-in tables, for callers that want to extend them.
    pub fn new() -> Self {
        Self {
            names: MappingTable::from_pairs(BUILTIN_NAMES),
            generics: MappingTable::from_pairs(BUILTIN_GENERIC_CONTAINERS),
        }
    }

    /// Shared, read-only built-in tables.
    pub fn builtin() -> &'static TypeTables {
        BUILTIN.get_or_init(Self::new)
    }

    /// Translate a plain or primitive type name.
    pub fn translate_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.names.translate(name)
    }

    /// Translate a generic container name.
    pub fn translate_generic_container<'a>(&'a self, name: &'a str) -> &'a str {
        self.generics.translate(name)
    }
}

impl Default for TypeTables {
    fn default() -> Self {
        Self::new()
    }
}
