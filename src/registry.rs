//! The definition registry: every known key, in first-seen order.

use indexmap::IndexMap;

use crate::text::{BoundedString, DESCRIPTION_MAX, NAME_MAX, SYMBOL_MAX, truncate};
use crate::value::{Value, ValueType};

/// Schema entry for one configuration key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definition {
    /// Unique key name, used for lookups from the values file.
    pub name: BoundedString<NAME_MAX>,
    /// Free text, informational only.
    pub description: BoundedString<DESCRIPTION_MAX>,
    /// Identifier used in generated artifacts. Empty means "do not emit".
    pub symbol: BoundedString<SYMBOL_MAX>,
    pub declared_type: ValueType,
    pub value: Value,
    /// Whether `value` was ever successfully assigned.
    pub has_value: bool,
    pub required: bool,
}

impl Definition {
    fn new(name: &str) -> Self {
        Self {
            name: BoundedString::new(name),
            ..Self::default()
        }
    }

    /// Store a successfully parsed value.
    pub fn assign(&mut self, value: Value) {
        self.value = value;
        self.has_value = true;
    }

    /// Whether this definition appears in generated artifacts.
    pub fn is_eligible(&self) -> bool {
        !self.symbol.is_empty()
    }
}

/// Insertion-ordered collection of [`Definition`]s keyed by name.
///
/// Names are truncated to [`NAME_MAX`] on both insertion and lookup, so an
/// over-long name always resolves to the same entry. Iteration order is the
/// order in which names were first introduced.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    defs: IndexMap<String, Definition>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `name`, appending a fresh definition if it is not known yet.
    pub fn get_or_create(&mut self, name: &str) -> &mut Definition {
        let key = truncate(name, NAME_MAX);
        self.defs
            .entry(key.to_string())
            .or_insert_with(|| Definition::new(key))
    }

    /// Look up `name` without creating anything.
    pub fn find(&self, name: &str) -> Option<&Definition> {
        self.defs.get(truncate(name, NAME_MAX))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Definition> {
        self.defs.get_mut(truncate(name, NAME_MAX))
    }

    /// Definitions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.defs.values()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Definition;
    type IntoIter = indexmap::map::Values<'a, String, Definition>;

    fn into_iter(self) -> Self::IntoIter {
        self.defs.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::StringValue;

    fn names(registry: &Registry) -> Vec<&str> {
        registry.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn new_definition_defaults() {
        let mut registry = Registry::new();
        let def = registry.get_or_create("PORT");
        assert_eq!(def.name, "PORT");
        assert!(def.description.is_empty());
        assert!(def.symbol.is_empty());
        assert_eq!(def.declared_type, ValueType::String);
        assert_eq!(def.value, Value::String(StringValue::default()));
        assert!(!def.has_value);
        assert!(!def.required);
    }

    #[test]
    fn get_or_create_returns_existing() {
        let mut registry = Registry::new();
        registry.get_or_create("PORT").required = true;
        assert!(registry.get_or_create("PORT").required);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut registry = Registry::new();
        for name in ["c", "a", "b", "a", "c"] {
            registry.get_or_create(name);
        }
        assert_eq!(names(&registry), vec!["c", "a", "b"]);
    }

    #[test]
    fn find_does_not_create() {
        let mut registry = Registry::new();
        assert!(registry.find("missing").is_none());
        assert!(registry.find_mut("missing").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn long_names_truncate_consistently() {
        let mut registry = Registry::new();
        let long = "K".repeat(NAME_MAX + 10);
        registry.get_or_create(&long).required = true;

        assert_eq!(registry.len(), 1);
        let def = registry.find(&long).unwrap();
        assert_eq!(def.name.len(), NAME_MAX);
        assert!(def.required);

        // Anything sharing the truncated prefix is the same key.
        let other = format!("{}ZZZ", "K".repeat(NAME_MAX));
        assert!(registry.find(&other).is_some());
    }

    #[test]
    fn assign_sets_has_value() {
        let mut def = Definition::new("x");
        def.assign(Value::Integer(3));
        assert!(def.has_value);
        assert_eq!(def.value, Value::Integer(3));
    }

    #[test]
    fn eligibility_follows_symbol() {
        let mut def = Definition::new("x");
        assert!(!def.is_eligible());
        def.symbol.set("X");
        assert!(def.is_eligible());
    }
}
