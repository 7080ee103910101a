use std::collections::HashMap;

use crate::solver::engine::VariableId;

/// Interns textual variable names to dense [`VariableId`]s.
///
/// Ids are handed out in registration order, so iterating [`ids`](Self::ids)
/// visits variables in the order they appeared in the input file. Anywhere
/// the search tie-breaks on "identifier" it compares the textual name, never
/// the numeric id.
#[derive(Debug, Clone, Default)]
pub struct VariableRegistry {
    names: Vec<String>,
    ids: HashMap<String, VariableId>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, registering it if unseen.
    pub fn intern(&mut self, name: &str) -> VariableId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }
        let id = self.names.len() as VariableId;
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    pub fn id_of(&self, name: &str) -> Option<VariableId> {
        self.ids.get(name).copied()
    }

    /// The textual name behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this registry.
    pub fn name_of(&self, id: VariableId) -> &str {
        &self.names[id as usize]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = VariableId> {
        0..self.names.len() as VariableId
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn interning_is_idempotent() {
        let mut registry = VariableRegistry::new();
        let a = registry.intern("A");
        let b = registry.intern("B");
        assert_eq!(registry.intern("A"), a);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.name_of(a), "A");
        assert_eq!(registry.name_of(b), "B");
    }

    #[test]
    fn ids_iterate_in_registration_order() {
        let mut registry = VariableRegistry::new();
        registry.intern("Z");
        registry.intern("A");
        let names: Vec<&str> = registry.ids().map(|id| registry.name_of(id)).collect();
        assert_eq!(names, vec!["Z", "A"]);
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        let registry = VariableRegistry::new();
        assert_eq!(registry.id_of("missing"), None);
    }
}
