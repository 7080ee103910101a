use im::{HashMap, Vector};

use crate::solver::engine::VariableId;

/// A partial mapping from variables to chosen values.
///
/// The assignment remembers insertion order: trace lines print pairs in the
/// order they were assigned. Extension goes through [`with`](Self::with),
/// which returns a new assignment and leaves the receiver untouched, so
/// sibling search branches never share mutable state. The persistent
/// backing structures make each copy cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    order: Vector<VariableId>,
    values: HashMap<VariableId, i64>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, var: VariableId) -> bool {
        self.values.contains_key(&var)
    }

    pub fn get(&self, var: VariableId) -> Option<i64> {
        self.values.get(&var).copied()
    }

    /// A new assignment extended with `var = value`. The variable must not
    /// already be assigned.
    pub fn with(&self, var: VariableId, value: i64) -> Assignment {
        let mut order = self.order.clone();
        order.push_back(var);
        Assignment {
            order,
            values: self.values.update(var, value),
        }
    }

    /// Pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, i64)> + '_ {
        self.order.iter().map(move |var| (*var, self.values[var]))
    }
}
