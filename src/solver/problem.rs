use crate::solver::{constraint::Constraint, graph::ConstraintGraph, variables::VariableRegistry};

/// A complete problem definition: the variable registry, the constraint
/// list in input order, and the adjacency derived from it.
///
/// The problem is immutable during search; all mutable state lives in the
/// engine's call frames.
#[derive(Debug, Clone)]
pub struct Problem {
    pub registry: VariableRegistry,
    pub constraints: Vec<Constraint>,
    pub graph: ConstraintGraph,
}

impl Problem {
    pub fn new(registry: VariableRegistry, constraints: Vec<Constraint>) -> Self {
        let graph = ConstraintGraph::build(registry.len(), &constraints);
        Self {
            registry,
            constraints,
            graph,
        }
    }

    pub fn variable_count(&self) -> usize {
        self.registry.len()
    }
}
