use std::collections::{HashMap, HashSet};

use crate::solver::{assignment::Assignment, constraint::Constraint, engine::VariableId};

/// Undirected adjacency over variables: two variables are neighbors when at
/// least one constraint links them. Built once per problem, immutable
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct ConstraintGraph {
    neighbors: HashMap<VariableId, HashSet<VariableId>>,
}

impl ConstraintGraph {
    /// Builds the adjacency map for `variable_count` variables in
    /// O(|constraints|). A constraint relating a variable to itself yields a
    /// self-loop, mirroring the file format's permissiveness.
    pub fn build(variable_count: usize, constraints: &[Constraint]) -> Self {
        let mut neighbors: HashMap<VariableId, HashSet<VariableId>> = HashMap::new();
        for id in 0..variable_count as VariableId {
            neighbors.entry(id).or_default();
        }
        for constraint in constraints {
            neighbors.entry(constraint.left).or_default().insert(constraint.right);
            neighbors.entry(constraint.right).or_default().insert(constraint.left);
        }
        Self { neighbors }
    }

    /// The neighbors of `var`, in no particular order.
    pub fn neighbors(&self, var: VariableId) -> impl Iterator<Item = VariableId> + '_ {
        self.neighbors.get(&var).into_iter().flatten().copied()
    }

    /// How many neighbors of `var` are not yet assigned.
    pub fn unassigned_degree(&self, var: VariableId, assignment: &Assignment) -> usize {
        self.neighbors(var)
            .filter(|neighbor| !assignment.contains(*neighbor))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::constraint::ConstraintOp;

    fn collect(graph: &ConstraintGraph, var: VariableId) -> Vec<VariableId> {
        let mut neighbors: Vec<VariableId> = graph.neighbors(var).collect();
        neighbors.sort_unstable();
        neighbors
    }

    #[test]
    fn adjacency_is_symmetric() {
        let constraints = vec![
            Constraint::new(0, ConstraintOp::NotEqual, 1),
            Constraint::new(1, ConstraintOp::LessThan, 2),
        ];
        let graph = ConstraintGraph::build(3, &constraints);

        assert_eq!(collect(&graph, 0), vec![1]);
        assert_eq!(collect(&graph, 1), vec![0, 2]);
        assert_eq!(collect(&graph, 2), vec![1]);
    }

    #[test]
    fn duplicate_constraints_do_not_duplicate_edges() {
        let constraints = vec![
            Constraint::new(0, ConstraintOp::NotEqual, 1),
            Constraint::new(1, ConstraintOp::GreaterThan, 0),
        ];
        let graph = ConstraintGraph::build(2, &constraints);
        assert_eq!(collect(&graph, 0), vec![1]);
        assert_eq!(collect(&graph, 1), vec![0]);
    }

    #[test]
    fn unassigned_degree_skips_assigned_neighbors() {
        let constraints = vec![
            Constraint::new(0, ConstraintOp::NotEqual, 1),
            Constraint::new(0, ConstraintOp::NotEqual, 2),
        ];
        let graph = ConstraintGraph::build(3, &constraints);

        let nobody = Assignment::new();
        assert_eq!(graph.unassigned_degree(0, &nobody), 2);

        let one_assigned = nobody.with(1, 5);
        assert_eq!(graph.unassigned_degree(0, &one_assigned), 1);
    }

    #[test]
    fn isolated_variables_have_no_neighbors() {
        let graph = ConstraintGraph::build(2, &[]);
        assert_eq!(collect(&graph, 0), Vec::<VariableId>::new());
        assert_eq!(graph.unassigned_degree(0, &Assignment::new()), 0);
    }
}
