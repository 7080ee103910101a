//! Heuristics for selecting which variable to branch on next during the
//! search process.

use std::cmp::Reverse;

use crate::solver::{
    assignment::Assignment, domain::Domains, engine::VariableId, problem::Problem,
};

/// A strategy for choosing the next unassigned variable to branch on.
///
/// Implementations must be pure functions of the current domains, the
/// partial assignment, and the problem structure, so that repeated runs of
/// the solver stay deterministic.
pub trait VariableSelectionHeuristic {
    /// Selects the next variable to assign.
    ///
    /// # Returns
    ///
    /// * `Some(VariableId)` of the chosen variable, if any variable is
    ///   still unassigned.
    /// * `None` once every variable has a value.
    fn select_variable(
        &self,
        domains: &Domains,
        assignment: &Assignment,
        problem: &Problem,
    ) -> Option<VariableId>;
}

/// Minimum Remaining Values with degree and name tie-breaks.
///
/// Picks the unassigned variable with the fewest values left in its domain
/// (fail-first). Ties go to the variable with the most unassigned neighbors
/// (most constraining), and remaining ties to the lexicographically
/// smallest name, which keeps the selection fully deterministic.
pub struct MinimumRemainingValuesHeuristic;

impl VariableSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_variable(
        &self,
        domains: &Domains,
        assignment: &Assignment,
        problem: &Problem,
    ) -> Option<VariableId> {
        problem
            .registry
            .ids()
            .filter(|var| !assignment.contains(*var))
            .min_by_key(|var| {
                (
                    domains[var].len(),
                    Reverse(problem.graph.unassigned_degree(*var, assignment)),
                    problem.registry.name_of(*var),
                )
            })
    }
}
