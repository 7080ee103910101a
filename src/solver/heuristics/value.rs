use crate::solver::{
    assignment::Assignment,
    constraint::pairwise_check,
    domain::Domains,
    engine::VariableId,
    problem::Problem,
};

/// A strategy for ordering the candidate values of a chosen variable.
pub trait ValueOrderingHeuristic {
    /// Returns the values of `var` worth trying, most promising first.
    ///
    /// Values listed in `tried` were already attempted at the current
    /// decision point and are excluded from the result.
    fn order_values(
        &self,
        var: VariableId,
        domains: &Domains,
        assignment: &Assignment,
        tried: &[i64],
        problem: &Problem,
    ) -> Vec<i64>;
}

/// Least Constraining Value with a numeric tie-break.
///
/// Scores each candidate by the number of `(neighbor, value)` options it
/// would rule out across the unassigned neighbors and tries low scores
/// first. Equal scores fall back to ascending numeric order, so the
/// ordering is total and deterministic.
pub struct LeastConstrainingValueHeuristic;

impl ValueOrderingHeuristic for LeastConstrainingValueHeuristic {
    fn order_values(
        &self,
        var: VariableId,
        domains: &Domains,
        assignment: &Assignment,
        tried: &[i64],
        problem: &Problem,
    ) -> Vec<i64> {
        let mut scored: Vec<(usize, i64)> = domains[&var]
            .iter()
            .filter(|value| !tried.contains(value))
            .map(|value| {
                let eliminated = problem
                    .graph
                    .neighbors(var)
                    .filter(|neighbor| !assignment.contains(*neighbor))
                    .map(|neighbor| {
                        domains[&neighbor]
                            .iter()
                            .filter(|other| {
                                !pairwise_check(var, value, neighbor, *other, &problem.constraints)
                            })
                            .count()
                    })
                    .sum();
                (eliminated, value)
            })
            .collect();
        scored.sort_unstable();
        scored.into_iter().map(|(_, value)| value).collect()
    }
}
