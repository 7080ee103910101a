use std::collections::HashMap;

use tracing::debug;

use crate::solver::{
    assignment::Assignment,
    constraint::assignment_consistent,
    domain::Domains,
    forward::forward_check,
    heuristics::{
        value::{LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
        variable::{MinimumRemainingValuesHeuristic, VariableSelectionHeuristic},
    },
    problem::Problem,
    trace::{BranchLog, BranchOutcome},
};

pub type VariableId = u32;

/// How the engine vets a candidate value before recursing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyMode {
    /// Check the extended assignment against every constraint whose two
    /// endpoints are assigned.
    Naive,
    /// Prune the domains of unassigned neighbors and fail on a wipeout.
    ForwardChecking,
}

impl ConsistencyMode {
    /// Maps the command-line mode argument: the literal `fc` enables
    /// forward checking, anything else selects naive backtracking.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "fc" {
            ConsistencyMode::ForwardChecking
        } else {
            ConsistencyMode::Naive
        }
    }
}

/// The result of exploring a search subtree.
///
/// The outcome is threaded explicitly through the recursion: a frame that
/// receives `Found` returns immediately without visiting further values,
/// and `Exhausted` is ordinary control flow, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A complete, consistent assignment. The first one found wins.
    Found(Assignment),
    /// Every branch of the subtree failed.
    Exhausted,
}

impl SearchOutcome {
    pub fn solution(&self) -> Option<&Assignment> {
        match self {
            SearchOutcome::Found(assignment) => Some(assignment),
            SearchOutcome::Exhausted => None,
        }
    }
}

/// Counters describing one solve run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search frames entered, including the frame that completed the
    /// assignment.
    pub nodes_visited: u64,
    /// Candidate values that failed to lead to a solution.
    pub backtracks: u64,
    /// Forward-checking dead ends where a neighbor's domain emptied out.
    pub wipeouts: u64,
}

/// Everything a solve run produces: the outcome, the branch log in attempt
/// order, and the search counters.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub outcome: SearchOutcome,
    pub log: BranchLog,
    pub stats: SearchStats,
}

/// Depth-first backtracking search over partial assignments.
///
/// The engine owns nothing but its configuration: variable and value
/// ordering are pluggable heuristics, and the consistency mode decides
/// whether candidate values are vetted by forward checking or by a
/// whole-assignment constraint pass. All per-branch state (assignment and
/// domain snapshot) is an independently owned persistent value, so pruning
/// in one branch can never leak into a sibling.
pub struct BacktrackingSolver {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
    mode: ConsistencyMode,
}

impl BacktrackingSolver {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
        mode: ConsistencyMode,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
            mode,
        }
    }

    /// A solver with the standard heuristic pair: minimum remaining values
    /// for variables, least constraining value for values.
    pub fn with_default_heuristics(mode: ConsistencyMode) -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
            mode,
        )
    }

    /// Runs the search from an empty assignment over `initial_domains` and
    /// returns the first complete consistent assignment, or reports that
    /// the search space is exhausted.
    pub fn solve(&self, problem: &Problem, initial_domains: Domains) -> SolveReport {
        let mut log = BranchLog::default();
        let mut stats = SearchStats::default();
        let mut tried: HashMap<VariableId, Vec<i64>> =
            problem.registry.ids().map(|id| (id, Vec::new())).collect();

        debug!(
            variables = problem.variable_count(),
            constraints = problem.constraints.len(),
            mode = ?self.mode,
            "starting search"
        );

        let outcome = self.search(
            problem,
            Assignment::new(),
            initial_domains,
            &mut tried,
            &mut log,
            &mut stats,
        );

        debug!(?stats, solved = outcome.solution().is_some(), "search finished");

        SolveReport {
            outcome,
            log,
            stats,
        }
    }

    fn search(
        &self,
        problem: &Problem,
        assignment: Assignment,
        domains: Domains,
        tried: &mut HashMap<VariableId, Vec<i64>>,
        log: &mut BranchLog,
        stats: &mut SearchStats,
    ) -> SearchOutcome {
        stats.nodes_visited += 1;

        if assignment.len() == problem.variable_count() {
            return SearchOutcome::Found(assignment);
        }

        let Some(var) = self
            .variable_heuristic
            .select_variable(&domains, &assignment, problem)
        else {
            // Not reachable while the assignment is incomplete, but handled
            // the same way as the complete case.
            return SearchOutcome::Found(assignment);
        };

        let already_tried = tried.get(&var).cloned().unwrap_or_default();
        let candidates =
            self.value_heuristic
                .order_values(var, &domains, &assignment, &already_tried, problem);

        for value in candidates {
            tried.entry(var).or_default().push(value);
            let extended = assignment.with(var, value);

            let next_domains = match self.mode {
                ConsistencyMode::ForwardChecking => {
                    match forward_check(var, value, &extended, &domains, problem) {
                        Some(narrowed) => narrowed,
                        None => {
                            stats.wipeouts += 1;
                            stats.backtracks += 1;
                            log.push(extended, BranchOutcome::Failure);
                            continue;
                        }
                    }
                }
                ConsistencyMode::Naive => {
                    if !assignment_consistent(&extended, &problem.constraints) {
                        stats.backtracks += 1;
                        log.push(extended, BranchOutcome::Failure);
                        continue;
                    }
                    domains.clone()
                }
            };

            match self.search(problem, extended.clone(), next_domains, tried, log, stats) {
                SearchOutcome::Found(solution) => {
                    // Only the frame whose extension completed the
                    // assignment writes the solution line.
                    if extended.len() == problem.variable_count() {
                        log.push(extended, BranchOutcome::Solution);
                    }
                    return SearchOutcome::Found(solution);
                }
                SearchOutcome::Exhausted => {
                    stats.backtracks += 1;
                }
            }
        }

        // Leave a clean slate for the next time an ancestor's retry selects
        // this variable.
        if let Some(entry) = tried.get_mut(&var) {
            entry.clear();
        }
        SearchOutcome::Exhausted
    }
}
