//! Vincula is a solver for binary constraint satisfaction problems: finite
//! integer domains, pairwise constraints over the four relations `=`, `!`,
//! `>`, `<`, and a depth-first backtracking search that stops at the first
//! complete consistent assignment.
//!
//! # Core Concepts
//!
//! - **[`Problem`]**: the immutable problem definition — a variable
//!   registry, the constraint list in input order, and the constraint graph
//!   derived from it.
//! - **[`BacktrackingSolver`]**: the search engine. Variable selection
//!   (minimum remaining values, ties by degree and name) and value ordering
//!   (least constraining value, ties numeric) are pluggable heuristics, and
//!   a [`ConsistencyMode`] chooses between naive backtracking and forward
//!   checking.
//! - **[`SolveReport`]**: what a run returns — the tagged search outcome,
//!   the branch log in attempt order, and the search counters.
//!
//! Domain snapshots and assignments are persistent (`im`) values: every
//! search frame owns an independent copy, so pruning in one branch can
//! never leak into a sibling branch.
//!
//! [`Problem`]: solver::problem::Problem
//! [`BacktrackingSolver`]: solver::engine::BacktrackingSolver
//! [`ConsistencyMode`]: solver::engine::ConsistencyMode
//! [`SolveReport`]: solver::engine::SolveReport
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Solving `A != B` where `A` can be `1` or `2` and `B` can only be `1`:
//! the solver must conclude that `A` is `2`.
//!
//! ```
//! use vincula::solver::{
//!     constraint::{Constraint, ConstraintOp},
//!     domain::{Domain, Domains},
//!     engine::{BacktrackingSolver, ConsistencyMode, SearchOutcome},
//!     problem::Problem,
//!     variables::VariableRegistry,
//! };
//!
//! let mut registry = VariableRegistry::new();
//! let a = registry.intern("A");
//! let b = registry.intern("B");
//!
//! let mut domains = Domains::new();
//! domains.insert(a, Domain::new([1, 2]));
//! domains.insert(b, Domain::new([1]));
//!
//! let constraints = vec![Constraint::new(a, ConstraintOp::NotEqual, b)];
//! let problem = Problem::new(registry, constraints);
//!
//! let solver = BacktrackingSolver::with_default_heuristics(ConsistencyMode::ForwardChecking);
//! let report = solver.solve(&problem, domains);
//!
//! let SearchOutcome::Found(solution) = report.outcome else {
//!     panic!("expected a solution");
//! };
//! assert_eq!(solution.get(a), Some(2));
//! assert_eq!(solution.get(b), Some(1));
//! ```

pub mod error;
pub mod input;
pub mod solver;
