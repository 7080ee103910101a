use crate::solver::{
    assignment::Assignment,
    constraint::pairwise_check,
    domain::Domains,
    engine::VariableId,
    problem::Problem,
};

/// Propagates a tentative `var = value` assignment to the unassigned
/// neighbors of `var`.
///
/// Each unassigned neighbor's domain is filtered down to the values still
/// compatible with the new assignment. Returns the narrowed snapshot, or
/// `None` when some neighbor is left with an empty domain (a dead branch).
/// The input snapshot is never modified; the result is a copy with only the
/// affected neighbors' domains replaced, so sibling branches keep their own
/// view of the search space.
///
/// `assignment` must already contain `var`, which also keeps a self-loop on
/// `var` out of the neighbor scan.
pub fn forward_check(
    var: VariableId,
    value: i64,
    assignment: &Assignment,
    domains: &Domains,
    problem: &Problem,
) -> Option<Domains> {
    let mut narrowed = domains.clone();
    for neighbor in problem.graph.neighbors(var) {
        if assignment.contains(neighbor) {
            continue;
        }
        let filtered = domains[&neighbor].retain(|other| {
            pairwise_check(var, value, neighbor, other, &problem.constraints)
        });
        if filtered.is_empty() {
            return None;
        }
        narrowed.insert(neighbor, filtered);
    }
    Some(narrowed)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{
        constraint::{Constraint, ConstraintOp},
        domain::Domain,
        variables::VariableRegistry,
    };

    /// A path `A - B - C` with `A != B` and `B < C`, all domains `[1, 2]`.
    fn path_problem() -> Problem {
        let mut registry = VariableRegistry::new();
        let a = registry.intern("A");
        let b = registry.intern("B");
        let c = registry.intern("C");
        let constraints = vec![
            Constraint::new(a, ConstraintOp::NotEqual, b),
            Constraint::new(b, ConstraintOp::LessThan, c),
        ];
        Problem::new(registry, constraints)
    }

    fn path_domains() -> Domains {
        let mut domains = Domains::new();
        domains.insert(0, Domain::new([1, 2]));
        domains.insert(1, Domain::new([1, 2]));
        domains.insert(2, Domain::new([1, 2]));
        domains
    }

    #[test]
    fn prunes_neighbor_domains_to_compatible_values() {
        let problem = path_problem();
        let domains = path_domains();
        let assignment = Assignment::new().with(1, 1);

        let narrowed = forward_check(1, 1, &assignment, &domains, &problem).unwrap();

        // A loses 1 through `A != B`, C loses 1 through `B < C`.
        assert_eq!(narrowed[&0].iter().collect::<Vec<_>>(), vec![2]);
        assert_eq!(narrowed[&2].iter().collect::<Vec<_>>(), vec![2]);
        // The assigned variable's own domain is left alone.
        assert_eq!(narrowed[&1].iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn assigned_neighbors_are_not_revisited() {
        let problem = path_problem();
        let domains = path_domains();
        // A was assigned earlier in the branch; only C is open for pruning.
        let assignment = Assignment::new().with(0, 1).with(1, 1);

        let narrowed = forward_check(1, 1, &assignment, &domains, &problem).unwrap();

        assert_eq!(narrowed[&0].iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(narrowed[&2].iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn wipeout_reports_a_dead_branch() {
        let problem = path_problem();
        let domains = path_domains();
        // B = 2 empties C through `B < C`: no value in [1, 2] exceeds 2.
        let assignment = Assignment::new().with(1, 2);

        assert!(forward_check(1, 2, &assignment, &domains, &problem).is_none());
    }

    #[test]
    fn input_snapshot_is_never_modified() {
        let problem = path_problem();
        let domains = path_domains();

        let before = domains.clone();
        let _ = forward_check(1, 1, &Assignment::new().with(1, 1), &domains, &problem);
        let _ = forward_check(1, 2, &Assignment::new().with(1, 2), &domains, &problem);

        assert_eq!(domains, before);
    }

    #[test]
    fn sibling_branches_get_independent_snapshots() {
        let problem = path_problem();
        let domains = path_domains();

        let left = forward_check(1, 1, &Assignment::new().with(1, 1), &domains, &problem)
            .expect("B=1 leaves both neighbors non-empty");
        let right = forward_check(1, 2, &Assignment::new().with(1, 2), &domains, &problem);

        // The left branch pruned A down to [2]; the right branch died on C.
        // Neither observes the other's pruning and the base is untouched.
        assert_eq!(left[&0].iter().collect::<Vec<_>>(), vec![2]);
        assert!(right.is_none());
        assert_eq!(domains[&0].iter().collect::<Vec<_>>(), vec![1, 2]);
    }
}
