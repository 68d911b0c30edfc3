//! Arc-consistency propagation (the AC-3 algorithm).
//!
//! Propagation prunes the domain store until every remaining value in every
//! domain has at least one compatible partner across each constrained
//! neighbour, or proves unsatisfiability by emptying a domain. It is a
//! necessary, not sufficient, condition for a solution: on success the
//! search space has shrunk, but a search is still needed to find an actual
//! assignment.

use tracing::{debug, trace};

use crate::solver::{
    domain::Domains,
    graph::ConstraintGraph,
    stats::SearchStats,
    value::{DomainValue, VariableKey},
    work_list::WorkList,
};

/// Runs the AC-3 worklist to a fixpoint, mutating `domains` in place.
///
/// Returns `false` as soon as any domain becomes empty (the problem is
/// proven unsatisfiable), `true` once the worklist drains with every
/// domain non-empty. The final fixpoint does not depend on the order arcs
/// are revised in, only the amount of redundant work does.
pub fn enforce_arc_consistency<K: VariableKey, V: DomainValue>(
    graph: &ConstraintGraph<K, V>,
    domains: &mut Domains<K, V>,
    stats: &mut SearchStats,
) -> bool {
    let mut worklist = WorkList::new();
    for arc in graph.arcs() {
        worklist.push_back(arc.clone());
    }

    while let Some((x, y)) = worklist.pop_front() {
        stats.revisions += 1;

        if revise(graph, domains, &x, &y) {
            stats.prunings += 1;

            if domains.get(&x).unwrap().is_empty() {
                debug!(variable = ?x, "domain wiped out, problem is unsatisfiable");
                return false;
            }

            // The domain of `x` has shrunk, so any arc pointing at `x` may
            // have lost support and must be rechecked. The arc we came in
            // on is exempt: revising (y, x) against the values we just
            // removed cannot prune anything new.
            for arc in graph.arcs() {
                if arc.1 == x && arc.0 != y {
                    worklist.push_back(arc.clone());
                }
            }
        }
    }

    debug!("arc consistency fixpoint reached");
    true
}

/// Removes from `domains[x]` every value with no compatible partner in
/// `domains[y]` under the arc `(x, y)`. Returns `true` if anything was
/// removed.
fn revise<K: VariableKey, V: DomainValue>(
    graph: &ConstraintGraph<K, V>,
    domains: &mut Domains<K, V>,
    x: &K,
    y: &K,
) -> bool {
    let Some(allowed) = graph.allowed_pairs(x, y) else {
        return false;
    };

    let domain_y = domains.get(y).cloned().unwrap();
    let before = domains.get(x).unwrap().len();
    let revised = domains.get(x).unwrap().retain(|value_x| {
        domain_y
            .iter()
            .any(|value_y| allowed.contains(&(value_x.clone(), value_y.clone())))
    });

    if revised.len() < before {
        trace!(variable = ?x, removed = before - revised.len(), "revise pruned domain");
        domains.insert(x.clone(), revised);
        true
    } else {
        false
    }
}
