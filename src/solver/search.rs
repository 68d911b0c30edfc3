//! Chronological backtracking search over partial assignments.
//!
//! The search extends one variable at a time, checks the tentative
//! assignment against every constraint whose endpoints are both assigned,
//! and retracts on failure. It reads the current domains (reduced or not)
//! but never mutates them; the only mutable state is the search-local
//! assignment, which is discarded on failure and returned only when
//! complete.

use im::HashMap;
use tracing::debug;

use crate::solver::{
    domain::Domains,
    graph::ConstraintGraph,
    heuristics::variable::VariableSelectionHeuristic,
    stats::SearchStats,
    value::{DomainValue, VariableKey},
};

/// A mapping from variables to chosen values. Partial during search,
/// complete (one entry per variable) in a returned solution.
pub type Assignment<K, V> = HashMap<K, V>;

/// Runs a depth-first backtracking search for a complete, consistent
/// assignment. Returns `None` when the search space is exhausted without
/// finding one.
pub fn backtracking_search<K: VariableKey, V: DomainValue>(
    variables: &[K],
    domains: &Domains<K, V>,
    graph: &ConstraintGraph<K, V>,
    heuristic: &dyn VariableSelectionHeuristic<K, V>,
    stats: &mut SearchStats,
) -> Option<Assignment<K, V>> {
    debug!(variables = variables.len(), arcs = graph.len(), "starting backtracking search");

    let mut assignment = Assignment::new();
    if backtrack(variables, domains, graph, heuristic, &mut assignment, stats) {
        Some(assignment)
    } else {
        None
    }
}

fn backtrack<K: VariableKey, V: DomainValue>(
    variables: &[K],
    domains: &Domains<K, V>,
    graph: &ConstraintGraph<K, V>,
    heuristic: &dyn VariableSelectionHeuristic<K, V>,
    assignment: &mut Assignment<K, V>,
    stats: &mut SearchStats,
) -> bool {
    stats.nodes_visited += 1;

    // Every variable assigned: the assignment is a solution.
    if assignment.len() >= variables.len() {
        return true;
    }

    let Some(variable) = heuristic.select_variable(variables, domains, assignment) else {
        return true;
    };

    let domain = domains.get(&variable).unwrap().clone();

    for value in domain.iter() {
        assignment.insert(variable.clone(), value.clone());

        // Consistency is rechecked against all constraints, not just the
        // ones touching the newly assigned variable. Correct but
        // re-does work; an incremental check would be the first
        // optimization at larger scales.
        if is_consistent(graph, assignment)
            && backtrack(variables, domains, graph, heuristic, assignment, stats)
        {
            return true;
        }

        assignment.remove(&variable);
        stats.backtracks += 1;
    }

    false
}

/// Checks the partial assignment against every constraint whose both
/// endpoints are assigned.
pub fn is_consistent<K: VariableKey, V: DomainValue>(
    graph: &ConstraintGraph<K, V>,
    assignment: &Assignment<K, V>,
) -> bool {
    for ((a, b), allowed) in graph.iter() {
        if let (Some(value_a), Some(value_b)) = (assignment.get(a), assignment.get(b)) {
            if !allowed.contains(&(value_a.clone(), value_b.clone())) {
                return false;
            }
        }
    }
    true
}
