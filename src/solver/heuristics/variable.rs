//! Defines a collection of standard heuristics for selecting which variable
//! to branch on next during the search process.

use crate::solver::{
    domain::Domains,
    search::Assignment,
    value::{DomainValue, VariableKey},
};

/// A trait for variable-selection heuristics.
///
/// Implementors of this trait define a strategy for choosing which
/// unassigned variable the solver should branch on next. A good heuristic
/// can dramatically improve solver performance, but any implementation must
/// return `None` exactly when every variable is assigned.
pub trait VariableSelectionHeuristic<K: VariableKey, V: DomainValue> {
    /// Selects the next variable to be assigned.
    ///
    /// # Arguments
    ///
    /// * `variables`: All variables of the problem, in declaration order.
    /// * `domains`: The current domain of every variable.
    /// * `assignment`: The partial assignment built so far.
    ///
    /// # Returns
    ///
    /// * `Some(variable)` of the chosen variable, if any is unassigned.
    /// * `None` if all variables are already assigned.
    fn select_variable(
        &self,
        variables: &[K],
        domains: &Domains<K, V>,
        assignment: &Assignment<K, V>,
    ) -> Option<K>;
}

/// The default policy: the first unassigned variable in declaration order.
///
/// Deterministic, and the order callers declared their variables in becomes
/// the search order.
pub struct SelectFirstHeuristic;

impl<K: VariableKey, V: DomainValue> VariableSelectionHeuristic<K, V> for SelectFirstHeuristic {
    fn select_variable(
        &self,
        variables: &[K],
        _domains: &Domains<K, V>,
        assignment: &Assignment<K, V>,
    ) -> Option<K> {
        variables
            .iter()
            .find(|var| !assignment.contains_key(*var))
            .cloned()
    }
}

/// A heuristic that selects the unassigned variable with the Minimum
/// Remaining Values in its domain.
///
/// This is a "fail-first" strategy that prioritizes the most constrained
/// variable, which can prune the search space earlier. Ties are broken by
/// declaration order to keep the search deterministic.
pub struct MinimumRemainingValuesHeuristic;

impl<K: VariableKey, V: DomainValue> VariableSelectionHeuristic<K, V>
    for MinimumRemainingValuesHeuristic
{
    fn select_variable(
        &self,
        variables: &[K],
        domains: &Domains<K, V>,
        assignment: &Assignment<K, V>,
    ) -> Option<K> {
        variables
            .iter()
            .enumerate()
            .filter(|(_, var)| !assignment.contains_key(*var))
            .min_by_key(|(index, var)| {
                let len = domains.get(*var).map(|d| d.len()).unwrap_or(0);
                (len, *index)
            })
            .map(|(_, var)| var.clone())
    }
}
