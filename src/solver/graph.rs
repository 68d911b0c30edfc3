use im::{HashMap, HashSet};

use crate::{
    error::{Result, SolverError},
    solver::{
        domain::Domains,
        value::{DomainValue, VariableKey},
    },
};

/// The set of value pairs a single arc permits.
pub type AllowedPairs<V> = HashSet<(V, V)>;

/// The binary "must differ" constraints of a problem, keyed by directed arc.
///
/// The graph is derived once, at problem construction, and never changes
/// afterwards: only the domain store shrinks. For every declared edge
/// `(a, b)` the graph holds the set of value pairs drawn from the two
/// domains whose components differ, recorded in both value orientations.
/// Both directed arc keys `(a, b)` and `(b, a)` are stored, so propagation
/// revises each logical constraint in both directions even when the caller
/// supplied only one direction per pair (as [`all_different`] does).
#[derive(Clone, Debug)]
pub struct ConstraintGraph<K: VariableKey, V: DomainValue> {
    arcs: HashMap<(K, K), AllowedPairs<V>>,
}

impl<K: VariableKey, V: DomainValue> ConstraintGraph<K, V> {
    /// Builds the constraint graph from the initial domains and edge list.
    ///
    /// Duplicate edges recompute an identical pair set and overwrite it
    /// harmlessly. An edge naming a variable with no domain entry is
    /// rejected with [`SolverError::UnknownVariable`].
    pub(crate) fn build(domains: &Domains<K, V>, edges: &[(K, K)]) -> Result<Self> {
        let mut arcs = HashMap::new();

        for (a, b) in edges {
            let domain_a = domains
                .get(a)
                .ok_or_else(|| SolverError::UnknownVariable(format!("{a:?}")))?;
            let domain_b = domains
                .get(b)
                .ok_or_else(|| SolverError::UnknownVariable(format!("{b:?}")))?;

            let mut allowed = AllowedPairs::new();
            for value_a in domain_a.iter() {
                for value_b in domain_b.iter() {
                    if value_a != value_b {
                        allowed.insert((value_a.clone(), value_b.clone()));
                        allowed.insert((value_b.clone(), value_a.clone()));
                    }
                }
            }

            // The pair set is symmetric, so both directed arcs share it.
            arcs.insert((a.clone(), b.clone()), allowed.clone());
            arcs.insert((b.clone(), a.clone()), allowed);
        }

        Ok(Self { arcs })
    }

    /// Returns an iterator over every stored directed arc key.
    pub fn arcs(&self) -> impl Iterator<Item = &(K, K)> + '_ {
        self.arcs.keys()
    }

    /// Returns an iterator over every arc key together with its allowed pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&(K, K), &AllowedPairs<V>)> + '_ {
        self.arcs.iter()
    }

    /// The allowed pairs for a directed arc, if one is stored.
    pub fn allowed_pairs(&self, from: &K, to: &K) -> Option<&AllowedPairs<V>> {
        self.arcs.get(&(from.clone(), to.clone()))
    }

    /// Number of stored directed arcs (two per declared edge).
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

/// Returns the edges interconnecting all of the input variables.
///
/// This is the standard encoding of an "all different" group (e.g. a row of
/// a puzzle grid): for `N` variables it yields the `N * (N - 1) / 2`
/// unordered pairs, each emitted once, suitable for direct inclusion in the
/// edge list passed to [`Csp::new`](crate::solver::csp::Csp::new).
pub fn all_different<K: VariableKey>(variables: &[K]) -> Vec<(K, K)> {
    let mut edges = Vec::with_capacity(variables.len() * (variables.len().saturating_sub(1)) / 2);
    for i in 0..variables.len() {
        for j in (i + 1)..variables.len() {
            edges.push((variables[i].clone(), variables[j].clone()));
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet as StdHashSet;

    use pretty_assertions::assert_eq;

    use super::{all_different, ConstraintGraph};
    use crate::solver::domain::{Domain, Domains};

    fn two_variable_domains() -> Domains<&'static str, i64> {
        let mut domains = Domains::new();
        domains.insert("x", Domain::from_iter([1, 2]));
        domains.insert("y", Domain::from_iter([1]));
        domains
    }

    #[test]
    fn construction_stores_both_value_orientations_under_each_arc() {
        let domains = two_variable_domains();
        let graph = ConstraintGraph::build(&domains, &[("x", "y")]).unwrap();

        let allowed = graph.allowed_pairs(&"x", &"y").unwrap();
        let expected: im::HashSet<(i64, i64)> = [(2, 1), (1, 2)].into_iter().collect();
        assert_eq!(allowed, &expected);
    }

    #[test]
    fn construction_stores_the_reverse_arc_key() {
        let domains = two_variable_domains();
        let graph = ConstraintGraph::build(&domains, &[("x", "y")]).unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(
            graph.allowed_pairs(&"y", &"x"),
            graph.allowed_pairs(&"x", &"y")
        );
    }

    #[test]
    fn duplicate_edges_are_harmless() {
        let domains = two_variable_domains();
        let once = ConstraintGraph::build(&domains, &[("x", "y")]).unwrap();
        let twice = ConstraintGraph::build(&domains, &[("x", "y"), ("x", "y")]).unwrap();

        assert_eq!(once.len(), twice.len());
        assert_eq!(
            once.allowed_pairs(&"x", &"y"),
            twice.allowed_pairs(&"x", &"y")
        );
    }

    #[test]
    fn an_edge_naming_an_unknown_variable_is_rejected() {
        let domains = two_variable_domains();
        let result = ConstraintGraph::build(&domains, &[("x", "z")]);
        assert!(result.is_err());
    }

    #[test]
    fn all_different_emits_each_unordered_pair_once() {
        let variables = ["a", "b", "c", "d", "e"];
        let edges = all_different(&variables);

        assert_eq!(edges.len(), 10);

        let unordered: StdHashSet<(&str, &str)> = edges
            .iter()
            .map(|(a, b)| if a < b { (*a, *b) } else { (*b, *a) })
            .collect();
        assert_eq!(unordered.len(), 10);
    }

    #[test]
    fn all_different_of_fewer_than_two_variables_is_empty() {
        assert!(all_different::<&str>(&[]).is_empty());
        assert!(all_different(&["solo"]).is_empty());
    }
}
