use tracing::debug;

use crate::{
    error::{Result, SolverError},
    solver::{
        domain::Domains,
        graph::ConstraintGraph,
        heuristics::variable::{SelectFirstHeuristic, VariableSelectionHeuristic},
        propagation, search,
        search::Assignment,
        stats::SearchStats,
        value::{DomainValue, VariableKey},
    },
};

/// A binary-constraint satisfaction problem over "must differ" relations.
///
/// A `Csp` owns the three pieces of state for one problem instance: the
/// declared variables (whose order is the default search order), the
/// mutable domain store, and the immutable constraint graph derived from
/// the edge list at construction. Higher-level encoders (a puzzle loader,
/// a map-colouring frontend) build one of these, optionally call [`ac3`]
/// to shrink the domains, then call [`backtracking_search`] for a
/// solution.
///
/// [`ac3`]: Csp::ac3
/// [`backtracking_search`]: Csp::backtracking_search
#[derive(Clone, Debug)]
pub struct Csp<K: VariableKey, V: DomainValue> {
    variables: Vec<K>,
    domains: Domains<K, V>,
    graph: ConstraintGraph<K, V>,
}

impl<K: VariableKey, V: DomainValue> Csp<K, V> {
    /// Constructs a problem instance from variables, their domains, and the
    /// edges naming "must differ" pairs.
    ///
    /// Construction fails fast on malformed input: every declared variable
    /// must have a domain entry, and every variable referenced by an edge
    /// must be a key of `domains`.
    pub fn new(variables: Vec<K>, domains: Domains<K, V>, edges: &[(K, K)]) -> Result<Self> {
        for variable in &variables {
            if !domains.contains_key(variable) {
                return Err(SolverError::MissingDomain(format!("{variable:?}")).into());
            }
        }

        let graph = ConstraintGraph::build(&domains, edges)?;
        debug!(
            variables = variables.len(),
            arcs = graph.len(),
            "constructed constraint graph"
        );

        Ok(Self {
            variables,
            domains,
            graph,
        })
    }

    /// The declared variables, in the order they were supplied.
    pub fn variables(&self) -> &[K] {
        &self.variables
    }

    /// The current domain of every variable. Reflects any pruning done by
    /// [`ac3`](Csp::ac3).
    pub fn domains(&self) -> &Domains<K, V> {
        &self.domains
    }

    /// The constraint graph derived at construction.
    pub fn graph(&self) -> &ConstraintGraph<K, V> {
        &self.graph
    }

    /// Reduces every domain to arc consistency with the AC-3 algorithm.
    ///
    /// Meant to be run prior to [`backtracking_search`] to shrink the
    /// search space. Domains are pruned in place regardless of the
    /// outcome.
    ///
    /// # Returns
    ///
    /// * `true` if every domain remains non-empty at the fixpoint. This
    ///   does not prove a solution exists.
    /// * `false` if some domain became empty: the problem is proven
    ///   unsatisfiable. This is a normal outcome, not an error.
    ///
    /// [`backtracking_search`]: Csp::backtracking_search
    pub fn ac3(&mut self) -> bool {
        let mut stats = SearchStats::default();
        self.ac3_with_stats(&mut stats)
    }

    /// [`ac3`](Csp::ac3), accumulating revision counters into `stats`.
    pub fn ac3_with_stats(&mut self, stats: &mut SearchStats) -> bool {
        propagation::enforce_arc_consistency(&self.graph, &mut self.domains, stats)
    }

    /// Searches for a complete assignment consistent with every constraint,
    /// branching on the first unassigned variable in declaration order.
    ///
    /// Works on the current domains whether or not [`ac3`](Csp::ac3) was
    /// run first, and never mutates them. Returns `None` when the search
    /// space is exhausted without a solution; a returned assignment always
    /// covers every variable.
    pub fn backtracking_search(&self) -> Option<Assignment<K, V>> {
        let mut stats = SearchStats::default();
        self.backtracking_search_with(&SelectFirstHeuristic, &mut stats)
    }

    /// [`backtracking_search`](Csp::backtracking_search) with an explicit
    /// variable-selection heuristic and stats accumulation.
    pub fn backtracking_search_with(
        &self,
        heuristic: &dyn VariableSelectionHeuristic<K, V>,
        stats: &mut SearchStats,
    ) -> Option<Assignment<K, V>> {
        search::backtracking_search(&self.variables, &self.domains, &self.graph, heuristic, stats)
    }

    /// Propagates to arc consistency, then searches.
    ///
    /// Equivalent to [`ac3`](Csp::ac3) followed by
    /// [`backtracking_search`](Csp::backtracking_search), short-circuiting
    /// to `None` when propagation already proves unsatisfiability. Returns
    /// the outcome together with the accumulated statistics.
    pub fn solve(&mut self) -> (Option<Assignment<K, V>>, SearchStats) {
        let mut stats = SearchStats::default();

        if !self.ac3_with_stats(&mut stats) {
            return (None, stats);
        }

        let solution = self.backtracking_search_with(&SelectFirstHeuristic, &mut stats);
        (solution, stats)
    }
}
