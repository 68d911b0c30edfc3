use im::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::solver::value::{DomainValue, VariableKey};

/// A map from each variable to its current domain of candidate values.
pub type Domains<K, V> = HashMap<K, Domain<V>>;

/// The set of candidate values a single variable may still take.
///
/// A domain is populated once, at problem construction, and only ever
/// shrinks afterwards: arc-consistency propagation prunes values from it,
/// while the backtracking search only iterates it. Backed by an
/// `im::HashSet`, so cloning is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain<V: DomainValue>(pub HashSet<V>);

impl<V: DomainValue> Domain<V> {
    pub fn new(values: HashSet<V>) -> Self {
        Self(values)
    }

    /// Returns the number of candidate values in the domain.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the domain contains no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the domain contains exactly one value.
    pub fn is_singleton(&self) -> bool {
        self.len() == 1
    }

    /// If the domain is a singleton, returns the single value. Otherwise, `None`.
    pub fn get_singleton_value(&self) -> Option<V> {
        if self.len() == 1 {
            self.0.iter().next().cloned()
        } else {
            None
        }
    }

    pub fn contains(&self, value: &V) -> bool {
        self.0.contains(value)
    }

    /// Returns an iterator over the values in the domain.
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.0.iter()
    }

    /// Creates a new domain containing only the values that satisfy the predicate.
    pub fn retain(&self, f: impl Fn(&V) -> bool) -> Self {
        Self(self.0.iter().filter(|v| f(v)).cloned().collect())
    }
}

impl<V: DomainValue> FromIterator<V> for Domain<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Builds a domain map where every variable shares the same initial domain.
///
/// Convenient for problems like colouring or a blank puzzle grid where each
/// variable starts from the full candidate set.
pub fn uniform_domains<K: VariableKey, V: DomainValue>(
    variables: &[K],
    values: impl IntoIterator<Item = V>,
) -> Domains<K, V> {
    let domain: Domain<V> = values.into_iter().collect();
    variables
        .iter()
        .map(|var| (var.clone(), domain.clone()))
        .collect()
}
