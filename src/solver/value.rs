/// The base trait for any type that can identify a variable.
///
/// A variable key names a decision slot in the problem. It must be cloneable,
/// debuggable, equatable, and hashable. This is a marker trait, so any type
/// that satisfies these bounds implements `VariableKey` — strings, integers,
/// and small enums all qualify.
pub trait VariableKey: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> VariableKey for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}

/// The base trait for any value that can appear in a variable's domain.
///
/// This establishes the minimum requirements for a value: it must be
/// cloneable, debuggable, equatable, and hashable. This is a marker trait,
/// so any type that satisfies these bounds implements `DomainValue`.
pub trait DomainValue: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> DomainValue for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
