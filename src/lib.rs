//! Arcsolve is a generic binary-constraint satisfaction solver.
//!
//! A problem is described by three inputs: an ordered list of variables, a
//! mapping from each variable to its finite domain of candidate values, and
//! a list of edges naming variable pairs that must take differing values.
//! The solver reduces the domains with arc-consistency propagation (AC-3)
//! and finds a complete assignment with chronological backtracking search.
//!
//! # Core Concepts
//!
//! - **[`Csp`]**: the problem instance, owning the variables, the mutable
//!   domain store, and the constraint graph derived at construction.
//! - **[`Csp::ac3`]**: worklist propagation to an arc-consistent fixpoint.
//!   Returns `false` when a domain empties — the problem is proven
//!   unsatisfiable.
//! - **[`Csp::backtracking_search`]**: depth-first search over partial
//!   assignments, returning a complete assignment or `None`.
//! - **[`all_different`]**: expands a group of pairwise-distinct variables
//!   (a puzzle row, column, or box) into the corresponding edge list.
//!
//! Unsatisfiability is a normal outcome, reported by value; the only error
//! path is malformed input at construction time.
//!
//! # Example: A Two-Variable Colouring
//!
//! ```
//! use arcsolve::solver::csp::Csp;
//! use arcsolve::solver::domain::uniform_domains;
//!
//! let variables = vec!["x", "y"];
//! let domains = uniform_domains(&variables, ["red", "blue"]);
//! let edges = vec![("x", "y")];
//!
//! let mut csp = Csp::new(variables, domains, &edges).unwrap();
//! assert!(csp.ac3());
//!
//! let solution = csp.backtracking_search().unwrap();
//! assert_ne!(solution.get("x"), solution.get("y"));
//! ```
//!
//! [`Csp`]: solver::csp::Csp
//! [`Csp::ac3`]: solver::csp::Csp::ac3
//! [`Csp::backtracking_search`]: solver::csp::Csp::backtracking_search
//! [`all_different`]: solver::graph::all_different
pub mod error;
pub mod solver;
