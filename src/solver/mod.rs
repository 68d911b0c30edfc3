pub mod csp;
pub mod domain;
pub mod graph;
pub mod heuristics;
pub mod propagation;
pub mod search;
pub mod stats;
pub mod value;
pub mod work_list;
