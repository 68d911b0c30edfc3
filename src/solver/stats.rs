use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

/// Counters accumulated across propagation and search.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited by the backtracking search, including the root.
    pub nodes_visited: u64,
    /// Candidate values retracted after a failed tentative extension.
    pub backtracks: u64,
    /// Arc revisions attempted by the propagation engine.
    pub revisions: u64,
    /// Arc revisions that actually pruned at least one value.
    pub prunings: u64,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Nodes Visited"),
        Cell::new("Backtracks"),
        Cell::new("Revise Calls"),
        Cell::new("Prunings"),
    ]));
    table.add_row(Row::new(vec![
        Cell::new(&stats.nodes_visited.to_string()),
        Cell::new(&stats.backtracks.to_string()),
        Cell::new(&stats.revisions.to_string()),
        Cell::new(&stats.prunings.to_string()),
    ]));

    table.to_string()
}
