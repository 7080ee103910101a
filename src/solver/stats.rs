use prettytable::{Cell, Row, Table};

use crate::solver::engine::SearchStats;

/// Renders the search counters as a console table.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Domain wipeouts"),
        Cell::new(&stats.wipeouts.to_string()),
    ]));
    table.to_string()
}
