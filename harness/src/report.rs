//! Serializable run reports and the comparison-table renderer.

use serde::{Deserialize, Serialize};

/// Outcome summary for one strategy run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyReportV1 {
    /// Machine name (`"breadth"`, .., `"heuristic3"`).
    pub strategy: String,
    /// Human label for the table.
    pub label: String,
    /// Whether a goal was reached (false only on frontier exhaustion).
    pub solved: bool,
    /// Rendering of the goal table, e.g. `"[1, 2, 3]"`.
    pub goal_table: Option<String>,
    /// Open-set size at termination.
    pub open_size: usize,
    /// Closed-set size at termination.
    pub closed_size: usize,
    /// Wall-clock duration of the `run` call, in milliseconds.
    pub elapsed_ms: u64,
    /// Goal `g` (informed strategies only).
    pub g_cost: Option<u64>,
    /// Goal `h` (informed strategies only).
    pub h_cost: Option<u64>,
    /// Goal `f = g + h` (informed strategies only).
    pub f_cost: Option<u64>,
    /// Flips on the reconstructed root-to-goal path.
    pub path_len: Option<usize>,
}

/// One full comparison run: every strategy against the same root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReportV1 {
    /// Permutation size.
    pub size: usize,
    /// Seed used for the root shuffle and the Random strategy.
    pub seed: u64,
    /// Rendering of the shared root table.
    pub root_table: String,
    /// Per-strategy summaries, in [`flipsort_search::Strategy::ALL`] order.
    pub strategies: Vec<StrategyReportV1>,
}

/// Column widths for the fixed-width comparison table.
const COLS: [usize; 8] = [15, 30, 12, 12, 12, 8, 8, 8];

fn push_row(out: &mut String, cells: &[String; 8]) {
    for (cell, width) in cells.iter().zip(COLS) {
        out.push_str(&format!("{cell:<width$} "));
    }
    // Trailing pad spaces carry no information.
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

fn optional(value: Option<u64>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

/// Render the comparison table the driver prints.
///
/// Columns: Method, Sorted Table, Open Size, Closed Size, time (ms), then
/// g/h/f for the informed strategies.
#[must_use]
pub fn render_table(report: &RunReportV1) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Initial table: {} (size {}, seed {})\n\n",
        report.root_table, report.size, report.seed
    ));
    push_row(
        &mut out,
        &[
            "Method".into(),
            "Sorted Table".into(),
            "Open Size".into(),
            "Closed Size".into(),
            "time (ms)".into(),
            "g".into(),
            "h".into(),
            "f".into(),
        ],
    );
    out.push_str(&"-".repeat(COLS.iter().sum::<usize>() + COLS.len() - 1));
    out.push('\n');
    for row in &report.strategies {
        push_row(
            &mut out,
            &[
                row.label.clone(),
                row.goal_table.clone().unwrap_or_else(|| "(no goal)".into()),
                row.open_size.to_string(),
                row.closed_size.to_string(),
                row.elapsed_ms.to_string(),
                optional(row.g_cost),
                optional(row.h_cost),
                optional(row.f_cost),
            ],
        );
    }
    out
}
