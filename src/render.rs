use analytics::StatisticsReport;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};
use history::HistoryLog;

/// `"<label> = <result>"` with a fixed number of decimals.
pub fn format_result(label: &str, result: f64, precision: usize) -> String {
    format!("{label} = {result:.precision$}")
}

/// Statistics as a two-column table.
pub fn statistics_table(report: &StatisticsReport, precision: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Statistic", "Value"]);

    let mut count = Row::new();
    count.add_cell(Cell::new("Count"));
    count.add_cell(Cell::new(report.count).set_alignment(CellAlignment::Right));
    table.add_row(count);

    for (name, value) in report.rows() {
        let mut row = Row::new();
        row.add_cell(Cell::new(name));
        row.add_cell(Cell::new(format!("{value:.precision$}")).set_alignment(CellAlignment::Right));
        table.add_row(row);
    }
    table
}

/// The most recent `limit` entries, newest first, numbered by their position in the
/// log (1-based).
pub fn history_table(log: &HistoryLog, limit: usize, precision: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Calculation", "Result", "Time"]);

    let first_shown = log.len().saturating_sub(limit);
    for (offset, entry) in log.recent(limit).enumerate().rev() {
        let mut row = Row::new();
        row.add_cell(Cell::new(first_shown + offset + 1).set_alignment(CellAlignment::Right));
        row.add_cell(Cell::new(entry.label()));
        row.add_cell(
            Cell::new(format!("{:.precision$}", entry.result()))
                .set_alignment(CellAlignment::Right),
        );
        row.add_cell(Cell::new(entry.created_at().format("%Y-%m-%d %H:%M:%S")));
        table.add_row(row);
    }
    table
}

/// The line printed under the history table.
pub fn history_footer(log: &HistoryLog, limit: usize) -> String {
    if log.len() > limit {
        format!("(Showing last {limit} of {} entries)", log.len())
    } else {
        format!("(Total entries: {})", log.len())
    }
}
