use chrono::{Local, NaiveDate};
use chrono_humanize::HumanTime;
use comfy_table::{Cell, Row, Table};

/// Renders occurrence dates in a table with relative-time hints.
pub fn display_occurrences(occurrences: &[NaiveDate]) {
    if occurrences.is_empty() {
        println!("No occurrences found.");
        return;
    }

    let today = Local::now().date_naive();
    let mut table = Table::new();
    table.set_header(vec!["#", "Date", "Weekday", "When"]);

    for (i, date) in occurrences.iter().enumerate() {
        let mut row = Row::new();
        row.add_cell(Cell::new((i + 1).to_string()));
        row.add_cell(Cell::new(date.format("%Y-%m-%d").to_string()));
        row.add_cell(Cell::new(date.format("%A").to_string()));
        row.add_cell(Cell::new(HumanTime::from(*date - today).to_string()));
        table.add_row(row);
    }

    println!("{table}");
}
