use anyhow::Result;
use owo_colors::OwoColorize;
use subtrack_core::recurrence::RecurrenceManager;

use crate::cli::NextCommand;
use crate::util::{parse_date, parse_date_or_today};

pub fn next_occurrence(command: NextCommand) -> Result<()> {
    let from = parse_date_or_today(command.from.as_deref())?;
    let anchor = match &command.anchor {
        Some(value) => parse_date(value)?,
        None => from,
    };

    let manager = RecurrenceManager::new(&command.rule, anchor)?;
    match manager.next_occurrence_from(from) {
        Some(date) => println!("{}", date.format("%Y-%m-%d (%A)").to_string().green()),
        None => println!("No upcoming occurrences"),
    }
    Ok(())
}
