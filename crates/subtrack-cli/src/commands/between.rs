use anyhow::Result;
use owo_colors::OwoColorize;
use subtrack_core::recurrence::RecurrenceManager;

use crate::cli::BetweenCommand;
use crate::util::parse_date;
use crate::views;

pub fn between_dates(command: BetweenCommand) -> Result<()> {
    let start = parse_date(&command.from)?;
    let end = parse_date(&command.to)?;
    let anchor = match &command.anchor {
        Some(value) => parse_date(value)?,
        None => start,
    };

    let manager = RecurrenceManager::new(&command.rule, anchor)?;
    let occurrences = manager.generate_occurrences_between(start, end);

    if command.json {
        println!("{}", serde_json::to_string_pretty(&occurrences)?);
        return Ok(());
    }

    println!(
        "{} occurrence(s) between {} and {}",
        occurrences.len().to_string().green().bold(),
        start,
        end
    );
    if !occurrences.is_empty() {
        println!();
        views::table::display_occurrences(&occurrences);
    }
    Ok(())
}
