use anyhow::Result;
use owo_colors::OwoColorize;
use subtrack_core::describe::describe_detailed;
use subtrack_core::recurrence::RecurrenceManager;

use crate::cli::PreviewCommand;
use crate::config::Config;
use crate::util::{parse_date, parse_date_or_today};
use crate::views;

pub fn preview_rule(command: PreviewCommand, config: &Config) -> Result<()> {
    let from = parse_date_or_today(command.from.as_deref())?;
    let anchor = match &command.anchor {
        Some(value) => parse_date(value)?,
        None => from,
    };
    let count = command.count.unwrap_or(config.preview.count);

    let manager = RecurrenceManager::new(&command.rule, anchor)?;
    let occurrences = manager.preview_occurrences(from, count);

    if command.json {
        println!("{}", serde_json::to_string_pretty(&occurrences)?);
        return Ok(());
    }

    if occurrences.is_empty() {
        println!("No upcoming occurrences");
        return Ok(());
    }

    println!(
        "{} (next {} occurrences)",
        "Rule Preview".blue().bold(),
        occurrences.len()
    );
    println!("Rule: {}", describe_detailed(&command.rule).cyan());
    println!();
    views::table::display_occurrences(&occurrences);
    Ok(())
}
