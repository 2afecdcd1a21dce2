use anyhow::Result;
use owo_colors::OwoColorize;
use subtrack_core::describe::describe_detailed;
use subtrack_core::projection::projected_spend;

use crate::cli::SpendCommand;
use crate::util::{format_cents, parse_amount_cents, parse_date};

pub fn project_spend(command: SpendCommand) -> Result<()> {
    let start = parse_date(&command.from)?;
    let end = parse_date(&command.to)?;
    let anchor = command.anchor.as_deref().map(parse_date).transpose()?;
    let amount_cents = parse_amount_cents(&command.amount)?;

    let projection = projected_spend(&command.rule, amount_cents, start, end, anchor);

    println!("{}", "Spend Projection".blue().bold());
    println!("Rule: {}", describe_detailed(&command.rule).cyan());
    println!("Window: {} to {}", start, end);
    println!("Renewals: {}", projection.occurrences);
    println!(
        "Total: {}",
        format_cents(projection.total_cents).green().bold()
    );
    Ok(())
}
