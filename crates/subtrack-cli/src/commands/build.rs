use anyhow::{anyhow, Result};
use chrono::Weekday;
use owo_colors::OwoColorize;
use subtrack_core::models::{Frequency, RecurrenceRule, RulePattern};
use subtrack_core::validate::validate;

use crate::cli::BuildCommand;

pub fn build_rule(command: BuildCommand) -> Result<()> {
    let rule = rule_from_command(&command)?;

    let errors = validate(&rule);
    if !errors.is_empty() {
        eprintln!("{}", "Invalid rule configuration:".red().bold());
        for error in &errors {
            eprintln!("  - {error}");
        }
        return Err(anyhow!("rule configuration failed validation"));
    }

    println!("{}", rule.to_string().green());
    println!("{}", rule.summary_detailed());
    Ok(())
}

fn rule_from_command(command: &BuildCommand) -> Result<RecurrenceRule> {
    if let Some(preset) = command.preset {
        let mut rule = preset.to_rule();
        rule.interval = command.interval;
        return Ok(rule);
    }

    let frequency: Frequency = command
        .freq
        .ok_or_else(|| anyhow!("either --preset or --freq is required"))?
        .into();
    let mut rule = RecurrenceRule::new(frequency);
    rule.interval = command.interval;
    if let Some(month) = command.month {
        rule.by_month = vec![month];
    }
    rule.pattern = match (command.nth, command.weekday) {
        (Some(nth), Some(weekday)) => Some(RulePattern::NthWeekday {
            position: nth.into(),
            weekday: weekday.into(),
        }),
        _ if !command.day.is_empty() => Some(RulePattern::MonthDays(command.day.clone())),
        _ => command
            .on
            .as_deref()
            .map(parse_weekday_list)
            .transpose()?
            .map(RulePattern::Weekdays),
    };
    Ok(rule)
}

fn parse_weekday_list(list: &str) -> Result<Vec<Weekday>> {
    list.split(',')
        .map(|token| match token.trim().to_ascii_lowercase().as_str() {
            "mon" | "monday" => Ok(Weekday::Mon),
            "tue" | "tuesday" => Ok(Weekday::Tue),
            "wed" | "wednesday" => Ok(Weekday::Wed),
            "thu" | "thursday" => Ok(Weekday::Thu),
            "fri" | "friday" => Ok(Weekday::Fri),
            "sat" | "saturday" => Ok(Weekday::Sat),
            "sun" | "sunday" => Ok(Weekday::Sun),
            other => Err(anyhow!("unknown weekday '{other}'")),
        })
        .collect()
}
