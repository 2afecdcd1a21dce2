use clap::Parser;
use owo_colors::{OwoColorize, Style};
use subtrack_core::error::RuleError;

mod cli;
mod commands;
mod config;
mod util;
mod views;

fn main() {
    let config = config::Config::new().unwrap_or_default();
    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Build(command) => commands::build::build_rule(command),
        cli::Commands::Describe(command) => commands::describe::describe_rule(command, &config),
        cli::Commands::Next(command) => commands::next::next_occurrence(command),
        cli::Commands::Preview(command) => commands::preview::preview_rule(command, &config),
        cli::Commands::Between(command) => commands::between::between_dates(command),
        cli::Commands::Spend(command) => commands::spend::project_spend(command),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(rule_error) = err.downcast_ref::<RuleError>() {
        match rule_error {
            RuleError::InvalidRule(_) => {
                eprintln!("{} {}", "Error:".style(error_style), rule_error);
            }
            RuleError::InvalidInput(detail) => {
                eprintln!(
                    "{} Invalid input: {}",
                    "Error:".style(error_style),
                    detail.yellow()
                );
            }
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
