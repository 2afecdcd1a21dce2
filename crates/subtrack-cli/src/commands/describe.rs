use anyhow::Result;
use owo_colors::OwoColorize;
use subtrack_core::describe::{describe, describe_detailed};

use crate::cli::DescribeCommand;
use crate::config::Config;

pub fn describe_rule(command: DescribeCommand, config: &Config) -> Result<()> {
    let text = if command.detailed || config.preview.detailed {
        describe_detailed(&command.rule)
    } else {
        describe(&command.rule)
    };
    println!("{}", text.cyan());
    Ok(())
}
