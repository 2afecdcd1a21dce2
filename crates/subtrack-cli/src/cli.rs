use chrono::Weekday;
use clap::{Parser, Subcommand, ValueEnum};
use subtrack_core::models::{Frequency, RecurrenceRule, RulePattern, SetPosition};

/// Build, describe, and preview subscription recurrence rules
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build a rule string from options
    Build(BuildCommand),
    /// Describe a rule in plain language
    Describe(DescribeCommand),
    /// Show the next occurrence of a rule
    Next(NextCommand),
    /// Show the next N occurrences of a rule
    Preview(PreviewCommand),
    /// List occurrences between two dates
    Between(BetweenCommand),
    /// Project spend for a rule over a date range
    Spend(SpendCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct BuildCommand {
    /// Shortcut pattern instead of individual options
    #[clap(
        long,
        value_enum,
        conflicts_with_all = ["freq", "on", "day", "nth", "weekday", "month"]
    )]
    pub preset: Option<RulePreset>,
    /// Rule frequency
    #[clap(long, value_enum)]
    pub freq: Option<FrequencyArg>,
    /// Repeat every N frequency units
    #[clap(long, default_value = "1")]
    pub interval: u32,
    /// Days of week for weekly rules (mon,tue,wed,thu,fri,sat,sun)
    #[clap(long, help = "Days of week (mon,tue,wed,thu,fri,sat,sun)")]
    pub on: Option<String>,
    /// Days of month (1-31, negative counts from the end)
    #[clap(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub day: Vec<i32>,
    /// Positional pattern (first, second, third, fourth, last)
    #[clap(long, value_enum, requires = "weekday")]
    pub nth: Option<PositionArg>,
    /// Weekday for the positional pattern
    #[clap(long, value_enum, requires = "nth")]
    pub weekday: Option<WeekdayArg>,
    /// Month for yearly rules (1-12)
    #[clap(long)]
    pub month: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct DescribeCommand {
    /// The rule string (RFC 5545 RRULE subset)
    pub rule: String,
    /// Include ordinal detail in the description
    #[clap(long, short)]
    pub detailed: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct NextCommand {
    /// The rule string
    pub rule: String,
    /// Search from this date (YYYY-MM-DD, defaults to today)
    #[clap(long)]
    pub from: Option<String>,
    /// Subscription start date pinning the series phase
    #[clap(long)]
    pub anchor: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PreviewCommand {
    /// The rule string
    pub rule: String,
    /// Number of occurrences to show
    #[clap(long, short)]
    pub count: Option<usize>,
    /// Start date for the preview (YYYY-MM-DD, defaults to today)
    #[clap(long)]
    pub from: Option<String>,
    /// Subscription start date pinning the series phase
    #[clap(long)]
    pub anchor: Option<String>,
    /// Emit the occurrences as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct BetweenCommand {
    /// The rule string
    pub rule: String,
    /// Window start (YYYY-MM-DD)
    #[clap(long)]
    pub from: String,
    /// Window end, inclusive (YYYY-MM-DD)
    #[clap(long)]
    pub to: String,
    /// Subscription start date pinning the series phase
    #[clap(long)]
    pub anchor: Option<String>,
    /// Emit the occurrences as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SpendCommand {
    /// The rule string
    pub rule: String,
    /// Per-renewal amount, e.g. '9.99'
    #[clap(long)]
    pub amount: String,
    /// Window start (YYYY-MM-DD)
    #[clap(long)]
    pub from: String,
    /// Window end, inclusive (YYYY-MM-DD)
    #[clap(long)]
    pub to: String,
    /// Subscription start date pinning the series phase
    #[clap(long)]
    pub anchor: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyArg {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl From<FrequencyArg> for Frequency {
    fn from(arg: FrequencyArg) -> Self {
        match arg {
            FrequencyArg::Daily => Frequency::Daily,
            FrequencyArg::Weekly => Frequency::Weekly,
            FrequencyArg::Monthly => Frequency::Monthly,
            FrequencyArg::Yearly => Frequency::Yearly,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionArg {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl From<PositionArg> for SetPosition {
    fn from(arg: PositionArg) -> Self {
        match arg {
            PositionArg::First => SetPosition::First,
            PositionArg::Second => SetPosition::Second,
            PositionArg::Third => SetPosition::Third,
            PositionArg::Fourth => SetPosition::Fourth,
            PositionArg::Last => SetPosition::Last,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayArg {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl From<WeekdayArg> for Weekday {
    fn from(arg: WeekdayArg) -> Self {
        match arg {
            WeekdayArg::Mon => Weekday::Mon,
            WeekdayArg::Tue => Weekday::Tue,
            WeekdayArg::Wed => Weekday::Wed,
            WeekdayArg::Thu => Weekday::Thu,
            WeekdayArg::Fri => Weekday::Fri,
            WeekdayArg::Sat => Weekday::Sat,
            WeekdayArg::Sun => Weekday::Sun,
        }
    }
}

/// Human-friendly recurrence patterns
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulePreset {
    /// Every day
    Daily,
    /// Every week
    Weekly,
    /// Every month on day 1
    Monthly,
    /// Every year on January 1st
    Yearly,
    /// Monday to Friday
    Weekdays,
    /// Saturday and Sunday
    Weekends,
}

impl RulePreset {
    /// Convert the preset to a rule configuration
    pub fn to_rule(self) -> RecurrenceRule {
        match self {
            RulePreset::Daily => RecurrenceRule::new(Frequency::Daily),
            RulePreset::Weekly => RecurrenceRule::new(Frequency::Weekly),
            RulePreset::Monthly => RecurrenceRule::default(),
            RulePreset::Yearly => RecurrenceRule {
                frequency: Frequency::Yearly,
                interval: 1,
                by_month: vec![1],
                pattern: Some(RulePattern::MonthDays(vec![1])),
            },
            RulePreset::Weekdays => RecurrenceRule {
                frequency: Frequency::Weekly,
                interval: 1,
                by_month: Vec::new(),
                pattern: Some(RulePattern::Weekdays(vec![
                    Weekday::Mon,
                    Weekday::Tue,
                    Weekday::Wed,
                    Weekday::Thu,
                    Weekday::Fri,
                ])),
            },
            RulePreset::Weekends => RecurrenceRule {
                frequency: Frequency::Weekly,
                interval: 1,
                by_month: Vec::new(),
                pattern: Some(RulePattern::Weekdays(vec![Weekday::Sat, Weekday::Sun])),
            },
        }
    }
}
