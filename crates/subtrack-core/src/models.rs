use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How often a rule repeats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// The FREQ token used in rule strings.
    pub fn token(self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }

    /// The singular unit name used in descriptions ("Every 2 months").
    pub fn unit(self) -> &'static str {
        match self {
            Frequency::Daily => "day",
            Frequency::Weekly => "week",
            Frequency::Monthly => "month",
            Frequency::Yearly => "year",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Monthly => write!(f, "monthly"),
            Frequency::Yearly => write!(f, "yearly"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid frequency: {0}")]
pub struct ParseFrequencyError(String);

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            _ => Err(ParseFrequencyError(s.to_string())),
        }
    }
}

/// Which occurrence of a weekday within the period a pattern selects.
///
/// Maps to the BYSETPOS ordinals {1, 2, 3, 4, -1}; other ordinals are not
/// representable on purpose.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SetPosition {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl SetPosition {
    /// Decodes a BYSETPOS ordinal. Values outside {1, 2, 3, 4, -1} have no
    /// representation and yield `None`.
    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        match ordinal {
            1 => Some(SetPosition::First),
            2 => Some(SetPosition::Second),
            3 => Some(SetPosition::Third),
            4 => Some(SetPosition::Fourth),
            -1 => Some(SetPosition::Last),
            _ => None,
        }
    }

    /// The BYSETPOS ordinal for this position.
    pub fn ordinal(self) -> i32 {
        match self {
            SetPosition::First => 1,
            SetPosition::Second => 2,
            SetPosition::Third => 3,
            SetPosition::Fourth => 4,
            SetPosition::Last => -1,
        }
    }

    /// The word used in descriptions ("the first Monday").
    pub fn label(self) -> &'static str {
        match self {
            SetPosition::First => "first",
            SetPosition::Second => "second",
            SetPosition::Third => "third",
            SetPosition::Fourth => "fourth",
            SetPosition::Last => "last",
        }
    }
}

/// The day-selection sub-mode of a rule.
///
/// Monthly and yearly rules choose a specific date or a positional weekday
/// pattern; making these enum variants keeps the two modes mutually
/// exclusive in the type itself rather than by convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RulePattern {
    /// Fixed day(s) of the month; negative values count from the month's end.
    MonthDays(Vec<i32>),
    /// The Nth weekday of the period ("first Monday", "last Friday").
    NthWeekday {
        position: SetPosition,
        weekday: Weekday,
    },
    /// A plain weekday selection, used by weekly rules.
    Weekdays(Vec<Weekday>),
}

/// The editable representation of a recurrence pattern.
///
/// Exists only while a rule is being edited or evaluated; the persisted
/// artifact is always the serialized rule string (see [`crate::rule`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    /// Repeat every N frequency units. 0 is representable so the validator
    /// can report it; every evaluation path rejects it.
    pub interval: u32,
    /// Months (1-12) the rule is limited to. Yearly rules carry exactly one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub by_month: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<RulePattern>,
}

impl RecurrenceRule {
    /// A bare rule with the given frequency and interval 1.
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: 1,
            by_month: Vec::new(),
            pattern: None,
        }
    }
}

impl Default for RecurrenceRule {
    /// Monthly on day 1: the safe fallback when nothing has been persisted
    /// yet or a persisted rule fails to parse.
    fn default() -> Self {
        Self {
            frequency: Frequency::Monthly,
            interval: 1,
            by_month: Vec::new(),
            pattern: Some(RulePattern::MonthDays(vec![1])),
        }
    }
}

/// The two-letter rule-string token for a weekday.
pub fn weekday_token(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}

/// Decodes a two-letter weekday token. Inverse of [`weekday_token`].
pub fn weekday_from_token(token: &str) -> Option<Weekday> {
    match token {
        "MO" => Some(Weekday::Mon),
        "TU" => Some(Weekday::Tue),
        "WE" => Some(Weekday::Wed),
        "TH" => Some(Weekday::Thu),
        "FR" => Some(Weekday::Fri),
        "SA" => Some(Weekday::Sat),
        "SU" => Some(Weekday::Sun),
        _ => None,
    }
}

/// The full English weekday name used in descriptions.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub(crate) fn month_name(month: u32) -> Option<&'static str> {
    const MONTH_NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}
