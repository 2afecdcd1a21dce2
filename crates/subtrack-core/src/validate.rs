//! Invariant checks for candidate rule configurations.
//!
//! Invoked by editing flows before a configuration is serialized and
//! persisted. Violations are collected rather than short-circuited so a
//! form can mark every offending field at once; an invalid configuration
//! is a normal "form invalid" state, not a failure.

use thiserror::Error;

use crate::models::{month_name, Frequency, RecurrenceRule, RulePattern};

/// Nominal month lengths; February stays at 28 regardless of leap years.
const NOMINAL_MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A violated invariant in a candidate rule configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Interval must be at least 1")]
    IntervalTooSmall,

    #[error("Choose either a specific date or a pattern")]
    MissingMode,

    #[error("Day {0} is not a valid day of the month")]
    InvalidMonthDay(i32),

    #[error("Day {0} is not valid for {1}")]
    DayOutOfRangeForMonth(i32, &'static str),

    #[error("Month {0} is not a valid month")]
    InvalidMonth(u32),

    #[error("Yearly rules must select exactly one month")]
    YearlyMonthRequired,

    #[error("Weekly rules cannot use day-of-month or positional patterns")]
    WeeklyPatternUnsupported,
}

/// Checks a candidate configuration against the data-model invariants.
/// Returns every violated invariant; an empty vector means the
/// configuration is safe to serialize.
pub fn validate(rule: &RecurrenceRule) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if rule.interval == 0 {
        errors.push(ValidationError::IntervalTooSmall);
    }
    for &month in &rule.by_month {
        if !(1..=12).contains(&month) {
            errors.push(ValidationError::InvalidMonth(month));
        }
    }

    match rule.frequency {
        Frequency::Daily => {}
        Frequency::Weekly => {
            if matches!(
                rule.pattern,
                Some(RulePattern::MonthDays(_)) | Some(RulePattern::NthWeekday { .. })
            ) {
                errors.push(ValidationError::WeeklyPatternUnsupported);
            }
        }
        Frequency::Monthly => validate_month_mode(rule, None, &mut errors),
        Frequency::Yearly => {
            if rule.by_month.len() != 1 {
                errors.push(ValidationError::YearlyMonthRequired);
            }
            let month = rule
                .by_month
                .first()
                .copied()
                .filter(|m| (1..=12).contains(m));
            validate_month_mode(rule, month, &mut errors);
        }
    }

    errors
}

/// Monthly/yearly sub-mode checks. The set position and pattern weekday
/// need no checks of their own: the type admits only valid values.
fn validate_month_mode(
    rule: &RecurrenceRule,
    month: Option<u32>,
    errors: &mut Vec<ValidationError>,
) {
    match &rule.pattern {
        Some(RulePattern::MonthDays(days)) if !days.is_empty() => {
            for &day in days {
                if day == 0 || !(-31..=31).contains(&day) {
                    errors.push(ValidationError::InvalidMonthDay(day));
                } else if let Some(month) = month {
                    let len = NOMINAL_MONTH_LENGTHS[(month - 1) as usize] as i32;
                    if day > len || day < -len {
                        if let Some(name) = month_name(month) {
                            errors.push(ValidationError::DayOutOfRangeForMonth(day, name));
                        }
                    }
                }
            }
        }
        Some(RulePattern::NthWeekday { .. }) => {}
        _ => errors.push(ValidationError::MissingMode),
    }
}
