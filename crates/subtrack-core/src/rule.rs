//! Rule-string parsing and canonical generation.
//!
//! The wire format is the RFC 5545 RRULE subset used for billing cycles:
//! `FREQ=...;INTERVAL=...[;BYMONTH=...][;BYDAY=...][;BYMONTHDAY=...][;BYSETPOS=...]`.
//! Parsing is strict ([`std::str::FromStr`]); the lenient
//! [`RecurrenceRule::parse_or_default`] entry point recovers from corrupt
//! persisted data instead of failing a rendering path.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use crate::error::RuleError;
use crate::models::{
    weekday_from_token, weekday_token, Frequency, RecurrenceRule, RulePattern, SetPosition,
};

impl FromStr for RecurrenceRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix("RRULE:").unwrap_or(trimmed);
        if body.is_empty() {
            return Err(RuleError::InvalidRule("empty rule string".to_string()));
        }

        let mut frequency = None;
        let mut interval = 1u32;
        let mut by_month = Vec::new();
        let mut weekdays = Vec::new();
        let mut month_days = Vec::new();
        let mut set_position: Option<SetPosition> = None;

        for part in body.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (key, value) = part.split_once('=').ok_or_else(|| {
                RuleError::InvalidRule(format!("expected KEY=VALUE, got '{part}'"))
            })?;
            match key.trim().to_ascii_uppercase().as_str() {
                "FREQ" => frequency = Some(decode_frequency(value)),
                "INTERVAL" => {
                    interval = value.trim().parse().map_err(|_| {
                        RuleError::InvalidRule(format!("invalid interval '{}'", value.trim()))
                    })?;
                }
                "BYMONTH" => by_month = decode_list(value, "month")?,
                "BYMONTHDAY" => month_days = decode_list(value, "month day")?,
                "BYDAY" => {
                    for token in value.split(',') {
                        let (ordinal, weekday) = decode_day_token(token)?;
                        if let Some(position) = ordinal {
                            set_position.get_or_insert(position);
                        }
                        weekdays.push(weekday);
                    }
                }
                "BYSETPOS" => {
                    let ordinal: i32 = value.trim().parse().map_err(|_| {
                        RuleError::InvalidRule(format!("invalid set position '{}'", value.trim()))
                    })?;
                    set_position = Some(SetPosition::from_ordinal(ordinal).ok_or_else(|| {
                        RuleError::InvalidRule(format!("unsupported set position '{ordinal}'"))
                    })?);
                }
                // Unknown keys (WKST, UNTIL, COUNT, ...) are tolerated.
                _ => {}
            }
        }

        let frequency = frequency
            .ok_or_else(|| RuleError::InvalidRule("missing FREQ component".to_string()))?;

        // Mode inference: a set position plus a weekday wins outright, a
        // month-day list comes next, a bare weekday list last.
        let pattern = if let (Some(position), Some(&weekday)) = (set_position, weekdays.first()) {
            Some(RulePattern::NthWeekday { position, weekday })
        } else if !month_days.is_empty() {
            Some(RulePattern::MonthDays(month_days))
        } else if !weekdays.is_empty() {
            Some(RulePattern::Weekdays(weekdays))
        } else {
            None
        };

        Ok(Self {
            frequency,
            interval,
            by_month,
            pattern,
        })
    }
}

impl RecurrenceRule {
    /// Lenient entry point for persisted data: malformed or empty input
    /// falls back to the default monthly rule instead of propagating an
    /// error past the subsystem boundary.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

/// An unrecognized frequency token falls back to monthly rather than
/// failing the whole rule.
fn decode_frequency(value: &str) -> Frequency {
    match value.trim().to_ascii_uppercase().as_str() {
        "DAILY" => Frequency::Daily,
        "WEEKLY" => Frequency::Weekly,
        "MONTHLY" => Frequency::Monthly,
        "YEARLY" => Frequency::Yearly,
        _ => Frequency::Monthly,
    }
}

fn decode_list<T: FromStr>(value: &str, what: &str) -> Result<Vec<T>, RuleError> {
    value
        .split(',')
        .map(|item| {
            item.trim()
                .parse::<T>()
                .map_err(|_| RuleError::InvalidRule(format!("invalid {what} '{}'", item.trim())))
        })
        .collect()
}

/// Decodes one BYDAY token, which is a two-letter weekday optionally
/// prefixed with a set-position ordinal ("MO", "1MO", "-1FR").
fn decode_day_token(token: &str) -> Result<(Option<SetPosition>, Weekday), RuleError> {
    let token = token.trim();
    if !token.is_ascii() || token.len() < 2 {
        return Err(RuleError::InvalidRule(format!(
            "invalid weekday token '{token}'"
        )));
    }
    let (prefix, day) = token.split_at(token.len() - 2);
    let weekday = weekday_from_token(&day.to_ascii_uppercase()).ok_or_else(|| {
        RuleError::InvalidRule(format!("invalid weekday token '{token}'"))
    })?;
    if prefix.is_empty() {
        return Ok((None, weekday));
    }
    let ordinal: i32 = prefix.parse().map_err(|_| {
        RuleError::InvalidRule(format!("invalid ordinal prefix in '{token}'"))
    })?;
    let position = SetPosition::from_ordinal(ordinal).ok_or_else(|| {
        RuleError::InvalidRule(format!("unsupported ordinal '{ordinal}' in BYDAY"))
    })?;
    Ok((Some(position), weekday))
}

impl fmt::Display for RecurrenceRule {
    /// Serializes the canonical rule string in the fixed component order
    /// FREQ, INTERVAL, BYMONTH, BYDAY, BYMONTHDAY, BYSETPOS. Weekly rules
    /// never carry month, month-day, or set-position components.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FREQ={};INTERVAL={}", self.frequency.token(), self.interval)?;
        let weekly = self.frequency == Frequency::Weekly;
        if !weekly && !self.by_month.is_empty() {
            write!(f, ";BYMONTH={}", join_csv(&self.by_month))?;
        }
        match &self.pattern {
            Some(RulePattern::Weekdays(days)) if !days.is_empty() => {
                let tokens: Vec<&str> = days.iter().map(|&d| weekday_token(d)).collect();
                write!(f, ";BYDAY={}", tokens.join(","))?;
            }
            Some(RulePattern::NthWeekday { weekday, .. }) => {
                write!(f, ";BYDAY={}", weekday_token(*weekday))?;
            }
            Some(RulePattern::MonthDays(days)) if !weekly && !days.is_empty() => {
                write!(f, ";BYMONTHDAY={}", join_csv(days))?;
            }
            _ => {}
        }
        if let Some(RulePattern::NthWeekday { position, .. }) = &self.pattern {
            if !weekly {
                write!(f, ";BYSETPOS={}", position.ordinal())?;
            }
        }
        Ok(())
    }
}

fn join_csv<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parsing {
        use super::*;

        #[test]
        fn decodes_monthly_specific_date() {
            let rule: RecurrenceRule = "FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=1".parse().unwrap();
            assert_eq!(rule.frequency, Frequency::Monthly);
            assert_eq!(rule.interval, 1);
            assert_eq!(rule.pattern, Some(RulePattern::MonthDays(vec![1])));
            assert!(rule.by_month.is_empty());
        }

        #[test]
        fn decodes_weekly_day_list() {
            let rule: RecurrenceRule = "RRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR".parse().unwrap();
            assert_eq!(rule.frequency, Frequency::Weekly);
            assert_eq!(rule.interval, 1);
            assert_eq!(
                rule.pattern,
                Some(RulePattern::Weekdays(vec![
                    Weekday::Mon,
                    Weekday::Wed,
                    Weekday::Fri
                ]))
            );
        }

        #[test]
        fn decodes_positional_pattern() {
            let rule: RecurrenceRule = "FREQ=MONTHLY;INTERVAL=1;BYDAY=MO;BYSETPOS=1"
                .parse()
                .unwrap();
            assert_eq!(
                rule.pattern,
                Some(RulePattern::NthWeekday {
                    position: SetPosition::First,
                    weekday: Weekday::Mon,
                })
            );
        }

        #[test]
        fn decodes_ordinal_prefixed_byday() {
            let rule: RecurrenceRule = "FREQ=MONTHLY;BYDAY=-1FR".parse().unwrap();
            assert_eq!(
                rule.pattern,
                Some(RulePattern::NthWeekday {
                    position: SetPosition::Last,
                    weekday: Weekday::Fri,
                })
            );
        }

        #[test]
        fn positional_pattern_wins_over_month_days() {
            let rule: RecurrenceRule = "FREQ=MONTHLY;BYMONTHDAY=15;BYDAY=MO;BYSETPOS=2"
                .parse()
                .unwrap();
            assert_eq!(
                rule.pattern,
                Some(RulePattern::NthWeekday {
                    position: SetPosition::Second,
                    weekday: Weekday::Mon,
                })
            );
        }

        #[test]
        fn decodes_yearly_specific_date() {
            let rule: RecurrenceRule = "FREQ=YEARLY;BYMONTH=3;BYMONTHDAY=15".parse().unwrap();
            assert_eq!(rule.frequency, Frequency::Yearly);
            assert_eq!(rule.by_month, vec![3]);
            assert_eq!(rule.pattern, Some(RulePattern::MonthDays(vec![15])));
        }

        #[test]
        fn unrecognized_frequency_falls_back_to_monthly() {
            let rule: RecurrenceRule = "FREQ=SECONDLY;INTERVAL=1".parse().unwrap();
            assert_eq!(rule.frequency, Frequency::Monthly);
        }

        #[test]
        fn keys_are_case_insensitive() {
            let rule: RecurrenceRule = "freq=WEEKLY;byday=MO".parse().unwrap();
            assert_eq!(rule.frequency, Frequency::Weekly);
            assert_eq!(rule.pattern, Some(RulePattern::Weekdays(vec![Weekday::Mon])));
        }

        #[test]
        fn unknown_keys_are_ignored() {
            let rule: RecurrenceRule = "FREQ=DAILY;WKST=MO;COUNT=5".parse().unwrap();
            assert_eq!(rule.frequency, Frequency::Daily);
        }

        #[test]
        fn missing_freq_is_an_error() {
            assert!("INTERVAL=2;BYMONTHDAY=1".parse::<RecurrenceRule>().is_err());
        }

        #[test]
        fn malformed_numbers_are_errors() {
            assert!("FREQ=DAILY;INTERVAL=abc".parse::<RecurrenceRule>().is_err());
            assert!("FREQ=MONTHLY;BYMONTHDAY=x".parse::<RecurrenceRule>().is_err());
        }

        #[test]
        fn unsupported_set_position_is_an_error() {
            assert!("FREQ=MONTHLY;BYDAY=MO;BYSETPOS=5"
                .parse::<RecurrenceRule>()
                .is_err());
        }

        #[test]
        fn empty_input_is_an_error() {
            assert!("".parse::<RecurrenceRule>().is_err());
            assert!("   ".parse::<RecurrenceRule>().is_err());
        }

        #[test]
        fn parse_or_default_recovers_to_monthly_day_one() {
            assert_eq!(RecurrenceRule::parse_or_default(""), RecurrenceRule::default());
            assert_eq!(
                RecurrenceRule::parse_or_default("not a rule"),
                RecurrenceRule::default()
            );
        }

        #[test]
        fn parse_or_default_keeps_valid_rules() {
            let rule = RecurrenceRule::parse_or_default("FREQ=WEEKLY;BYDAY=TH");
            assert_eq!(rule.frequency, Frequency::Weekly);
        }
    }

    mod generation {
        use super::*;

        #[test]
        fn emits_canonical_component_order() {
            let rule = RecurrenceRule {
                frequency: Frequency::Yearly,
                interval: 1,
                by_month: vec![3],
                pattern: Some(RulePattern::MonthDays(vec![15])),
            };
            assert_eq!(rule.to_string(), "FREQ=YEARLY;INTERVAL=1;BYMONTH=3;BYMONTHDAY=15");
        }

        #[test]
        fn emits_positional_pattern_components() {
            let rule = RecurrenceRule {
                frequency: Frequency::Monthly,
                interval: 1,
                by_month: Vec::new(),
                pattern: Some(RulePattern::NthWeekday {
                    position: SetPosition::First,
                    weekday: Weekday::Mon,
                }),
            };
            assert_eq!(rule.to_string(), "FREQ=MONTHLY;INTERVAL=1;BYDAY=MO;BYSETPOS=1");
        }

        #[test]
        fn always_emits_interval() {
            let rule = RecurrenceRule::new(Frequency::Daily);
            assert_eq!(rule.to_string(), "FREQ=DAILY;INTERVAL=1");
        }

        #[test]
        fn weekly_rules_suppress_month_components() {
            let rule = RecurrenceRule {
                frequency: Frequency::Weekly,
                interval: 2,
                by_month: vec![1],
                pattern: Some(RulePattern::MonthDays(vec![5])),
            };
            assert_eq!(rule.to_string(), "FREQ=WEEKLY;INTERVAL=2");
        }

        #[test]
        fn round_trips_concrete_rules() {
            for encoded in [
                "FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=1",
                "FREQ=MONTHLY;INTERVAL=1;BYDAY=MO;BYSETPOS=1",
                "FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,FR",
                "FREQ=YEARLY;INTERVAL=1;BYMONTH=3;BYMONTHDAY=15",
                "FREQ=YEARLY;INTERVAL=1;BYMONTH=12;BYDAY=FR;BYSETPOS=-1",
                "FREQ=DAILY;INTERVAL=3",
            ] {
                let rule: RecurrenceRule = encoded.parse().unwrap();
                assert_eq!(rule.to_string(), encoded);
            }
        }
    }
}
