//! Human-readable rule descriptions.
//!
//! Two flavors: a compact phrase for cards and tables ("Every month on
//! day 1") and a detailed phrase with ordinals for edit previews ("Every
//! month on the 1st"). Both are pure functions of the rule string.

use crate::models::{month_name, weekday_name, Frequency, RecurrenceRule, RulePattern};

/// Fixed fallback for rule strings that fail to decode.
pub const INVALID_RULE_TEXT: &str = "Invalid recurrence rule";

/// Compact description of a rule string ("Every month on day 1").
///
/// Never fails: undecodable input yields [`INVALID_RULE_TEXT`].
pub fn describe(rule: &str) -> String {
    rule.parse::<RecurrenceRule>()
        .map(|r| r.summary())
        .unwrap_or_else(|_| INVALID_RULE_TEXT.to_string())
}

/// Detailed description of a rule string ("Every month on the 1st").
///
/// Never fails: undecodable input yields [`INVALID_RULE_TEXT`].
pub fn describe_detailed(rule: &str) -> String {
    rule.parse::<RecurrenceRule>()
        .map(|r| r.summary_detailed())
        .unwrap_or_else(|_| INVALID_RULE_TEXT.to_string())
}

impl RecurrenceRule {
    /// Compact description ("Every month on day 1").
    pub fn summary(&self) -> String {
        self.render(false)
    }

    /// Detailed description with ordinal suffixes ("Every month on the 1st").
    pub fn summary_detailed(&self) -> String {
        self.render(true)
    }

    fn render(&self, detailed: bool) -> String {
        let mut text = every_phrase(self.frequency, self.interval);
        match self.frequency {
            Frequency::Daily => {}
            Frequency::Weekly => {
                if let Some(RulePattern::Weekdays(days)) = &self.pattern {
                    if !days.is_empty() {
                        // Canonical Monday-first order, independent of how
                        // the selection was stored.
                        let mut days = days.clone();
                        days.sort_by_key(|d| d.num_days_from_monday());
                        days.dedup();
                        let names: Vec<&str> = days.iter().map(|&d| weekday_name(d)).collect();
                        text.push_str(&format!(" on {}", names.join(", ")));
                    }
                }
            }
            Frequency::Monthly => match &self.pattern {
                Some(RulePattern::NthWeekday { position, weekday }) => {
                    text.push_str(&format!(
                        " on the {} {}",
                        position.label(),
                        weekday_name(*weekday)
                    ));
                }
                Some(RulePattern::MonthDays(days)) if !days.is_empty() => {
                    text.push_str(&format!(" on {}", month_days_phrase(days, detailed)));
                }
                _ => {}
            },
            Frequency::Yearly => {
                let month = self.by_month.first().and_then(|&m| month_name(m));
                match &self.pattern {
                    Some(RulePattern::NthWeekday { position, weekday }) => {
                        text.push_str(&format!(
                            " on the {} {}",
                            position.label(),
                            weekday_name(*weekday)
                        ));
                        if let Some(month) = month {
                            text.push_str(&format!(" of {month}"));
                        }
                    }
                    Some(RulePattern::MonthDays(days)) if !days.is_empty() => {
                        match month {
                            Some(month) if days.iter().all(|&d| d > 0) => {
                                let joined = days
                                    .iter()
                                    .map(|&d| {
                                        if detailed {
                                            ordinal(d)
                                        } else {
                                            d.to_string()
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .join(", ");
                                text.push_str(&format!(" on {month} {joined}"));
                            }
                            Some(month) => {
                                text.push_str(&format!(
                                    " on {} of {month}",
                                    month_days_phrase(days, detailed)
                                ));
                            }
                            None => {
                                text.push_str(&format!(
                                    " on {}",
                                    month_days_phrase(days, detailed)
                                ));
                            }
                        }
                    }
                    _ => {
                        if let Some(month) = month {
                            text.push_str(&format!(" in {month}"));
                        }
                    }
                }
            }
        }
        text
    }
}

fn every_phrase(frequency: Frequency, interval: u32) -> String {
    let unit = frequency.unit();
    if interval > 1 {
        format!("Every {interval} {unit}s")
    } else {
        format!("Every {unit}")
    }
}

fn month_days_phrase(days: &[i32], detailed: bool) -> String {
    if days.iter().all(|&d| d > 0) {
        let joined = days
            .iter()
            .map(|&d| if detailed { ordinal(d) } else { d.to_string() })
            .collect::<Vec<_>>()
            .join(", ");
        if detailed {
            format!("the {joined}")
        } else {
            format!("day {joined}")
        }
    } else {
        days.iter()
            .map(|&d| day_label(d, detailed))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn day_label(day: i32, detailed: bool) -> String {
    match day {
        -1 => "the last day".to_string(),
        d if d < 0 => format!("the {} from the end", ordinal(-d)),
        d if detailed => format!("the {}", ordinal(d)),
        d => format!("day {d}"),
    }
}

fn ordinal(n: i32) -> String {
    format!("{n}{}", ordinal_suffix(n))
}

/// 1st/2nd/3rd/Nth, with the 11/12/13 exception (teens are always "th").
fn ordinal_suffix(n: i32) -> &'static str {
    let n = n.abs();
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
