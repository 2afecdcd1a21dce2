//! Occurrence enumeration against calendar dates.
//!
//! Rules are evaluated at day granularity with no time-of-day component.
//! Every interval-based rule has its phase pinned to an anchor date (the
//! subscription's start date): "every 2 weeks" means every 2 weeks counted
//! from the anchor's week, not from whatever window a caller asks about.
//! No occurrence precedes the anchor.
//!
//! Out-of-range month days clamp to the month's last day, so a
//! day-31 rule bills on Feb 28 and a yearly Feb 29 rule bills on Feb 28 in
//! non-leap years.

use chrono::{Datelike, Days, Duration, NaiveDate, Weekday};

use crate::error::RuleError;
use crate::models::{Frequency, RecurrenceRule, RulePattern, SetPosition};

/// RecurrenceManager: evaluates one recurrence rule against concrete dates.
///
/// Responsibilities:
/// 1. Decode and sanity-check the rule string up front
/// 2. Generate occurrence sequences between arbitrary date ranges
/// 3. Find the next occurrence on or after a given date
/// 4. Keep interval phase pinned to the series anchor date
#[derive(Debug, Clone)]
pub struct RecurrenceManager {
    rule: RecurrenceRule,
    anchor: NaiveDate,
}

impl RecurrenceManager {
    /// Creates a manager for `rule` anchored at `anchor`.
    ///
    /// Fails on undecodable rule strings and on a zero interval; the
    /// lenient free functions below map those failures to empty results.
    pub fn new(rule: &str, anchor: NaiveDate) -> Result<Self, RuleError> {
        Self::from_rule(rule.parse()?, anchor)
    }

    /// Creates a manager from an already-decoded rule configuration.
    pub fn from_rule(rule: RecurrenceRule, anchor: NaiveDate) -> Result<Self, RuleError> {
        if rule.interval == 0 {
            return Err(RuleError::InvalidInput(
                "interval must be at least 1".to_string(),
            ));
        }
        Ok(Self { rule, anchor })
    }

    /// Gets the decoded rule configuration.
    pub fn rule(&self) -> &RecurrenceRule {
        &self.rule
    }

    /// Gets the anchor date that fixes the series phase.
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// All occurrences within `[start, end]`, inclusive of both boundaries.
    ///
    /// Runs in time proportional to the window length, never to the age of
    /// the series.
    pub fn generate_occurrences_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<NaiveDate> {
        let mut occurrences = Vec::new();
        if start > end {
            return occurrences;
        }
        let mut cursor = start.max(self.anchor);
        while cursor <= end {
            if self.matches(cursor) {
                occurrences.push(cursor);
            }
            cursor = match cursor.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        occurrences
    }

    /// The number of occurrences within `[start, end]`.
    pub fn count_occurrences_between(&self, start: NaiveDate, end: NaiveDate) -> usize {
        self.generate_occurrences_between(start, end).len()
    }

    /// The earliest occurrence on or after `from` (inclusive of `from`
    /// itself when it matches), or `None` when no occurrence exists within
    /// one full interval period of the search start.
    pub fn next_occurrence_from(&self, from: NaiveDate) -> Option<NaiveDate> {
        let mut cursor = from.max(self.anchor);
        for _ in 0..=self.scan_horizon_days() {
            if self.matches(cursor) {
                return Some(cursor);
            }
            cursor = cursor.succ_opt()?;
        }
        None
    }

    /// The next `count` occurrences on or after `from`, in order.
    pub fn preview_occurrences(&self, from: NaiveDate, count: usize) -> Vec<NaiveDate> {
        let mut result = Vec::with_capacity(count);
        let mut cursor = from;
        while result.len() < count {
            let Some(next) = self.next_occurrence_from(cursor) else {
                break;
            };
            result.push(next);
            cursor = match next.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        result
    }

    /// Upper bound, in days, on the gap between consecutive occurrences.
    fn scan_horizon_days(&self) -> i64 {
        let period = match self.rule.frequency {
            Frequency::Daily => 1,
            Frequency::Weekly => 7,
            // A month-limited monthly rule can skip up to a year between
            // matching months.
            Frequency::Monthly if self.rule.by_month.is_empty() => 31,
            Frequency::Monthly | Frequency::Yearly => 366,
        };
        period * (i64::from(self.rule.interval) + 2)
    }

    /// Whether `date` is an occurrence of this series.
    fn matches(&self, date: NaiveDate) -> bool {
        if date < self.anchor {
            return false;
        }
        match self.rule.frequency {
            Frequency::Daily => {
                (date - self.anchor).num_days() % i64::from(self.rule.interval) == 0
            }
            Frequency::Weekly => self.matches_weekly(date),
            Frequency::Monthly => {
                self.in_month_phase(date) && self.month_limit(date) && self.day_matches(date)
            }
            Frequency::Yearly => {
                self.in_year_phase(date) && self.year_month_matches(date) && self.day_matches(date)
            }
        }
    }

    fn matches_weekly(&self, date: NaiveDate) -> bool {
        let weeks = (date - week_start(self.anchor)).num_days() / 7;
        if weeks % i64::from(self.rule.interval) != 0 {
            return false;
        }
        match &self.rule.pattern {
            Some(RulePattern::Weekdays(days)) if !days.is_empty() => {
                days.contains(&date.weekday())
            }
            _ => date.weekday() == self.anchor.weekday(),
        }
    }

    fn in_month_phase(&self, date: NaiveDate) -> bool {
        let delta = month_index(date) - month_index(self.anchor);
        delta % i64::from(self.rule.interval) == 0
    }

    fn month_limit(&self, date: NaiveDate) -> bool {
        self.rule.by_month.is_empty() || self.rule.by_month.contains(&date.month())
    }

    fn in_year_phase(&self, date: NaiveDate) -> bool {
        i64::from(date.year() - self.anchor.year()) % i64::from(self.rule.interval) == 0
    }

    fn year_month_matches(&self, date: NaiveDate) -> bool {
        if self.rule.by_month.is_empty() {
            date.month() == self.anchor.month()
        } else {
            self.rule.by_month.contains(&date.month())
        }
    }

    fn day_matches(&self, date: NaiveDate) -> bool {
        match &self.rule.pattern {
            Some(RulePattern::MonthDays(days)) if !days.is_empty() => days
                .iter()
                .any(|&d| resolve_month_day(date.year(), date.month(), d) == Some(date.day())),
            Some(RulePattern::NthWeekday { position, weekday }) => {
                nth_weekday_of_month(date.year(), date.month(), *position, *weekday)
                    == Some(date)
            }
            Some(RulePattern::Weekdays(days)) if !days.is_empty() => {
                days.contains(&date.weekday())
            }
            // No explicit day selection: the anchor's day-of-month stands
            // in, clamped for short months.
            _ => {
                resolve_month_day(date.year(), date.month(), self.anchor.day() as i32)
                    == Some(date.day())
            }
        }
    }
}

/// Earliest occurrence of `rule` on or after `from`, with the series
/// anchored at `from`. Invalid or empty rules yield `None`.
pub fn next_occurrence(rule: &str, from: NaiveDate) -> Option<NaiveDate> {
    RecurrenceManager::new(rule, from).ok()?.next_occurrence_from(from)
}

/// All occurrences of `rule` within `[start, end]`, inclusive. An absent
/// anchor pins the series phase to the window start. Invalid or empty
/// rules yield an empty sequence rather than an error, so one corrupt
/// persisted rule cannot fail a whole dashboard aggregation.
pub fn occurrences_in_range(
    rule: &str,
    start: NaiveDate,
    end: NaiveDate,
    anchor: Option<NaiveDate>,
) -> Vec<NaiveDate> {
    match RecurrenceManager::new(rule, anchor.unwrap_or(start)) {
        Ok(manager) => manager.generate_occurrences_between(start, end),
        Err(_) => Vec::new(),
    }
}

/// The number of occurrences of `rule` within `[start, end]`.
pub fn count_occurrences_in_range(
    rule: &str,
    start: NaiveDate,
    end: NaiveDate,
    anchor: Option<NaiveDate>,
) -> usize {
    occurrences_in_range(rule, start, end, anchor).len()
}

/// Monday of the week containing `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(28, |last| last.day())
}

/// Resolves a BYMONTHDAY value (positive, or negative counting from the
/// month's end) to a concrete day, clamping out-of-range values to the
/// nearest valid day of the month.
fn resolve_month_day(year: i32, month: u32, day: i32) -> Option<u32> {
    if day == 0 {
        return None;
    }
    let len = days_in_month(year, month);
    if day > 0 {
        Some((day as u32).min(len))
    } else {
        let from_end = len as i32 + day + 1;
        Some(from_end.clamp(1, len as i32) as u32)
    }
}

/// The Nth `weekday` of the given month ("first Monday", "last Friday").
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    position: SetPosition,
    weekday: Weekday,
) -> Option<NaiveDate> {
    let len = days_in_month(year, month);
    match position {
        SetPosition::Last => {
            let last = NaiveDate::from_ymd_opt(year, month, len)?;
            let back =
                (last.weekday().num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
            last.checked_sub_days(Days::new(u64::from(back)))
        }
        _ => {
            let first = NaiveDate::from_ymd_opt(year, month, 1)?;
            let forward =
                (weekday.num_days_from_monday() + 7 - first.weekday().num_days_from_monday()) % 7;
            let day = 1 + forward + (position.ordinal() as u32 - 1) * 7;
            if day > len {
                return None;
            }
            NaiveDate::from_ymd_opt(year, month, day)
        }
    }
}
