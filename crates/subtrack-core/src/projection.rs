//! Projected spend over a date window.
//!
//! The dashboard multiplies renewal counts by per-period amounts to show
//! daily, monthly, and yearly projections; this module owns that
//! count-times-amount step. Amounts are in minor currency units.

use chrono::NaiveDate;
use serde::Serialize;

use crate::recurrence::occurrences_in_range;

/// Projected cost of one recurring charge over a date window.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SpendProjection {
    /// Renewals falling inside the window.
    pub occurrences: usize,
    /// Total cost in minor currency units (occurrences x amount).
    pub total_cents: i64,
}

/// Projects the cost of a recurring charge over `[start, end]`.
///
/// A rule that fails to parse contributes zero occurrences, so one corrupt
/// persisted rule degrades a single card instead of failing the whole
/// aggregation.
pub fn projected_spend(
    rule: &str,
    amount_cents: i64,
    start: NaiveDate,
    end: NaiveDate,
    anchor: Option<NaiveDate>,
) -> SpendProjection {
    let occurrences = occurrences_in_range(rule, start, end, anchor).len();
    SpendProjection {
        occurrences,
        total_cents: occurrences as i64 * amount_cents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn monthly_charge_over_a_year() {
        let projection = projected_spend(
            "FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=1",
            999,
            date(2025, 1, 1),
            date(2025, 12, 31),
            None,
        );
        assert_eq!(projection.occurrences, 12);
        assert_eq!(projection.total_cents, 11_988);
    }

    #[test]
    fn weekly_charge_over_four_weeks() {
        let projection = projected_spend(
            "FREQ=WEEKLY;INTERVAL=1;BYDAY=MO",
            500,
            date(2025, 1, 6),
            date(2025, 2, 2),
            None,
        );
        assert_eq!(projection.occurrences, 4);
        assert_eq!(projection.total_cents, 2_000);
    }

    #[test]
    fn invalid_rules_contribute_nothing() {
        let projection = projected_spend(
            "not a rule",
            999,
            date(2025, 1, 1),
            date(2025, 12, 31),
            None,
        );
        assert_eq!(projection.occurrences, 0);
        assert_eq!(projection.total_cents, 0);
    }
}
