//! # Subtrack Core Library
//!
//! The recurrence rule engine behind the Subtrack subscription tracker:
//! everything needed to turn an editable recurrence configuration into a
//! canonical RFC 5545-style rule string and back, describe it in plain
//! language, and enumerate the concrete renewal dates it produces.
//!
//! ## Features
//!
//! - **Tagged-Variant Rule Model**: mutually exclusive "specific date" and
//!   "nth weekday" sub-modes that cannot be populated simultaneously
//! - **Lenient Boundaries**: corrupt persisted rule strings degrade to a
//!   safe default, a fallback description, or an empty occurrence list,
//!   never a panic in a rendering path
//! - **Anchor-Pinned Phase**: "every 2 weeks" counts from the subscription's
//!   start date, not from whatever window a dashboard happens to ask about
//! - **Bounded Enumeration**: occurrence generation is proportional to the
//!   window being rendered, never to the age of the subscription
//! - **Spend Projection**: renewal counts times per-period amounts for
//!   dashboard cost aggregation
//!
//! ## Core Modules
//!
//! - [`models`]: the rule configuration model and weekday/ordinal mappings
//! - [`rule`]: rule-string parsing and canonical generation
//! - [`describe`]: compact and detailed human-readable summaries
//! - [`recurrence`]: occurrence enumeration against calendar dates
//! - [`validate`]: field-level invariant checks for editing flows
//! - [`projection`]: projected spend over a date window
//! - [`error`]: error types shared by the strict APIs
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use subtrack_core::describe::describe;
//! use subtrack_core::recurrence::occurrences_in_range;
//!
//! let rule = "FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=1";
//! assert_eq!(describe(rule), "Every month on day 1");
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
//! let renewals = occurrences_in_range(rule, start, end, None);
//! assert_eq!(renewals.len(), 3);
//! ```

pub mod describe;
pub mod error;
pub mod models;
pub mod projection;
pub mod recurrence;
pub mod rule;
pub mod validate;
