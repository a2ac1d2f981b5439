// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Date-range filters for transaction retrieval.
//!
//! Preset boundaries are computed from the caller-supplied `today` on every
//! invocation. Nothing here caches or reads the wall clock.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A date-range filter over stored transactions.
///
/// All ranges are inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFilter {
    /// No date constraint.
    All,
    /// Exactly today.
    Today,
    /// Exactly yesterday.
    Yesterday,
    /// The calendar week (Monday through Sunday) immediately preceding the
    /// current calendar week.
    LastWeek,
    /// The 1st of the current month through today.
    MonthToDate,
    /// The full previous calendar month.
    PreviousMonth,
    /// An explicit inclusive range.
    Range { from: NaiveDate, to: NaiveDate },
}

impl DateFilter {
    /// Resolve the filter to inclusive `(from, to)` bounds, anchored at
    /// `today`. Returns `None` for [`DateFilter::All`].
    pub fn bounds(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            DateFilter::All => None,
            DateFilter::Today => Some((today, today)),
            DateFilter::Yesterday => {
                let yesterday = today - Days::new(1);
                Some((yesterday, yesterday))
            }
            DateFilter::LastWeek => {
                let this_monday = today.week(Weekday::Mon).first_day();
                Some((this_monday - Days::new(7), this_monday - Days::new(1)))
            }
            DateFilter::MonthToDate => Some((first_of_month(today), today)),
            DateFilter::PreviousMonth => {
                let last_of_previous = first_of_month(today) - Days::new(1);
                Some((first_of_month(last_of_previous), last_of_previous))
            }
            DateFilter::Range { from, to } => Some((from, to)),
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month; the fallback is unreachable.
    date.with_day(1).unwrap_or(date)
}
