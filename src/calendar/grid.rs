use std::iter::successors;
use time::{Date, Month, Weekday};

const DAYS_IN_WEEK: usize = 7;

pub(crate) trait WeekdayExt {
    fn index0(&self) -> u8;
    fn days_since(&self, start: Weekday) -> u8;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u8 {
        self.number_days_from_sunday()
    }

    // Days from the most recent occurrence of `start` to `self`; 0 if they
    // are the same weekday.
    fn days_since(&self, start: Weekday) -> u8 {
        (self.index0() + 7 - start.index0()) % 7
    }
}

/// One row of the grid.  A slot is `Some` only for days of the displayed
/// month; lead & trail padding from the adjacent months is `None`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Week([Option<Date>; DAYS_IN_WEEK]);

impl Week {
    pub(crate) fn slots(&self) -> impl Iterator<Item = Option<Date>> + '_ {
        self.0.iter().copied()
    }

    pub(crate) fn days(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.iter().copied().flatten()
    }
}

/// The displayed representation of one month: full weeks from the one
/// containing the month's first day through the one containing its last.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    year: i32,
    month: Month,
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// Builds the grid for the month containing `reference`, with weeks
    /// starting on `week_start`.  Any valid date produces a valid grid.
    pub(crate) fn for_month(reference: Date, week_start: Weekday) -> MonthGrid {
        let month = reference.month();
        let first = reference
            .replace_day(1)
            .expect("every month has a first day");
        let month_days = successors(Some(first), move |&d| {
            d.next_day().filter(|next| next.month() == month)
        });
        let lead = usize::from(first.weekday().days_since(week_start));
        let week_qty = (lead + month_days.clone().count()).div_ceil(DAYS_IN_WEEK);
        let mut days = month_days;
        let weeks = (0..week_qty)
            .map(|w| {
                Week(std::array::from_fn(|i| {
                    (w * DAYS_IN_WEEK + i >= lead)
                        .then(|| days.next())
                        .flatten()
                }))
            })
            .collect();
        MonthGrid {
            year: first.year(),
            month,
            weeks,
        }
    }

    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    pub(crate) fn month(&self) -> Month {
        self.month
    }

    pub(crate) fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// All concrete dates of the grid, in order.
    pub(crate) fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.weeks.iter().flat_map(Week::days)
    }
}
