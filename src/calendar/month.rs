use super::grid::MonthGrid;
use crate::locale::LocaleProfile;
use thiserror::Error;
use time::{Date, Month, Weekday};

/// The navigation state: the month currently on display and its grid.
/// Moving to another month rebuilds the grid and discards the old one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthWindow {
    today: Date,
    first_of_month: Date,
    week_start: Weekday,
    grid: MonthGrid,
}

impl MonthWindow {
    pub(crate) fn new(today: Date, week_start: Weekday) -> MonthWindow {
        let first_of_month = today.replace_day(1).expect("every month has a first day");
        let grid = MonthGrid::for_month(first_of_month, week_start);
        MonthWindow {
            today,
            first_of_month,
            week_start,
            grid,
        }
    }

    /// Start on the month containing `date` instead of today's.
    pub(crate) fn start_month(mut self, date: Date) -> MonthWindow {
        self.first_of_month = date.replace_day(1).expect("every month has a first day");
        self.grid = MonthGrid::for_month(self.first_of_month, self.week_start);
        self
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub(crate) fn year(&self) -> i32 {
        self.grid.year()
    }

    pub(crate) fn month(&self) -> Month {
        self.grid.month()
    }

    pub(crate) fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub(crate) fn label(&self, profile: &LocaleProfile) -> String {
        format!("{} {}", profile.month_name(self.month()), self.year())
    }

    pub(crate) fn advance(&mut self) -> Result<(), OutOfTimeError> {
        let next = first_of_next_month(self.first_of_month).ok_or(OutOfTimeError)?;
        self.first_of_month = next;
        self.grid = MonthGrid::for_month(next, self.week_start);
        Ok(())
    }

    pub(crate) fn retreat(&mut self) -> Result<(), OutOfTimeError> {
        let previous = self
            .first_of_month
            .previous_day()
            .ok_or(OutOfTimeError)?
            .replace_day(1)
            .expect("every month has a first day");
        self.first_of_month = previous;
        self.grid = MonthGrid::for_month(previous, self.week_start);
        Ok(())
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.first_of_month = self
            .today
            .replace_day(1)
            .expect("every month has a first day");
        self.grid = MonthGrid::for_month(self.first_of_month, self.week_start);
    }
}

fn first_of_next_month(first: Date) -> Option<Date> {
    let year = match first.month() {
        Month::December => first.year().checked_add(1)?,
        _ => first.year(),
    };
    Date::from_calendar_date(year, first.month().next(), 1).ok()
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the edge of the calendar")]
pub(crate) struct OutOfTimeError;
