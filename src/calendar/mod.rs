mod grid;
mod month;
mod widget;
pub(crate) use self::grid::WeekdayExt;
pub(crate) use self::month::MonthWindow;
pub(crate) use self::widget::MonthView;
use time::Date;

/// Supplies the per-day annotation shown on the grid.
pub(crate) trait DayMarker {
    fn event_count(&self, date: Date) -> usize;
}
