use super::month::MonthWindow;
use super::DayMarker;
use crate::locale::LocaleProfile;
use crate::theme::{BUSY_STYLE, MONTH_STYLE, WEEKDAY_STYLE};
use ratatui::{prelude::*, widgets::*};
use std::iter::successors;
use time::Date;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 7;

/// Width of one day cell's text
const CELL_WIDTH: u16 = 4;

/// Width of the grid in columns
const GRID_WIDTH: u16 = DAY_WIDTH * 6 + CELL_WIDTH;

/// Number of lines taken up by the month label, the weekday header, and its
/// rule
const HEADER_LINES: u16 = 3;

/// Number of lines taken up by each week of the grid
const WEEK_LINES: u16 = 2;

const ACS_HLINE: char = '─';

/// Draws one month as a grid of weeks: a localized month label, a localized
/// weekday header, and one row per week.  Today is bracketed; days with
/// events are starred & highlighted.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthView<'a, M> {
    profile: &'a LocaleProfile,
    marker: &'a M,
}

impl<'a, M: DayMarker> MonthView<'a, M> {
    pub(crate) fn new(profile: &'a LocaleProfile, marker: &'a M) -> MonthView<'a, M> {
        MonthView { profile, marker }
    }
}

impl<M: DayMarker> StatefulWidget for MonthView<'_, M> {
    type State = MonthWindow;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut MonthWindow) {
        let left = area.width.saturating_sub(GRID_WIDTH) / 2;
        let mut canvas = BufferCanvas::new(area, buf);
        let label = state.label(self.profile);
        let label_width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
        canvas.mvprint(
            0,
            area.width.saturating_sub(label_width) / 2,
            label,
            Some(MONTH_STYLE),
        );
        let weekdays = successors(Some(state.week_start()), |wd| Some(wd.next())).take(7);
        for (i, wd) in (0u16..).zip(weekdays) {
            let short = self
                .profile
                .weekday_name(wd)
                .chars()
                .take(3)
                .collect::<String>();
            canvas.mvprint(
                1,
                left + i * DAY_WIDTH,
                format!(" {short}"),
                Some(WEEKDAY_STYLE),
            );
        }
        canvas.hline(2, left, ACS_HLINE, GRID_WIDTH);
        let today = state.today();
        for (w, week) in (0u16..).zip(state.grid().weeks()) {
            let y = HEADER_LINES + w * WEEK_LINES;
            for (i, slot) in (0u16..).zip(week.slots()) {
                let Some(date) = slot else {
                    continue;
                };
                let busy = self.marker.event_count(date) > 0;
                canvas.mvprint(
                    y,
                    left + i * DAY_WIDTH,
                    day_cell(date, date == today, busy),
                    busy.then_some(BUSY_STYLE),
                );
            }
        }
    }
}

fn day_cell(date: Date, is_today: bool, busy: bool) -> String {
    if is_today {
        format!("[{:2}]", date.day())
    } else if busy {
        format!(" {:2}*", date.day())
    } else {
        format!(" {:2} ", date.day())
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // grid's area, though we need to be sure that the Rect passed to
            // the Paragraph is entirely within the frame lest a panic result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use time::macros::date;
    use time::Weekday::Sunday;

    struct Busy(Vec<Date>);

    impl DayMarker for Busy {
        fn event_count(&self, date: Date) -> usize {
            self.0.iter().filter(|&&d| d == date).count()
        }
    }

    #[test]
    fn test_render_month() {
        let mut window =
            MonthWindow::new(date!(2023 - 02 - 14), Sunday);
        let marker = Busy(vec![date!(2023 - 02 - 02), date!(2023 - 02 - 14)]);
        let view = MonthView::new(Locale::English.profile(), &marker);
        let area = Rect::new(0, 0, 60, 13);
        let mut buffer = Buffer::empty(area);
        view.render(area, &mut buffer, &mut window);
        let mut expected = Buffer::with_lines([
            "                       February 2023                        ",
            "        Sun    Mon    Tue    Wed    Thu    Fri    Sat       ",
            "       ──────────────────────────────────────────────       ",
            "                              1      2*     3      4        ",
            "                                                            ",
            "         5      6      7      8      9     10     11        ",
            "                                                            ",
            "        12     13    [14]    15     16     17     18        ",
            "                                                            ",
            "        19     20     21     22     23     24     25        ",
            "                                                            ",
            "        26     27     28                                    ",
            "                                                            ",
        ]);
        expected.set_style(Rect::new(23, 0, 13, 1), MONTH_STYLE);
        for i in 0..7u16 {
            expected.set_style(Rect::new(7 + i * 7, 1, 4, 1), WEEKDAY_STYLE);
        }
        expected.set_style(Rect::new(35, 3, 4, 1), BUSY_STYLE);
        expected.set_style(Rect::new(21, 7, 4, 1), BUSY_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_render_localized_header() {
        let mut window = MonthWindow::new(date!(2023 - 02 - 14), Sunday);
        let marker = Busy(Vec::new());
        let view = MonthView::new(Locale::Italian.profile(), &marker);
        let area = Rect::new(0, 0, 60, 13);
        let mut buffer = Buffer::empty(area);
        view.render(area, &mut buffer, &mut window);
        let mut expected = Buffer::with_lines([
            "                       Febbraio 2023                        ",
            "        Dom    Lun    Mar    Mer    Gio    Ven    Sab       ",
            "       ──────────────────────────────────────────────       ",
            "                              1      2      3      4        ",
            "                                                            ",
            "         5      6      7      8      9     10     11        ",
            "                                                            ",
            "        12     13    [14]    15     16     17     18        ",
            "                                                            ",
            "        19     20     21     22     23     24     25        ",
            "                                                            ",
            "        26     27     28                                    ",
            "                                                            ",
        ]);
        expected.set_style(Rect::new(23, 0, 13, 1), MONTH_STYLE);
        for i in 0..7u16 {
            expected.set_style(Rect::new(7 + i * 7, 1, 4, 1), WEEKDAY_STYLE);
        }
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_render_in_tight_area_does_not_panic() {
        let mut window = MonthWindow::new(date!(2021 - 05 - 15), Sunday);
        let marker = Busy(Vec::new());
        let view = MonthView::new(Locale::English.profile(), &marker);
        let area = Rect::new(0, 0, 20, 4);
        let mut buffer = Buffer::empty(area);
        view.render(area, &mut buffer, &mut window);
    }
}
