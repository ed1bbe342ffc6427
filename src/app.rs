use crate::calendar::{DayMarker, MonthView, MonthWindow};
use crate::events::EventBook;
use crate::help::Help;
use crate::locale::LocaleProfile;
use crate::theme::{BASE_STYLE, HINT_STYLE, TITLE_STYLE, WARN_STYLE};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, read};
use ratatui::{
    Terminal,
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    window: MonthWindow,
    events: EventBook,
    load_failed: bool,
    profile: &'static LocaleProfile,
    state: AppState,
}

impl App {
    pub(crate) fn new(
        window: MonthWindow,
        events: EventBook,
        load_failed: bool,
        profile: &'static LocaleProfile,
    ) -> App {
        App {
            window,
            events,
            load_failed,
            profile,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Calendar => match key {
                KeyCode::Char('l') | KeyCode::Right => self.next_month(),
                KeyCode::Char('h') | KeyCode::Left => self.previous_month(),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.window.jump_to_today();
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn next_month(&mut self) -> bool {
        self.window.advance().is_ok()
    }

    fn previous_month(&mut self) -> bool {
        self.window.retreat().is_ok()
    }

    fn status_line(&self) -> Line<'_> {
        let labels = &self.profile.labels;
        let caption = if self.load_failed {
            Span::styled(labels.events_unavailable, WARN_STYLE)
        } else {
            let today_events = self.events.event_count(self.window.today());
            if today_events > 0 {
                Span::raw(format!("{} ({today_events})", labels.day_has_events))
            } else {
                Span::raw(labels.day_no_events)
            }
        };
        Line::from_iter([
            Span::styled(
                format!("← {}   {} →", labels.previous_month, labels.next_month),
                HINT_STYLE,
            ),
            Span::raw("   "),
            caption,
        ])
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [title_area, cal_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        Line::styled(self.profile.labels.title, TITLE_STYLE)
            .centered()
            .render(title_area, buf);
        MonthView::new(self.profile, &self.events).render(cal_area, buf, &mut self.window);
        self.status_line().centered().render(status_area, buf);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Quitting,
}
