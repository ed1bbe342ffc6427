use crate::calendar::DayMarker;
use std::collections::BTreeMap;
use time::{Date, OffsetDateTime};

/// One titled interval, displayed on the day its start falls on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Event {
    pub(crate) id: u32,
    pub(crate) title: String,
    pub(crate) start: OffsetDateTime,
    pub(crate) end: OffsetDateTime,
}

/// Read-only snapshot of the session's events, ordered by start time, with
/// a prebuilt day index for the grid's lookups.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct EventBook {
    events: Vec<Event>,
    by_day: BTreeMap<Date, Vec<usize>>,
}

impl EventBook {
    pub(crate) fn new(mut events: Vec<Event>) -> EventBook {
        events.sort_by_key(|ev| ev.start);
        let mut by_day: BTreeMap<Date, Vec<usize>> = BTreeMap::new();
        for (i, ev) in events.iter().enumerate() {
            by_day.entry(ev.start.date()).or_default().push(i);
        }
        EventBook { events, by_day }
    }

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The events starting on `date`, in start order.
    pub(crate) fn on_day(&self, date: Date) -> impl Iterator<Item = &Event> + '_ {
        self.by_day
            .get(&date)
            .into_iter()
            .flatten()
            .map(|&i| &self.events[i])
    }
}

impl DayMarker for EventBook {
    fn event_count(&self, date: Date) -> usize {
        self.by_day.get(&date).map_or(0, Vec::len)
    }
}
