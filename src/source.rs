use crate::events::{Event, EventBook};
use std::convert::Infallible;
use std::time::Duration;
use time::OffsetDateTime;

/// Whatever supplies the session's events.  Fetched exactly once at
/// startup; the caller never retries or validates the result.
pub(crate) trait EventSource {
    type Error: std::error::Error;

    async fn fetch_events(&self) -> Result<Vec<Event>, Self::Error>;
}

/// Folds the one-time fetch into the display's snapshot.  A failed source
/// degrades to an empty snapshot plus a flag the status line reports.
pub(crate) async fn load_events<S: EventSource>(source: &S) -> (EventBook, bool) {
    match source.fetch_events().await {
        Ok(events) => (EventBook::new(events), false),
        Err(e) => {
            log::warn!("event source failed: {e}");
            (EventBook::default(), true)
        }
    }
}

/// Synthetic source standing in for a real events API: one event per day
/// starting today.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DemoSource {
    count: u32,
    now: OffsetDateTime,
}

impl DemoSource {
    pub(crate) fn new(count: u32, now: OffsetDateTime) -> DemoSource {
        DemoSource { count, now }
    }
}

impl EventSource for DemoSource {
    type Error = Infallible;

    async fn fetch_events(&self) -> Result<Vec<Event>, Infallible> {
        // pretend the events came from somewhere remote
        tokio::time::sleep(Duration::from_millis(100)).await;
        let events = (0..self.count)
            .map(|i| {
                let start = self.now + time::Duration::days(i64::from(i));
                Event {
                    id: i,
                    title: format!("Event {}", i + 1),
                    start,
                    end: start + time::Duration::hours(i64::from(i % 10)),
                }
            })
            .collect::<Vec<_>>();
        log::debug!("generated {} demo events", events.len());
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;
    use time::macros::datetime;

    #[tokio::test]
    async fn test_demo_source() {
        let now = datetime!(2025 - 01 - 22 08:30 UTC);
        let events = DemoSource::new(10, now).fetch_events().await.unwrap();
        assert_eq!(events.len(), 10);
        for (i, ev) in (0u32..).zip(&events) {
            assert_eq!(ev.id, i);
            assert_eq!(ev.title, format!("Event {}", i + 1));
            assert_eq!(ev.start, now + time::Duration::days(i64::from(i)));
            assert!(ev.end >= ev.start);
        }
        assert_eq!(events[3].end - events[3].start, time::Duration::hours(3));
    }

    #[tokio::test]
    async fn test_load_events() {
        let now = datetime!(2025 - 01 - 22 08:30 UTC);
        let (book, degraded) = load_events(&DemoSource::new(4, now)).await;
        assert_eq!(book.len(), 4);
        assert!(!degraded);
    }

    #[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
    #[error("the events are on strike")]
    struct BrokenSourceError;

    struct BrokenSource;

    impl EventSource for BrokenSource {
        type Error = BrokenSourceError;

        async fn fetch_events(&self) -> Result<Vec<Event>, BrokenSourceError> {
            Err(BrokenSourceError)
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_degrades_to_empty() {
        let (book, degraded) = load_events(&BrokenSource).await;
        assert!(book.is_empty());
        assert!(degraded);
    }
}
