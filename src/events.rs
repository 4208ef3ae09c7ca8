//! Booking change events
//!
//! The arbiter publishes a `BookingChanged` event after each committed write.
//! Court writes publish on the same channel, since the set of available
//! courts feeds every report's capacity and maximum revenue. Interested
//! collaborators subscribe to the broadcast channel; the only in-process
//! subscriber is the report-cache invalidator below.

use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::cache::ReportCache;

/// What happened to an appointment, or to the court set it books against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingEventKind {
    Created,
    Updated,
    Cancelled,
    /// A court was created, updated, toggled, or deleted. `id` is the
    /// court's id.
    CourtChanged,
}

/// Emitted after a successful booking or court write commits
#[derive(Debug, Clone, Copy)]
pub struct BookingChanged {
    pub kind: BookingEventKind,
    pub id: i32,
}

/// Create the booking event channel.
pub fn channel() -> broadcast::Sender<BookingChanged> {
    let (tx, _rx) = broadcast::channel(64);
    tx
}

/// Subscriber task that drops cached reports whenever a booking changes.
///
/// Runs until every sender is gone. Lagging behind is harmless: the reaction
/// to any event is a full invalidation, so missed events are covered by the
/// one that triggered the lag.
pub async fn start_report_invalidator(
    cache: ReportCache,
    mut rx: broadcast::Receiver<BookingChanged>,
) {
    loop {
        match rx.recv().await {
            Ok(event) => {
                debug!("Booking {:?} for appointment {}", event.kind, event.id);
                cache.invalidate_all();
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!("Report invalidator lagged by {} events", skipped);
                cache.invalidate_all();
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_reach_subscribers() {
        let tx = channel();
        let mut rx = tx.subscribe();

        tx.send(BookingChanged {
            kind: BookingEventKind::Created,
            id: 7,
        })
        .unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.kind, BookingEventKind::Created);
        assert_eq!(event.id, 7);
    }

    #[tokio::test]
    async fn send_without_subscribers_is_not_fatal() {
        let tx = channel();
        // No receiver; the arbiter ignores this error.
        assert!(tx
            .send(BookingChanged {
                kind: BookingEventKind::Cancelled,
                id: 1,
            })
            .is_err());
    }

    #[tokio::test]
    async fn invalidator_clears_the_cache() {
        let cache = ReportCache::new();
        let tx = channel();
        let task = tokio::spawn(start_report_invalidator(cache.clone(), tx.subscribe()));

        tx.send(BookingChanged {
            kind: BookingEventKind::Updated,
            id: 2,
        })
        .unwrap();

        drop(tx);
        task.await.unwrap();
        assert_eq!(cache.stats().daily_size, 0);
    }
}
