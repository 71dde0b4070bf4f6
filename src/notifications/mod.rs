//! Notification store
//!
//! Holds the session's notifications and their read state. Read state only
//! moves from unread to read. After every acknowledgment the unread count is
//! recomputed from the records and pushed to subscribers before returning.

pub mod seed;

use crate::models::{Notification, NotificationCategory};
use tokio::sync::watch;
use tracing::{debug, info};

/// Receives the unread count after each acknowledgment
pub trait UnreadSubscriber: Send + Sync {
    fn unread_changed(&self, unread: usize);
}

impl<F> UnreadSubscriber for F
where
    F: Fn(usize) + Send + Sync,
{
    fn unread_changed(&self, unread: usize) {
        self(unread)
    }
}

pub struct NotificationStore {
    notifications: Vec<Notification>,
    subscribers: Vec<Box<dyn UnreadSubscriber>>,
    unread_tx: watch::Sender<usize>,
}

impl NotificationStore {
    /// Build a store from the session's initial records, keeping their order
    pub fn new(notifications: Vec<Notification>) -> Self {
        let unread = count_unread(&notifications);
        let (unread_tx, _) = watch::channel(unread);

        info!(total = notifications.len(), unread, "Notification store seeded");

        Self {
            notifications,
            subscribers: Vec::new(),
            unread_tx,
        }
    }

    /// Register a callback for unread-count broadcasts
    pub fn subscribe(&mut self, subscriber: impl UnreadSubscriber + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Channel view of the same broadcasts; starts at the current count
    pub fn watch_unread(&self) -> watch::Receiver<usize> {
        self.unread_tx.subscribe()
    }

    // =============================
    // Read views
    // =============================

    /// All records in insertion order
    pub fn list_all(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Unread records in insertion order
    pub fn list_unread(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| !n.read)
    }

    pub fn list_by_category(
        &self,
        category: NotificationCategory,
    ) -> impl Iterator<Item = &Notification> {
        self.notifications
            .iter()
            .filter(move |n| n.category == category)
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn unread_count(&self) -> usize {
        count_unread(&self.notifications)
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    // =============================
    // Acknowledgment
    // =============================

    /// Mark one record read. Unknown or already-read ids change nothing,
    /// but the current count is still broadcast.
    ///
    /// Returns whether a record flipped from unread to read.
    pub fn mark_read(&mut self, id: &str) -> bool {
        let mut changed = false;
        for notification in self.notifications.iter_mut().filter(|n| n.id == id) {
            if !notification.read {
                notification.read = true;
                changed = true;
            }
        }

        if changed {
            info!(notification_id = id, "Notification marked read");
        } else {
            debug!(notification_id = id, "mark_read had no effect");
        }

        self.broadcast();
        changed
    }

    /// Mark every record read. Returns how many were unread.
    pub fn mark_all_read(&mut self) -> usize {
        let mut flipped = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            flipped += 1;
        }

        info!(flipped, "All notifications marked read");

        self.broadcast();
        flipped
    }

    fn broadcast(&self) {
        let unread = self.unread_count();

        for subscriber in &self.subscribers {
            subscriber.unread_changed(unread);
        }
        self.unread_tx.send_replace(unread);

        debug!(unread, subscribers = self.subscribers.len(), "Unread count broadcast");
    }
}

fn count_unread(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}
