//! App-wide yewdux store.
//!
//! # Design
//! - The notification queue is the only process-wide state; server data lives in the query cache.
//! - Reducers stay DOM-free so they can be exercised natively.

use crate::core::notifications::{NotificationId, NotificationProps, NotificationQueue, ScheduledRemoval};
#[cfg(target_arch = "wasm32")]
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Toast notifications awaiting display or expiry.
    pub notifications: NotificationQueue,
}

impl AppStore {
    /// Queue a notification.
    pub fn notify(&mut self, props: NotificationProps, now_ms: u64) -> ScheduledRemoval {
        self.notifications.enqueue(props, now_ms)
    }

    /// Dismiss a notification by identifier.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }
}

/// Dispatch handle for the global store.
#[cfg(target_arch = "wasm32")]
pub(crate) fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::<AppStore>::new()
}

/// Queue a notification using the browser clock.
#[cfg(target_arch = "wasm32")]
pub(crate) fn notify(dispatch: &Dispatch<AppStore>, props: NotificationProps) {
    use crate::core::clock::{Clock, SystemClock};

    let now = SystemClock.now_ms();
    dispatch.reduce_mut(move |store| {
        store.notify(props, now);
    });
}

#[cfg(test)]
mod tests {
    use super::AppStore;
    use crate::core::notifications::NotificationProps;

    #[test]
    fn store_notify_and_dismiss_round_through_queue() {
        let mut store = AppStore::default();
        let scheduled = store.notify(NotificationProps::success("Saved", "All good"), 0);
        store.notify(NotificationProps::failure("Failed", "Nope"), 1);
        assert_eq!(store.notifications.entries().len(), 1);
        assert!(!store.dismiss(scheduled.id));
        let latest = store.notifications.entries()[0].id;
        assert!(store.dismiss(latest));
        assert!(store.notifications.is_empty());
    }
}
