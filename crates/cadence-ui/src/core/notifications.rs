//! Bounded, time-expiring notification queue backing the toast host.
//!
//! # Design
//! - The queue is plain state; timers live in the host and call back into [`NotificationQueue::expire`].
//! - Identifiers come from a per-queue sequence so independent queues (and tests) never share state.
//! - The cap drops the oldest entries outright rather than hiding them.

use crate::core::config::NotificationConfig;
use std::fmt;

/// Largest identifier handed out before the sequence wraps back to 1.
pub const MAX_NOTIFICATION_ID: u64 = (1 << 53) - 1;

/// Longest delay a browser timer honours; larger values fire immediately.
pub const MAX_TIMER_DELAY_MS: u32 = 2_147_483_647;

/// Identifier assigned to a queued notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic identifier source; never yields zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    /// Start a sequence whose next identifier follows `last`.
    #[must_use]
    pub const fn starting_after(last: u64) -> Self {
        Self { last }
    }

    /// Advance and return the next identifier.
    pub const fn next_id(&mut self) -> NotificationId {
        self.last = if self.last >= MAX_NOTIFICATION_ID {
            1
        } else {
            self.last + 1
        };
        NotificationId(self.last)
    }
}

/// Visual treatment for a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationVariant {
    /// Neutral acknowledgement.
    #[default]
    Default,
    /// Failure styling.
    Destructive,
}

/// Optional call-to-action rendered inside a toast.
///
/// The action carries no handler of its own: activating it dismisses the
/// notification, the same as the close button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationAction {
    /// Button label.
    pub label: String,
    /// Accessible description of what the action does.
    pub alt_text: String,
}

/// Notification payload supplied by callers, without an identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationProps {
    /// Optional heading.
    pub title: Option<String>,
    /// Optional body text.
    pub description: Option<String>,
    /// Optional call-to-action.
    pub action: Option<NotificationAction>,
    /// Visual treatment.
    pub variant: NotificationVariant,
}

impl NotificationProps {
    /// Neutral notification with a title and description.
    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            ..Self::default()
        }
    }

    /// Destructive notification with a title and description.
    #[must_use]
    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            action: None,
            variant: NotificationVariant::Destructive,
        }
    }
}

/// A live notification in the queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Assigned identifier.
    pub id: NotificationId,
    /// Caller-supplied payload.
    pub props: NotificationProps,
    /// Millisecond timestamp after which the entry is removed.
    pub expires_at_ms: u64,
}

impl Notification {
    /// Timer delay until this entry expires, clamped to what browser timers accept.
    #[must_use]
    pub fn timer_delay_ms(&self, now_ms: u64) -> u32 {
        let remaining = self.expires_at_ms.saturating_sub(now_ms);
        u32::try_from(remaining)
            .unwrap_or(MAX_TIMER_DELAY_MS)
            .min(MAX_TIMER_DELAY_MS)
    }
}

/// Removal the host must arm a timer for after an enqueue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledRemoval {
    /// Entry the timer belongs to.
    pub id: NotificationId,
    /// Delay from enqueue until removal.
    pub delay_ms: u64,
}

/// Ordered, capped list of active notifications (oldest first).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
    ids: IdSequence,
    config: NotificationConfig,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(NotificationConfig::default())
    }
}

impl NotificationQueue {
    /// Empty queue using the supplied limits.
    #[must_use]
    pub fn new(config: NotificationConfig) -> Self {
        Self::with_sequence(config, IdSequence::default())
    }

    /// Empty queue drawing identifiers from an existing sequence.
    #[must_use]
    pub const fn with_sequence(config: NotificationConfig, ids: IdSequence) -> Self {
        Self {
            entries: Vec::new(),
            ids,
            config,
        }
    }

    /// Active notifications in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Whether no notification is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a notification, enforce the cap, and report the removal to schedule.
    pub fn enqueue(&mut self, props: NotificationProps, now_ms: u64) -> ScheduledRemoval {
        let id = self.ids.next_id();
        let delay_ms = self.config.remove_delay_ms;
        self.entries.push(Notification {
            id,
            props,
            expires_at_ms: now_ms.saturating_add(delay_ms),
        });
        let limit = self.config.limit.max(1);
        if self.entries.len() > limit {
            let overflow = self.entries.len() - limit;
            self.entries.drain(0..overflow);
        }
        ScheduledRemoval { id, delay_ms }
    }

    /// Replace the payload of a live notification.
    pub fn update(&mut self, id: NotificationId, props: NotificationProps) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) else {
            return false;
        };
        entry.props = props;
        true
    }

    /// Remove a notification before its deadline.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Remove every notification.
    pub fn dismiss_all(&mut self) {
        self.entries.clear();
    }

    /// Drop entries whose deadline has passed; returns how many were removed.
    pub fn expire(&mut self, now_ms: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.expires_at_ms > now_ms);
        before - self.entries.len()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|entry| entry.expires_at_ms).min()
    }
}
