//! Notification surface.
//!
//! User-facing messages are emitted through the [`Notifier`] trait so that
//! controllers never touch an ambient/global provider. [`SnackbarQueue`] is
//! the queued implementation: a bounded set of visible notifications with
//! per-notification auto-expiry, and a FIFO backlog promoted as slots free.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;
use uuid::Uuid;

use crate::config::{MAX_VISIBLE_NOTIFICATIONS, NOTIFICATION_TIMEOUT_MS};

#[cfg(test)]
use mockall::automock;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    Left,
    Center,
    Right,
}

/// Screen anchor for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub vertical: Vertical,
    pub horizontal: Horizontal,
}

impl Position {
    /// The anchor every storefront workflow uses.
    pub const TOP_CENTER: Position = Position {
        vertical: Vertical::Top,
        horizontal: Horizontal::Center,
    };
}

/// A queued user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub position: Position,
    pub enqueued_at: DateTime<Utc>,
}

/// Anything a controller can emit notifications through.
#[cfg_attr(test, automock)]
pub trait Notifier: Send + Sync {
    /// Queue a notification; returns its id for early dismissal.
    fn enqueue(&self, message: &str, severity: Severity, position: Position) -> Uuid;
}

struct Active {
    notification: Notification,
    expires_at: Instant,
}

#[derive(Default)]
struct QueueState {
    visible: Vec<Active>,
    pending: VecDeque<Notification>,
}

/// Queued notification surface with bounded concurrent visibility.
///
/// At most `max_visible` notifications are shown at once; the rest wait in
/// enqueue order. A notification's expiry clock starts when it becomes
/// visible, and each expires independently of the others.
pub struct SnackbarQueue {
    max_visible: usize,
    timeout: Duration,
    state: Mutex<QueueState>,
}

impl SnackbarQueue {
    pub fn new(max_visible: usize, timeout: Duration) -> Self {
        Self {
            max_visible,
            timeout,
            state: Mutex::new(QueueState::default()),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            MAX_VISIBLE_NOTIFICATIONS,
            Duration::from_millis(NOTIFICATION_TIMEOUT_MS),
        )
    }

    /// Currently visible notifications, in enqueue order.
    ///
    /// Expired notifications are dropped and queued ones promoted before
    /// the snapshot is taken.
    pub fn visible(&self) -> Vec<Notification> {
        let mut state = self.lock();
        self.sweep(&mut state);
        state
            .visible
            .iter()
            .map(|active| active.notification.clone())
            .collect()
    }

    /// Number of notifications still waiting for a slot.
    pub fn pending_len(&self) -> usize {
        let mut state = self.lock();
        self.sweep(&mut state);
        state.pending.len()
    }

    /// Dismiss a notification ahead of its timeout, visible or pending.
    ///
    /// Returns whether anything was removed.
    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut state = self.lock();
        self.sweep(&mut state);

        let before = state.visible.len() + state.pending.len();
        state.visible.retain(|active| active.notification.id != id);
        state.pending.retain(|notification| notification.id != id);
        let removed = state.visible.len() + state.pending.len() < before;

        self.sweep(&mut state);
        removed
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, QueueState> {
        // A poisoned queue only means a panic mid-notify; the state itself
        // stays consistent.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Drop expired notifications and promote pending ones into free slots.
    fn sweep(&self, state: &mut QueueState) {
        let now = Instant::now();
        state.visible.retain(|active| active.expires_at > now);
        while state.visible.len() < self.max_visible {
            let Some(notification) = state.pending.pop_front() else {
                break;
            };
            state.visible.push(Active {
                notification,
                expires_at: now + self.timeout,
            });
        }
    }
}

impl Default for SnackbarQueue {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Notifier for SnackbarQueue {
    fn enqueue(&self, message: &str, severity: Severity, position: Position) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.to_string(),
            severity,
            position,
            enqueued_at: Utc::now(),
        };
        let id = notification.id;
        tracing::debug!(%id, ?severity, message, "notification enqueued");

        let mut state = self.lock();
        self.sweep(&mut state);
        if state.visible.len() < self.max_visible {
            state.visible.push(Active {
                notification,
                expires_at: Instant::now() + self.timeout,
            });
        } else {
            state.pending.push_back(notification);
        }
        id
    }
}
