//! User-visible notifications.
//!
//! Domain code reports outcomes through [`NotificationSink`] and never
//! waits for an acknowledgement. The frontend renders them as a snackbar
//! stack backed by [`NotificationQueue`].

use shared::Severity;
use std::cell::RefCell;
use std::collections::VecDeque;

pub const DEFAULT_MAX_VISIBLE: usize = 3;
pub const DEFAULT_AUTO_HIDE_MS: u32 = 3000;

/// Fire-and-forget receiver of user-visible messages
pub trait NotificationSink {
    fn notify(&self, message: &str, severity: Severity);
}

/// Remembers every notification it receives
#[derive(Debug, Default)]
pub struct RecordingNotificationSink {
    received: RefCell<Vec<(String, Severity)>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<(String, Severity)> {
        self.received.borrow().clone()
    }

    pub fn last(&self) -> Option<(String, Severity)> {
        self.received.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.received.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.received.borrow().is_empty()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, message: &str, severity: Severity) {
        self.received.borrow_mut().push((message.to_string(), severity));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub auto_hide_ms: u32,
}

/// Snackbar stack: newest at the end, oldest evicted past `max_visible`
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationQueue {
    visible: VecDeque<Notification>,
    max_visible: usize,
    auto_hide_ms: u32,
    next_id: u64,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VISIBLE, DEFAULT_AUTO_HIDE_MS)
    }
}

impl NotificationQueue {
    pub fn new(max_visible: usize, auto_hide_ms: u32) -> Self {
        Self {
            visible: VecDeque::new(),
            max_visible: max_visible.max(1),
            auto_hide_ms,
            next_id: 1,
        }
    }

    /// Add a notification and return its id
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.visible.push_back(Notification {
            id,
            message: message.into(),
            severity,
            auto_hide_ms: self.auto_hide_ms,
        });
        while self.visible.len() > self.max_visible {
            self.visible.pop_front();
        }
        id
    }

    /// Returns whether anything was removed
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.visible.len();
        self.visible.retain(|n| n.id != id);
        self.visible.len() != before
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
