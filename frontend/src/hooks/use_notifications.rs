use std::rc::Rc;

use fms_core::{AppConfig, Notification, NotificationQueue, NotificationSink};
use shared::Severity;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Snackbar stack shared by every page
#[derive(Debug, Clone, PartialEq)]
pub struct SnackbarState {
    queue: NotificationQueue,
}

pub enum SnackbarAction {
    Push { message: String, severity: Severity },
    Dismiss(u64),
}

impl Reducible for SnackbarState {
    type Action = SnackbarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = self.queue.clone();
        match action {
            SnackbarAction::Push { message, severity } => {
                queue.push(message, severity);
            }
            SnackbarAction::Dismiss(id) => {
                if !queue.dismiss(id) {
                    return self;
                }
            }
        }
        Rc::new(Self { queue })
    }
}

/// Notification sink that feeds the snackbar stack
#[derive(Clone, PartialEq)]
pub struct SnackbarNotifier {
    dispatcher: UseReducerDispatcher<SnackbarState>,
}

impl NotificationSink for SnackbarNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        Logger::debug_with_component("Snackbar", &format!("{}: {}", severity, message));
        self.dispatcher.dispatch(SnackbarAction::Push {
            message: message.to_string(),
            severity,
        });
    }
}

pub struct UseNotificationsResult {
    pub notifications: Vec<Notification>,
    pub notifier: SnackbarNotifier,
    pub on_dismiss: Callback<u64>,
}

#[hook]
pub fn use_notifications(config: &AppConfig) -> UseNotificationsResult {
    let queue = config.notification_queue();
    let state = use_reducer(move || SnackbarState { queue });

    let on_dismiss = {
        let dispatcher = state.dispatcher();
        use_callback((), move |id: u64, _| dispatcher.dispatch(SnackbarAction::Dismiss(id)))
    };

    UseNotificationsResult {
        notifications: state.queue.visible().cloned().collect(),
        notifier: SnackbarNotifier {
            dispatcher: state.dispatcher(),
        },
        on_dismiss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(max_visible: usize) -> Rc<SnackbarState> {
        Rc::new(SnackbarState {
            queue: NotificationQueue::new(max_visible, 3000),
        })
    }

    fn push(state: Rc<SnackbarState>, message: &str) -> Rc<SnackbarState> {
        state.reduce(SnackbarAction::Push {
            message: message.to_string(),
            severity: Severity::Success,
        })
    }

    #[test]
    fn test_push_keeps_newest_three() {
        let mut state = state_with(3);
        for message in ["one", "two", "three", "four"] {
            state = push(state, message);
        }
        let messages: Vec<_> = state.queue.visible().map(|n| n.message.clone()).collect();
        assert_eq!(messages, vec!["two", "three", "four"]);
    }

    #[test]
    fn test_dismiss_unknown_id_keeps_state() {
        let state = push(state_with(3), "saved");
        let same = state.clone().reduce(SnackbarAction::Dismiss(99));
        assert!(Rc::ptr_eq(&state, &same));

        let id = state.queue.visible().next().map(|n| n.id).unwrap();
        let dismissed = state.reduce(SnackbarAction::Dismiss(id));
        assert!(dismissed.queue.is_empty());
    }
}
