//! View State
//!
//! Reactive regions of the page backed by Leptos signals. Creating the view
//! state yields two halves: read-only signals that components subscribe to,
//! and one writer per region that is handed to the component owning it.

use leptos::*;

use super::feedback::{FeedbackMessage, MessageRegion};
use super::roster::{ListContent, RosterRegion, SelectorOption};

/// Read side of every region, provided to the component tree
#[derive(Clone, Copy)]
pub struct ViewState {
    pub list: ReadSignal<ListContent>,
    pub options: ReadSignal<Vec<SelectorOption>>,
    pub message: ReadSignal<Option<FeedbackMessage>>,
}

/// Write side of the list and selector regions
#[derive(Clone, Copy)]
pub struct SignalRosterRegion {
    list: WriteSignal<ListContent>,
    options: WriteSignal<Vec<SelectorOption>>,
}

/// Write side of the message region
#[derive(Clone, Copy)]
pub struct SignalMessageRegion {
    message: WriteSignal<Option<FeedbackMessage>>,
}

/// Create the page regions
pub fn create_view_state() -> (ViewState, SignalRosterRegion, SignalMessageRegion) {
    let (list, set_list) = create_signal(ListContent::Loading);
    let (options, set_options) = create_signal(Vec::new());
    let (message, set_message) = create_signal(None);

    (
        ViewState {
            list,
            options,
            message,
        },
        SignalRosterRegion {
            list: set_list,
            options: set_options,
        },
        SignalMessageRegion {
            message: set_message,
        },
    )
}

impl RosterRegion for SignalRosterRegion {
    fn replace_list(&self, content: ListContent) {
        self.list.set(content);
    }

    fn replace_options(&self, options: Vec<SelectorOption>) {
        self.options.set(options);
    }
}

impl MessageRegion for SignalMessageRegion {
    fn display(&self, message: FeedbackMessage) {
        self.message.set(Some(message));
    }
}

/// Blocking user-facing alert
pub trait Alerter {
    fn alert(&self, message: &str);
}

/// `window.alert` implementation
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

impl Alerter for BrowserAlert {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(text = message, "no window available for alert");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            tracing::warn!(error = ?e, text = message, "alert failed");
        }
    }
}
