//! Feedback Presenter
//!
//! Shows the outcome of a signup in the message region and hides it again
//! after a fixed delay. Only the most recent message counts: a new call
//! cancels the previous call's pending concealment before scheduling its own.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::timer::{ScheduledTask, Scheduler};

/// Styling of a feedback message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn css_class(self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        }
    }
}

/// Content of the message region
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub text: String,
    pub kind: FeedbackKind,
    pub visible: bool,
}

/// Classes of the message region before anything was shown
pub const EMPTY_BANNER_CLASSES: &str = "message hidden";

impl FeedbackMessage {
    /// Class list of the message region; concealment only adds `hidden`
    pub fn css_classes(&self) -> String {
        if self.visible {
            format!("message {}", self.kind.css_class())
        } else {
            format!("message {} hidden", self.kind.css_class())
        }
    }
}

/// Write side of the message region
pub trait MessageRegion {
    fn display(&self, message: FeedbackMessage);
}

/// Sole writer of the message region
pub struct FeedbackPresenter {
    region: Rc<dyn MessageRegion>,
    scheduler: Rc<dyn Scheduler>,
    dismiss_after: Duration,
    pending: RefCell<Option<ScheduledTask>>,
}

impl FeedbackPresenter {
    pub fn new(
        region: Rc<dyn MessageRegion>,
        scheduler: Rc<dyn Scheduler>,
        dismiss_after: Duration,
    ) -> Self {
        Self {
            region,
            scheduler,
            dismiss_after,
            pending: RefCell::new(None),
        }
    }

    /// Show a message, replacing whatever is displayed
    pub fn show(&self, text: impl Into<String>, kind: FeedbackKind) {
        let previous = self.pending.borrow_mut().take();
        if let Some(task) = previous {
            task.cancel();
        }

        let message = FeedbackMessage {
            text: text.into(),
            kind,
            visible: true,
        };
        self.region.display(message.clone());

        let region = Rc::clone(&self.region);
        let concealed = FeedbackMessage {
            visible: false,
            ..message
        };
        let task = self.scheduler.schedule(
            self.dismiss_after,
            Box::new(move || region.display(concealed)),
        );
        *self.pending.borrow_mut() = Some(task);
    }
}
