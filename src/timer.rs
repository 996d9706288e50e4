//! Timer Scheduling
//!
//! Deferred work on the event loop. The browser implementation is backed by
//! `gloo-timers`; tests drive a manual clock instead.

use gloo_timers::callback::Timeout;
use std::time::Duration;

/// Schedules a task to run once after a delay
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ScheduledTask;
}

/// Handle to a scheduled task. The task is cancelled when the handle is
/// dropped; cancelling a task that already ran does nothing.
#[must_use = "dropping a ScheduledTask cancels it"]
pub struct ScheduledTask {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ScheduledTask {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// `setTimeout`-backed scheduler
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ScheduledTask {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, task);
        // dropping a gloo Timeout clears it
        ScheduledTask::new(move || drop(timeout))
    }
}
