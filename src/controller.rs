//! App Controller
//!
//! Owns the refresh cycle and routes mutation outcomes:
//!
//! - `refresh` fetches a snapshot and hands it to the renderer
//! - a successful mutation triggers exactly one refresh
//! - a failed signup goes to the feedback banner, a failed removal to an alert
//!
//! Refreshes are never coalesced or cancelled. Each one takes a ticket from
//! a monotonic counter; a fetch that completes after a newer ticket was
//! already applied is discarded, so the most recently issued refresh wins
//! regardless of completion order.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::api::{
    Endpoints, FailureOrigin, MutationDispatcher, Outcome, SnapshotFetcher, Transport,
};
use crate::state::{
    Alerter, FeedbackKind, FeedbackPresenter, MessageRegion, RemovalTarget, RosterRegion,
    RosterRenderer,
};
use crate::timer::Scheduler;

/// Shown when the signup form is submitted incomplete
pub const INCOMPLETE_FORM: &str = "Please enter an email and select an activity.";

/// Whether a fetch-and-render cycle is in flight
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Refreshing,
}

/// How a refresh ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshStatus {
    Rendered { activities: usize },
    Failed,
    /// A newer refresh was applied first; this one was dropped
    Superseded,
}

/// Collaborators wired into the controller
pub struct ControllerParts {
    pub transport: Rc<dyn Transport>,
    pub endpoints: Endpoints,
    pub roster: Rc<dyn RosterRegion>,
    pub messages: Rc<dyn MessageRegion>,
    pub scheduler: Rc<dyn Scheduler>,
    pub alerter: Rc<dyn Alerter>,
    pub dismiss_after: Duration,
}

struct Inner {
    fetcher: SnapshotFetcher,
    dispatcher: MutationDispatcher,
    renderer: RosterRenderer,
    presenter: FeedbackPresenter,
    alerter: Rc<dyn Alerter>,
    issued: Cell<u64>,
    applied: Cell<u64>,
    in_flight: Cell<usize>,
}

/// Cheap to clone; every clone drives the same page
#[derive(Clone)]
pub struct AppController {
    inner: Rc<Inner>,
}

impl AppController {
    pub fn new(parts: ControllerParts) -> Self {
        let ControllerParts {
            transport,
            endpoints,
            roster,
            messages,
            scheduler,
            alerter,
            dismiss_after,
        } = parts;

        Self {
            inner: Rc::new(Inner {
                fetcher: SnapshotFetcher::new(Rc::clone(&transport), endpoints.clone()),
                dispatcher: MutationDispatcher::new(transport, endpoints),
                renderer: RosterRenderer::new(roster),
                presenter: FeedbackPresenter::new(messages, scheduler, dismiss_after),
                alerter,
                issued: Cell::new(0),
                applied: Cell::new(0),
                in_flight: Cell::new(0),
            }),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.inner.in_flight.get() > 0 {
            Phase::Refreshing
        } else {
            Phase::Idle
        }
    }

    /// Fetch the snapshot and rebuild the list and selector
    pub async fn refresh(&self) -> RefreshStatus {
        let inner = &self.inner;
        let ticket = inner.issued.get() + 1;
        inner.issued.set(ticket);
        inner.in_flight.set(inner.in_flight.get() + 1);

        let result = inner.fetcher.fetch_snapshot().await;
        inner.in_flight.set(inner.in_flight.get() - 1);

        if ticket < inner.applied.get() {
            tracing::debug!(
                ticket,
                applied = inner.applied.get(),
                "discarding superseded refresh"
            );
            return RefreshStatus::Superseded;
        }
        inner.applied.set(ticket);

        match result {
            Ok(snapshot) => {
                inner.renderer.render(&snapshot);
                tracing::debug!(ticket, activities = snapshot.len(), "rendered snapshot");
                RefreshStatus::Rendered {
                    activities: snapshot.len(),
                }
            }
            Err(e) => {
                tracing::error!(ticket, error = %e, "failed to load activities");
                inner.renderer.render_failure();
                RefreshStatus::Failed
            }
        }
    }

    /// Handle a signup form submission
    pub async fn submit_signup(&self, activity: &str, email: &str) -> Outcome {
        let email = email.trim();
        if activity.is_empty() || email.is_empty() {
            self.inner.presenter.show(INCOMPLETE_FORM, FeedbackKind::Error);
            return Outcome::Failure {
                detail: INCOMPLETE_FORM.to_string(),
                origin: FailureOrigin::Validation,
            };
        }

        let outcome = self.inner.dispatcher.signup(activity, email).await;
        match &outcome {
            Outcome::Success { message } => {
                self.inner.presenter.show(message.as_str(), FeedbackKind::Success);
                self.refresh().await;
            }
            Outcome::Failure { detail, .. } => {
                self.inner.presenter.show(detail.as_str(), FeedbackKind::Error);
            }
        }
        outcome
    }

    /// Handle a click on a participant's removal control
    pub async fn remove_participant(&self, target: &RemovalTarget) -> Outcome {
        let outcome = self
            .inner
            .dispatcher
            .unregister(&target.activity, &target.email)
            .await;

        match &outcome {
            Outcome::Success { .. } => {
                self.refresh().await;
            }
            Outcome::Failure { detail, .. } => self.inner.alerter.alert(detail),
        }
        outcome
    }
}
