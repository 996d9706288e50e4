//! # Mergington Signup
//!
//! Browser client for the Mergington High School activities service, built
//! with Leptos and compiled to WebAssembly.
//!
//! The page shows every activity with its roster, lets students sign up
//! through a form and lets staff remove participants. The client never
//! patches its view: every successful mutation is followed by a full
//! refetch of the activities snapshot and a re-render.
//!
//! ## Modules
//!
//! - [`api`]: transport seam, snapshot fetcher and mutation dispatcher
//! - [`state`]: snapshot model, roster renderer, feedback presenter, regions
//! - [`controller`]: the refresh cycle and outcome routing
//! - [`components`] and [`app`]: Leptos views
//! - [`config`], [`logging`], [`timer`]: supporting plumbing

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod state;
pub mod timer;

#[cfg(test)]
mod testing;

pub use api::{
    BrowserTransport, Endpoints, FailureOrigin, HttpReply, Mutation, MutationDispatcher, Outcome,
    SnapshotFetcher, Transport,
};
pub use config::{ClientConfig, ConfigError, LoggingConfig};
pub use controller::{AppController, ControllerParts, Phase, RefreshStatus};
pub use error::{FetchError, TransportError};
pub use state::{
    ActivityCard, ActivityDetails, ActivitySnapshot, FeedbackKind, FeedbackMessage,
    FeedbackPresenter, ListContent, RemovalTarget, RosterRenderer, SelectorOption,
};
pub use timer::{GlooScheduler, ScheduledTask, Scheduler};
