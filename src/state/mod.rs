//! State Management
//!
//! Snapshot model, the renderer and presenter that own the page regions,
//! and the signal-backed regions themselves.

pub mod feedback;
pub mod roster;
pub mod snapshot;
pub mod view;

pub use feedback::{
    FeedbackKind, FeedbackMessage, FeedbackPresenter, MessageRegion, EMPTY_BANNER_CLASSES,
};
pub use roster::{
    ActivityCard, ListContent, ParticipantsView, RemovalTarget, RosterRegion, RosterRenderer,
    SelectorOption, LOAD_FAILED_TEXT,
};
pub use snapshot::{ActivityDetails, ActivitySnapshot};
pub use view::{create_view_state, Alerter, BrowserAlert, ViewState};
