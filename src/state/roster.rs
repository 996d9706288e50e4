//! Roster Renderer
//!
//! Turns a snapshot into the two page regions it owns: the list of activity
//! cards and the dynamic options of the activity selector. Every render
//! replaces both regions wholesale; nothing is carried over from the
//! previous snapshot.

use std::rc::Rc;

use super::snapshot::ActivitySnapshot;

/// Label of the static selector option that is never replaced
pub const PLACEHOLDER_LABEL: &str = "-- Select an activity --";

/// Shown instead of a roster when an activity has no participants
pub const EMPTY_ROSTER_TEXT: &str = "No participants yet";

/// Shown in the list region when the snapshot could not be loaded
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// Identifies the participant a removal control acts on
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RemovalTarget {
    pub activity: String,
    pub email: String,
}

/// Participant section of a card
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParticipantsView {
    Empty,
    Roster(Vec<RemovalTarget>),
}

/// One activity card
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: ParticipantsView,
}

/// One dynamic option of the activity selector
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorOption {
    pub value: String,
    pub label: String,
}

/// Content of the activity list region
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListContent {
    Loading,
    Cards(Vec<ActivityCard>),
    LoadFailed(String),
}

/// Write side of the list and selector regions
pub trait RosterRegion {
    fn replace_list(&self, content: ListContent);
    fn replace_options(&self, options: Vec<SelectorOption>);
}

/// Sole writer of the list and selector regions
pub struct RosterRenderer {
    region: Rc<dyn RosterRegion>,
}

impl RosterRenderer {
    pub fn new(region: Rc<dyn RosterRegion>) -> Self {
        Self { region }
    }

    /// Rebuild both regions from a snapshot
    pub fn render(&self, snapshot: &ActivitySnapshot) {
        self.region.replace_list(ListContent::Cards(build_cards(snapshot)));
        self.region.replace_options(build_options(snapshot));
    }

    /// Replace the list with a failure message. The selector keeps its options.
    pub fn render_failure(&self) {
        self.region
            .replace_list(ListContent::LoadFailed(LOAD_FAILED_TEXT.to_string()));
    }
}

/// Build one card per activity, in snapshot order
pub fn build_cards(snapshot: &ActivitySnapshot) -> Vec<ActivityCard> {
    snapshot
        .iter()
        .map(|(name, details)| {
            let participants = if details.participants.is_empty() {
                ParticipantsView::Empty
            } else {
                ParticipantsView::Roster(
                    details
                        .participants
                        .iter()
                        .map(|email| RemovalTarget {
                            activity: name.to_string(),
                            email: email.clone(),
                        })
                        .collect(),
                )
            };

            ActivityCard {
                name: name.to_string(),
                description: details.description.clone(),
                schedule: details.schedule.clone(),
                spots_left: details.spots_left(),
                participants,
            }
        })
        .collect()
}

/// Build one selector option per activity, in snapshot order
pub fn build_options(snapshot: &ActivitySnapshot) -> Vec<SelectorOption> {
    snapshot
        .iter()
        .map(|(name, _)| SelectorOption {
            value: name.to_string(),
            label: name.to_string(),
        })
        .collect()
}
