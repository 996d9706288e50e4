//! Activity Card Component
//!
//! One activity with its schedule, remaining capacity and roster.

use leptos::*;

use crate::controller::AppController;
use crate::state::roster::EMPTY_ROSTER_TEXT;
use crate::state::{ActivityCard, ParticipantsView, RemovalTarget};

/// Activity card component
#[component]
pub fn ActivityCardView(card: ActivityCard) -> impl IntoView {
    let ActivityCard {
        name,
        description,
        schedule,
        spots_left,
        participants,
    } = card;

    let roster = match participants {
        ParticipantsView::Empty => view! {
            <p class="participants-empty">{EMPTY_ROSTER_TEXT}</p>
        }
        .into_view(),
        ParticipantsView::Roster(rows) => view! {
            <ul class="participants-list">
                {rows
                    .into_iter()
                    .map(|target| view! { <ParticipantRow target=target /> })
                    .collect_view()}
            </ul>
        }
        .into_view(),
    };

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{description}</p>
            <p><strong>"Schedule: "</strong>{schedule}</p>
            <p><strong>"Availability: "</strong>{format!("{spots_left} spots left")}</p>

            <div class="participants-section">
                <h5>"Participants"</h5>
                {roster}
            </div>
        </div>
    }
}

/// A roster row with its removal control
#[component]
fn ParticipantRow(target: RemovalTarget) -> impl IntoView {
    let controller = use_context::<AppController>().expect("AppController not found");
    let email = target.email.clone();
    let tag_activity = target.activity.clone();
    let tag_email = target.email.clone();

    let on_remove = move |_| {
        let controller = controller.clone();
        let target = target.clone();
        spawn_local(async move {
            controller.remove_participant(&target).await;
        });
    };

    view! {
        <li class="participant-item">
            <span class="participant-email">{email}</span>
            <button
                type="button"
                class="delete-btn"
                title="Remove participant"
                data-activity=tag_activity
                data-email=tag_email
                on:click=on_remove
            >
                "✕"
            </button>
        </li>
    }
}
