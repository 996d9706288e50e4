//! Activity List Component
//!
//! Cards are keyed by their full content, so a refresh only rebuilds the
//! cards that changed; the rest keep their nodes and click handlers.

use leptos::*;

use super::activity_card::ActivityCardView;
use crate::state::{ActivityCard, ListContent, ViewState};

#[derive(Clone, PartialEq)]
enum ListStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Activity list region
#[component]
pub fn ActivityList() -> impl IntoView {
    let state = use_context::<ViewState>().expect("ViewState not found");
    let list = state.list;

    let status = create_memo(move |_| match list.get() {
        ListContent::Loading => ListStatus::Loading,
        ListContent::Cards(_) => ListStatus::Ready,
        ListContent::LoadFailed(text) => ListStatus::Failed(text),
    });

    let cards = move || match list.get() {
        ListContent::Cards(cards) => cards,
        _ => Vec::new(),
    };

    view! {
        <div id="activities-list">
            {move || match status.get() {
                ListStatus::Loading => view! { <p>"Loading activities..."</p> }.into_view(),
                ListStatus::Failed(text) => view! { <p class="error">{text}</p> }.into_view(),
                ListStatus::Ready => view! {
                    <For
                        each=cards
                        key=|card: &ActivityCard| card.clone()
                        children=|card: ActivityCard| view! { <ActivityCardView card=card /> }
                    />
                }
                .into_view(),
            }}
        </div>
    }
}
