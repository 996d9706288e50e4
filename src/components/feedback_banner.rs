//! Feedback Banner Component
//!
//! Reads the message region. Concealed messages keep their text and only
//! gain the `hidden` class.

use leptos::*;

use crate::state::{ViewState, EMPTY_BANNER_CLASSES};

/// Message region
#[component]
pub fn FeedbackBanner() -> impl IntoView {
    let state = use_context::<ViewState>().expect("ViewState not found");
    let message = state.message;

    let class = move || {
        message
            .get()
            .map(|m| m.css_classes())
            .unwrap_or_else(|| EMPTY_BANNER_CLASSES.to_string())
    };
    let text = move || message.get().map(|m| m.text).unwrap_or_default();

    view! {
        <div id="message" class=class>{text}</div>
    }
}
