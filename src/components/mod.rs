//! UI Components
//!
//! Leptos components for the signup page.

pub mod activity_card;
pub mod activity_list;
pub mod feedback_banner;
pub mod signup_form;

pub use activity_card::ActivityCardView;
pub use activity_list::ActivityList;
pub use feedback_banner::FeedbackBanner;
pub use signup_form::SignupForm;
