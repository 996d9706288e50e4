//! Request targets for the activities service.

use super::dispatcher::Mutation;

/// Builds request URLs relative to a base
#[derive(Clone, Debug, Default)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn activities(&self) -> String {
        format!("{}/activities", self.base)
    }

    /// `POST` target for a mutation. Activity and email are opaque strings.
    pub fn mutation(&self, mutation: Mutation, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/{}?email={}",
            self.base,
            urlencoding::encode(activity),
            mutation.path_segment(),
            urlencoding::encode(email)
        )
    }
}
