//! Mutation Dispatcher
//!
//! Sends signup and unregister requests and interprets the replies. The
//! HTTP status alone decides between success and failure; the body only
//! supplies the text shown to the user.

use serde_json::Value;
use std::rc::Rc;

use super::{Endpoints, HttpReply, Transport};

/// Shown when a rejection carries no usable `detail`
pub const UNKNOWN_ERROR: &str = "An error occurred";

/// Kind of roster mutation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Signup,
    Unregister,
}

impl Mutation {
    pub(crate) fn path_segment(self) -> &'static str {
        match self {
            Mutation::Signup => "signup",
            Mutation::Unregister => "unregister",
        }
    }

    /// Client text used when the service could not be reached
    pub fn transport_failure_message(self) -> &'static str {
        match self {
            Mutation::Signup => "Failed to sign up. Please try again.",
            Mutation::Unregister => "Failed to unregister. Please try again.",
        }
    }

    fn default_success_message(self) -> &'static str {
        match self {
            Mutation::Signup => "Signed up successfully",
            Mutation::Unregister => "Unregistered successfully",
        }
    }
}

/// Where a failed mutation was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureOrigin {
    /// The service answered with a non-2xx status
    Server,
    /// No readable reply (network error or non-JSON body)
    Transport,
    /// Rejected before any request was sent
    Validation,
}

/// Result of a mutation request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success { message: String },
    Failure { detail: String, origin: FailureOrigin },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Text to present to the user
    pub fn text(&self) -> &str {
        match self {
            Outcome::Success { message } => message,
            Outcome::Failure { detail, .. } => detail,
        }
    }

    fn transport_failure(mutation: Mutation) -> Self {
        Outcome::Failure {
            detail: mutation.transport_failure_message().to_string(),
            origin: FailureOrigin::Transport,
        }
    }
}

/// Issues signup and unregister requests
#[derive(Clone)]
pub struct MutationDispatcher {
    transport: Rc<dyn Transport>,
    endpoints: Endpoints,
}

impl MutationDispatcher {
    pub fn new(transport: Rc<dyn Transport>, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub async fn signup(&self, activity: &str, email: &str) -> Outcome {
        self.dispatch(Mutation::Signup, activity, email).await
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> Outcome {
        self.dispatch(Mutation::Unregister, activity, email).await
    }

    async fn dispatch(&self, mutation: Mutation, activity: &str, email: &str) -> Outcome {
        let url = self.endpoints.mutation(mutation, activity, email);

        match self.transport.post(&url).await {
            Ok(reply) => {
                let outcome = interpret(mutation, &reply);
                tracing::info!(
                    ?mutation,
                    activity,
                    status = reply.status,
                    success = outcome.is_success(),
                    "mutation completed"
                );
                outcome
            }
            Err(e) => {
                tracing::warn!(?mutation, activity, error = %e, "mutation request failed");
                Outcome::transport_failure(mutation)
            }
        }
    }
}

/// Map a reply to an outcome
pub fn interpret(mutation: Mutation, reply: &HttpReply) -> Outcome {
    let body: Value = match serde_json::from_str(&reply.body) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(
                ?mutation,
                status = reply.status,
                error = %e,
                "mutation reply is not JSON"
            );
            return Outcome::transport_failure(mutation);
        }
    };

    let text = |field: &str| body.get(field).and_then(Value::as_str).map(str::to_string);

    if reply.is_success() {
        Outcome::Success {
            message: text("message")
                .unwrap_or_else(|| mutation.default_success_message().to_string()),
        }
    } else {
        Outcome::Failure {
            detail: text("detail").unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            origin: FailureOrigin::Server,
        }
    }
}
