//! Client error types
//!
//! Errors raised while talking to the activities service. Mutation
//! rejections are not errors; they come back as [`crate::api::Outcome`].

use thiserror::Error;

/// A request never produced a readable response
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request could not be sent or no response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be read
    #[error("Body read error: {0}")]
    Body(String),
}

/// Loading the activities snapshot failed
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch activities: {0}")]
    Transport(#[from] TransportError),

    #[error("Activities request returned HTTP {status}")]
    Status { status: u16 },

    #[error("Failed to decode activities: {0}")]
    Decode(#[from] serde_json::Error),
}
