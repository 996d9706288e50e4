//! Activities API
//!
//! Everything that talks to the activities service:
//!
//! - [`Transport`]: the seam between client logic and the network
//! - [`Endpoints`]: request targets with percent-encoded components
//! - [`SnapshotFetcher`]: `GET /activities`
//! - [`MutationDispatcher`]: signup and unregister, interpreted as [`Outcome`]s

pub mod client;
pub mod dispatcher;
pub mod endpoints;
pub mod fetcher;

pub use client::BrowserTransport;
pub use dispatcher::{FailureOrigin, Mutation, MutationDispatcher, Outcome};
pub use endpoints::Endpoints;
pub use fetcher::SnapshotFetcher;

use async_trait::async_trait;

use crate::error::TransportError;

/// Status and body of an HTTP response
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx is the only success criterion
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues requests against the activities service
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError>;
    async fn post(&self, url: &str) -> Result<HttpReply, TransportError>;
}
