//! HTTP API Client
//!
//! [`Transport`] over the browser fetch API.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use super::{HttpReply, Transport};
use crate::error::TransportError;

/// Fetch-backed transport used in the browser
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        read_reply(response).await
    }

    async fn post(&self, url: &str) -> Result<HttpReply, TransportError> {
        let response = Request::post(url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        read_reply(response).await
    }
}

async fn read_reply(response: Response) -> Result<HttpReply, TransportError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Body(e.to_string()))?;

    Ok(HttpReply { status, body })
}
