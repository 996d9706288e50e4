//! Snapshot Fetcher

use std::rc::Rc;

use super::{Endpoints, Transport};
use crate::error::FetchError;
use crate::state::ActivitySnapshot;

/// Loads the full activities snapshot, one attempt per call
#[derive(Clone)]
pub struct SnapshotFetcher {
    transport: Rc<dyn Transport>,
    endpoints: Endpoints,
}

impl SnapshotFetcher {
    pub fn new(transport: Rc<dyn Transport>, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub async fn fetch_snapshot(&self) -> Result<ActivitySnapshot, FetchError> {
        let reply = self.transport.get(&self.endpoints.activities()).await?;

        if !reply.is_success() {
            return Err(FetchError::Status {
                status: reply.status,
            });
        }

        let snapshot: ActivitySnapshot = serde_json::from_str(&reply.body)?;
        tracing::debug!(activities = snapshot.len(), "fetched activities snapshot");
        Ok(snapshot)
    }
}
