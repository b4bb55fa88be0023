// Host and port endpoints
//
// Host ids are validated like every other identifier, so an empty id is
// rejected locally instead of turning into a request for `/hosts/`.

use serde_json::Value;
use tracing::debug;

use crate::client::{ApiRequest, RancherClient, list_request, require_id};
use crate::error::Error;
use crate::models::Collection;

const HOST_ID: &str = "host id";

impl RancherClient {
    /// `GET /ports`
    pub async fn list_ports(&self) -> Result<Value, Error> {
        self.execute(ApiRequest::get("/ports")).await
    }

    /// List hosts.
    ///
    /// `GET /hosts?{query}`. Returns the unwrapped `data` array.
    pub async fn list_hosts(&self, query: Option<&str>) -> Result<Vec<Value>, Error> {
        debug!(?query, "listing hosts");
        let page: Collection<Value> = self.execute(list_request("/hosts", query)).await?;
        Ok(page.data)
    }

    /// `GET /hosts/{id}`
    pub async fn get_host(&self, host_id: &str) -> Result<Value, Error> {
        let id = require_id(host_id, HOST_ID)?;
        self.execute(ApiRequest::get("/hosts").segment(id)).await
    }

    /// `DELETE /hosts/{id}`
    pub async fn delete_host(&self, host_id: &str) -> Result<Value, Error> {
        let id = require_id(host_id, HOST_ID)?;
        debug!(host_id = id, "deleting host");
        self.execute(ApiRequest::delete("/hosts").segment(id)).await
    }
}
