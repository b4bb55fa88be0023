// Service endpoints
//
// Rancher calls stopping a service "deactivate" and starting it "activate";
// the method names here follow the container vocabulary instead.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::{ApiRequest, RancherClient, list_request, require_id};
use crate::error::Error;
use crate::models::Collection;

const SERVICE_ID: &str = "service id";

impl RancherClient {
    /// List services.
    ///
    /// `GET /services?{query}`. Returns the unwrapped `data` array.
    pub async fn list_services(&self, query: Option<&str>) -> Result<Vec<Value>, Error> {
        debug!(?query, "listing services");
        let page: Collection<Value> = self.execute(list_request("/services", query)).await?;
        Ok(page.data)
    }

    /// `GET /services/{id}`
    pub async fn get_service(&self, service_id: &str) -> Result<Value, Error> {
        let id = require_id(service_id, SERVICE_ID)?;
        self.execute(ApiRequest::get("/services").segment(id)).await
    }

    /// Per-container resource stats for a service.
    ///
    /// `GET /services/{id}/containerstats`
    pub async fn get_service_stats(&self, service_id: &str) -> Result<Value, Error> {
        let id = require_id(service_id, SERVICE_ID)?;
        self.execute(
            ApiRequest::get("/services")
                .segment(id)
                .segment("containerstats"),
        )
        .await
    }

    /// `POST /services/{id}/?action=deactivate`
    pub async fn stop_service(&self, service_id: &str) -> Result<Value, Error> {
        let id = require_id(service_id, SERVICE_ID)?;
        debug!(service_id = id, "deactivating service");
        self.execute(action(id, "deactivate")).await
    }

    /// `POST /services/{id}/?action=activate`
    pub async fn start_service(&self, service_id: &str) -> Result<Value, Error> {
        let id = require_id(service_id, SERVICE_ID)?;
        debug!(service_id = id, "activating service");
        self.execute(action(id, "activate")).await
    }

    /// Rolling restart.
    ///
    /// `POST /services/{id}/?action=restart` with the restart parameters
    /// (e.g. `{"rollingRestartStrategy": {"batchSize": 1}}`) as the body.
    pub async fn restart_service<B: Serialize + Sync + ?Sized>(
        &self,
        service_id: &str,
        params: &B,
    ) -> Result<Value, Error> {
        let id = require_id(service_id, SERVICE_ID)?;
        debug!(service_id = id, "restarting service");
        self.execute(action(id, "restart").json(params)?).await
    }
}

fn action(id: &str, name: &str) -> ApiRequest {
    ApiRequest::post("/services").segment(id).action(name)
}
