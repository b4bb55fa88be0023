// Container endpoints
//
// CRUD plus the `?action=` verbs (stop, start, restart, purge, logs).

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::{ApiRequest, RancherClient, require_id};
use crate::error::Error;

const CONTAINER_ID: &str = "container id";

impl RancherClient {
    /// Create a container.
    ///
    /// `POST /container`
    pub async fn create_container<B: Serialize + Sync + ?Sized>(
        &self,
        container: &B,
    ) -> Result<Value, Error> {
        self.execute(ApiRequest::post("/container").json(container)?).await
    }

    /// `GET /container/{id}`
    pub async fn get_container(&self, container_id: &str) -> Result<Value, Error> {
        let id = require_id(container_id, CONTAINER_ID)?;
        self.execute(ApiRequest::get("/container").segment(id)).await
    }

    /// Update a container.
    ///
    /// `POST /container/{id}`
    ///
    /// The id is taken from the body's own `id` field rather than a separate
    /// argument, matching the long-standing shape of this call.
    pub async fn update_container(&self, container: &Value) -> Result<Value, Error> {
        let id = container
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let id = require_id(id, CONTAINER_ID)?;
        self.execute(ApiRequest::post("/container").segment(id).json(container)?)
            .await
    }

    /// Stop a container.
    ///
    /// `POST /container/{id}/?action=stop` with the stop parameters
    /// (e.g. `{"remove": false, "timeout": 10}`) as the body.
    pub async fn stop_container<B: Serialize + Sync + ?Sized>(
        &self,
        container_id: &str,
        params: &B,
    ) -> Result<Value, Error> {
        let id = require_id(container_id, CONTAINER_ID)?;
        debug!(container_id = id, "stopping container");
        self.execute(action(id, "stop").json(params)?).await
    }

    /// `POST /container/{id}/?action=start`
    pub async fn start_container(&self, container_id: &str) -> Result<Value, Error> {
        let id = require_id(container_id, CONTAINER_ID)?;
        debug!(container_id = id, "starting container");
        self.execute(action(id, "start")).await
    }

    /// `POST /container/{id}/?action=restart`
    pub async fn restart_container(&self, container_id: &str) -> Result<Value, Error> {
        let id = require_id(container_id, CONTAINER_ID)?;
        debug!(container_id = id, "restarting container");
        self.execute(action(id, "restart")).await
    }

    /// `DELETE /container/{id}`
    pub async fn remove_container(&self, container_id: &str) -> Result<Value, Error> {
        let id = require_id(container_id, CONTAINER_ID)?;
        self.execute(ApiRequest::delete("/container").segment(id)).await
    }

    /// Purge a removed container.
    ///
    /// `POST /container/{id}/?action=purge`
    pub async fn purge_container(&self, container_id: &str) -> Result<Value, Error> {
        let id = require_id(container_id, CONTAINER_ID)?;
        self.execute(action(id, "purge")).await
    }

    /// Open a log session for a container.
    ///
    /// `POST /container/{id}/?action=logs`
    ///
    /// Rancher answers with a host-access object (`url` + `token`) for the
    /// log websocket rather than the log lines themselves.
    pub async fn get_container_logs(&self, container_id: &str) -> Result<Value, Error> {
        let id = require_id(container_id, CONTAINER_ID)?;
        self.execute(action(id, "logs")).await
    }
}

fn action(id: &str, name: &str) -> ApiRequest {
    ApiRequest::post("/container").segment(id).action(name)
}
