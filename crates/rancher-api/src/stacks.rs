// Stack endpoints

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::{ApiRequest, RancherClient, list_request, require_id};
use crate::error::Error;
use crate::models::Collection;

const STACK_ID: &str = "stack id";

impl RancherClient {
    /// `POST /stacks`
    pub async fn create_stack<B: Serialize + Sync + ?Sized>(
        &self,
        stack: &B,
    ) -> Result<Value, Error> {
        self.execute(ApiRequest::post("/stacks").json(stack)?).await
    }

    /// List stacks.
    ///
    /// `GET /stacks?{query}`, where `query` is passed through untouched
    /// (e.g. `"name=web&limit=100"`). Returns the unwrapped `data` array.
    pub async fn list_stacks(&self, query: Option<&str>) -> Result<Vec<Value>, Error> {
        debug!(?query, "listing stacks");
        let page: Collection<Value> = self.execute(list_request("/stacks", query)).await?;
        Ok(page.data)
    }

    /// `GET /stacks/{id}`
    pub async fn get_stack(&self, stack_id: &str) -> Result<Value, Error> {
        let id = require_id(stack_id, STACK_ID)?;
        self.execute(ApiRequest::get("/stacks").segment(id)).await
    }

    /// Services belonging to a stack.
    ///
    /// `GET /stacks/{id}/services`
    ///
    /// Returned as the raw collection, envelope included.
    pub async fn list_stack_services(&self, stack_id: &str) -> Result<Value, Error> {
        let id = require_id(stack_id, STACK_ID)?;
        self.execute(ApiRequest::get("/stacks").segment(id).segment("services"))
            .await
    }

    /// `POST /stacks/{id}/?action=remove`
    pub async fn remove_stack(&self, stack_id: &str) -> Result<Value, Error> {
        let id = require_id(stack_id, STACK_ID)?;
        debug!(stack_id = id, "removing stack");
        self.execute(ApiRequest::post("/stacks").segment(id).action("remove"))
            .await
    }
}
