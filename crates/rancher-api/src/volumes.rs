// Volume endpoints

use serde::Serialize;
use serde_json::Value;

use crate::client::{ApiRequest, RancherClient, require_id};
use crate::error::Error;

const VOLUME_ID: &str = "volume id";

impl RancherClient {
    /// `POST /volume`
    pub async fn create_volume<B: Serialize + Sync + ?Sized>(
        &self,
        volume: &B,
    ) -> Result<Value, Error> {
        self.execute(ApiRequest::post("/volume").json(volume)?).await
    }

    /// `GET /volume/{id}`
    pub async fn get_volume(&self, volume_id: &str) -> Result<Value, Error> {
        let id = require_id(volume_id, VOLUME_ID)?;
        self.execute(ApiRequest::get("/volume").segment(id)).await
    }

    /// `POST /volume/{id}/?action=remove`
    pub async fn remove_volume(&self, volume_id: &str) -> Result<Value, Error> {
        let id = require_id(volume_id, VOLUME_ID)?;
        self.execute(ApiRequest::post("/volume").segment(id).action("remove"))
            .await
    }
}
