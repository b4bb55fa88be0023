// Host registration tokens

use tracing::debug;

use crate::client::{ApiRequest, RancherClient};
use crate::error::Error;
use crate::models::{CreatedToken, RegistrationToken};

impl RancherClient {
    /// Create a registration token and return its host registration command.
    ///
    /// Two sequential calls: `POST /registrationtokens`, then
    /// `GET /registrationtokens/{id}` with the id from the first response.
    /// A failure in either step is returned unchanged and stops the flow.
    ///
    /// Yields `None` while the server has not filled in `command` yet.
    pub async fn get_registration_token(&self) -> Result<Option<String>, Error> {
        Ok(self.registration_token().await?.command)
    }

    /// Like [`get_registration_token`](Self::get_registration_token), but
    /// returns the whole fetched token.
    pub async fn registration_token(&self) -> Result<RegistrationToken, Error> {
        let created: CreatedToken = self.execute(ApiRequest::post("/registrationtokens")).await?;
        debug!(token_id = %created.id, "registration token created");

        let token: RegistrationToken = self
            .execute(ApiRequest::get("/registrationtokens").segment(&created.id))
            .await?;
        debug!(token_id = %created.id, "registration token fetched");
        Ok(token)
    }
}
