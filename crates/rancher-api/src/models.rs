// Response shapes the client needs to look inside.
//
// Everything else passes through as `serde_json::Value`.

use serde::Deserialize;

/// Rancher's list envelope: `{ "type": "collection", "data": [...], ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection<T> {
    pub data: Vec<T>,
}

/// Step 1 of the registration-token flow: only the new token's id matters.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreatedToken {
    pub id: String,
}

/// A fetched registration token.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationToken {
    pub id: Option<String>,
    /// Shell command that registers a new host with the server. `null`
    /// until the server has finished activating the token.
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, rename = "registrationUrl")]
    pub registration_url: Option<String>,
}
