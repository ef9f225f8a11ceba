//! CRM ingest client
//!
//! Contacts land in the CRM through a batch endpoint. Every delivery is
//! tagged with the event label so the CRM can attribute contacts to the
//! webinar, meeting, training or support session they came from. An
//! idempotency key derived from the label and the batch contents keeps the
//! retry path from double-ingesting a delivery.

use gotosync_domain::{CrmConfig, GotoSyncError, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::status_to_error;
use crate::http::HttpClient;
use crate::integrations::goto::Registrant;

/// Client for the CRM contact ingest endpoint.
pub struct CrmClient {
    base_url: String,
    api_token: String,
    http: HttpClient,
}

impl CrmClient {
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        http: HttpClient,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, api_token: api_token.into(), http }
    }

    /// Build a client from the CRM section of the configuration.
    pub fn from_config(config: &CrmConfig, http: HttpClient) -> Self {
        Self::new(config.api_url.clone(), config.api_token.clone(), http)
    }

    /// POST one event's registrants to the ingest endpoint.
    ///
    /// Returns the number of contacts the CRM accepted.
    pub async fn deliver_batch(&self, registrants: &[Registrant], label: &str) -> Result<u64> {
        let url = format!("{}/api/contacts/batch", self.base_url);
        let payload = ContactBatch { contacts: registrants, tag: label };

        let request = self
            .http
            .request(Method::POST, &url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Idempotency-Key", idempotency_key(label, registrants))
            .json(&payload);

        let response = self.http.send(request).await?;
        let status = response.status();

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(status_to_error("CRM API", status, &detail));
        }

        let receipt: BatchReceipt = response
            .json()
            .await
            .map_err(|e| GotoSyncError::Internal(format!("Failed to parse CRM response: {}", e)))?;

        debug!(tag = label, accepted = receipt.accepted, "CRM accepted contact batch");
        Ok(receipt.accepted)
    }
}

/// Key a delivery by its label and contents so that retried POSTs of the
/// same batch dedupe on the server, while later runs with different
/// registrants ingest normally.
fn idempotency_key(label: &str, registrants: &[Registrant]) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    label.hash(&mut hasher);
    for registrant in registrants {
        registrant.email.hash(&mut hasher);
    }

    format!("{}-{:016x}", label, hasher.finish())
}

#[derive(Debug, Serialize)]
struct ContactBatch<'a> {
    contacts: &'a [Registrant],
    tag: &'a str,
}

#[derive(Debug, Deserialize)]
struct BatchReceipt {
    accepted: u64,
}
