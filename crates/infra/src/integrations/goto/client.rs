//! GoTo API client
//!
//! One client serves all four conferencing products. The URL layout differs
//! per product family, so the client owns it end to end: listing endpoints,
//! registrant endpoints, and the normalization into domain events.

use std::sync::Arc;

use async_trait::async_trait;
use gotosync_core::EventDirectory;
use gotosync_domain::{Event, GotoConfig, GotoSyncError, Product, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{AssistSession, Meeting, Registrant, Training, Webinar};
use crate::auth::{AccessTokenProvider, StaticTokenProvider};
use crate::errors::status_to_error;
use crate::http::HttpClient;

/// Client for the GoTo REST endpoints.
pub struct GotoClient {
    base_url: String,
    organizer_key: String,
    http: HttpClient,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl GotoClient {
    pub fn new(
        base_url: impl Into<String>,
        organizer_key: impl Into<String>,
        http: HttpClient,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, organizer_key: organizer_key.into(), http, tokens }
    }

    /// Build a client from the GoTo section of the configuration, using the
    /// configured static access token.
    pub fn from_config(config: &GotoConfig, http: HttpClient) -> Self {
        Self::new(
            config.api_url.clone(),
            config.organizer_key.clone(),
            http,
            Arc::new(StaticTokenProvider::new(config.access_token.clone())),
        )
    }

    /// Fetch every registrant or attendee attached to an event.
    ///
    /// Webinars and trainings expose registration lists; meetings and assist
    /// sessions expose attendees. Both shapes decode into [`Registrant`].
    pub async fn registrants(&self, product: Product, event_id: &str) -> Result<Vec<Registrant>> {
        let url = self.registrants_url(product, event_id);
        let registrants: Vec<Registrant> = self.get_json(&url).await?;

        debug!(product = %product, event_id, count = registrants.len(), "fetched registrants");
        Ok(registrants)
    }

    fn events_url(&self, product: Product) -> String {
        match product {
            Product::Webinar => format!(
                "{}/G2W/rest/v2/organizers/{}/upcomingWebinars",
                self.base_url, self.organizer_key
            ),
            Product::Meeting => format!("{}/G2M/rest/meetings?scheduled=true", self.base_url),
            Product::Training => {
                format!("{}/G2T/rest/organizers/{}/trainings", self.base_url, self.organizer_key)
            }
            Product::Assist => format!("{}/G2A/rest/sessions", self.base_url),
        }
    }

    fn registrants_url(&self, product: Product, event_id: &str) -> String {
        match product {
            Product::Webinar => format!(
                "{}/G2W/rest/v2/organizers/{}/webinars/{}/registrants",
                self.base_url, self.organizer_key, event_id
            ),
            Product::Meeting => {
                format!("{}/G2M/rest/meetings/{}/attendees", self.base_url, event_id)
            }
            Product::Training => format!(
                "{}/G2T/rest/organizers/{}/trainings/{}/registrants",
                self.base_url, self.organizer_key, event_id
            ),
            Product::Assist => {
                format!("{}/G2A/rest/sessions/{}/attendees", self.base_url, event_id)
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let token = self.tokens.access_token().await?;

        let request = self
            .http
            .request(Method::GET, url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", "application/json");

        let response = self.http.send(request).await?;
        let status = response.status();

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(status_to_error("GoTo API", status, &detail));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GotoSyncError::Internal(format!("Failed to parse GoTo response: {}", e)))
    }
}

#[async_trait]
impl EventDirectory for GotoClient {
    async fn list_events(&self, product: Product) -> Result<Vec<Event>> {
        let url = self.events_url(product);

        let events: Vec<Event> = match product {
            Product::Webinar => {
                let listings: Vec<Webinar> = self.get_json(&url).await?;
                listings.into_iter().map(Event::from).collect()
            }
            Product::Meeting => {
                let listings: Vec<Meeting> = self.get_json(&url).await?;
                listings.into_iter().map(Event::from).collect()
            }
            Product::Training => {
                let listings: Vec<Training> = self.get_json(&url).await?;
                listings.into_iter().map(Event::from).collect()
            }
            Product::Assist => {
                let listings: Vec<AssistSession> = self.get_json(&url).await?;
                listings.into_iter().map(Event::from).collect()
            }
        };

        debug!(product = %product, count = events.len(), "listed events");
        Ok(events)
    }
}
