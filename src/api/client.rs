//! Typed Extra Life endpoints
//!
//! Each method supplies a relative path and, for single-page accessors, an
//! offset/limit query, then delegates to the [`HttpClient`].

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::PageRequest;
use crate::types::{Activity, Donation, Donor, Participant};
use tracing::debug;

/// Client for the Extra Life participant, donation, donor and activity endpoints
///
/// `page`-taking methods return one page (`None` if the collection does not
/// exist); `all_*` methods follow the `link` header and return the whole
/// collection (empty if it does not exist).
#[derive(Debug, Clone)]
pub struct ExtraLifeClient {
    http: HttpClient,
}

impl ExtraLifeClient {
    /// Client for the public Extra Life API with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Client built from a [`ClientConfig`]
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http: HttpClient::with_config(config.http_config())?,
        })
    }

    /// Client on top of an existing transport
    pub fn from_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// Underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    // ============================================================================
    // Participants
    // ============================================================================

    /// One page of participants
    pub async fn participants(&self, page: i32, limit: i32) -> Result<Option<Vec<Participant>>> {
        self.get_page("participants", page, limit).await
    }

    /// Every participant, following pagination links
    pub async fn all_participants(&self) -> Result<Vec<Participant>> {
        self.http.fetch_all("participants").await
    }

    /// A single participant
    pub async fn participant(&self, participant_id: i64) -> Result<Option<Participant>> {
        self.http
            .get_json(&format!("participants/{participant_id}"))
            .await
    }

    // ============================================================================
    // Donations
    // ============================================================================

    /// One page of a participant's donations
    pub async fn participant_donations(
        &self,
        participant_id: i64,
        page: i32,
        limit: i32,
    ) -> Result<Option<Vec<Donation>>> {
        self.get_page(&format!("participants/{participant_id}/donations"), page, limit)
            .await
    }

    /// Every donation made to a participant
    pub async fn all_participant_donations(&self, participant_id: i64) -> Result<Vec<Donation>> {
        self.http
            .fetch_all(&format!("participants/{participant_id}/donations"))
            .await
    }

    // ============================================================================
    // Donors
    // ============================================================================

    /// One page of a participant's donors
    pub async fn participant_donors(
        &self,
        participant_id: i64,
        page: i32,
        limit: i32,
    ) -> Result<Option<Vec<Donor>>> {
        self.get_page(&format!("participants/{participant_id}/donors"), page, limit)
            .await
    }

    /// Every donor of a participant
    pub async fn all_participant_donors(&self, participant_id: i64) -> Result<Vec<Donor>> {
        self.http
            .fetch_all(&format!("participants/{participant_id}/donors"))
            .await
    }

    /// A single donor
    pub async fn donor(&self, donor_id: &str) -> Result<Option<Donor>> {
        self.http.get_json(&format!("donors/{donor_id}")).await
    }

    // ============================================================================
    // Activity
    // ============================================================================

    /// A participant's whole activity feed
    pub async fn all_participant_activities(&self, participant_id: i64) -> Result<Vec<Activity>> {
        self.http
            .fetch_all(&format!("participants/{participant_id}/activity"))
            .await
    }

    async fn get_page<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        page: i32,
        limit: i32,
    ) -> Result<Option<Vec<T>>> {
        let url = PageRequest::new(page, limit).apply_to(path);
        debug!("Fetching page {} of {} (limit {})", page, path, limit);
        self.http.get_json(&url).await
    }
}
