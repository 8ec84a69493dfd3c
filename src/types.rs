//! Entity types returned by the Extra Life API
//!
//! Plain data holders. Field names follow DonorDrive's camelCase wire format,
//! which upper-cases the `ID`, `URL` and `UTC` suffixes. Every field is
//! optional or defaulted so that partial records still decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Participant
// ============================================================================

/// A fundraising participant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(rename = "avatarImageURL", default)]
    pub avatar_image_url: Option<String>,

    #[serde(rename = "createdDateUTC", default, with = "donordrive_date")]
    pub created_date_utc: Option<DateTime<Utc>>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(rename = "eventID", default)]
    pub event_id: Option<i64>,

    #[serde(default)]
    pub event_name: Option<String>,

    #[serde(default)]
    pub fundraising_goal: f64,

    #[serde(default)]
    pub is_team_captain: bool,

    #[serde(default)]
    pub links: Option<ParticipantLinks>,

    #[serde(default)]
    pub num_donations: i64,

    #[serde(rename = "participantID", default)]
    pub participant_id: i64,

    #[serde(default)]
    pub stream_is_live: bool,

    #[serde(default)]
    pub sum_donations: f64,

    #[serde(default)]
    pub sum_pledges: Option<f64>,

    #[serde(rename = "teamID", default)]
    pub team_id: Option<i64>,

    #[serde(default)]
    pub team_name: Option<String>,
}

/// Public pages associated with a participant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantLinks {
    #[serde(default)]
    pub donate: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub stream: Option<String>,
}

// ============================================================================
// Donation
// ============================================================================

/// A single donation made to a participant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(default)]
    pub amount: Option<f64>,

    #[serde(rename = "avatarImageURL", default)]
    pub avatar_image_url: Option<String>,

    #[serde(rename = "createdDateUTC", default, with = "donordrive_date")]
    pub created_date_utc: Option<DateTime<Utc>>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(rename = "donationID", default)]
    pub donation_id: Option<String>,

    #[serde(rename = "donorID", default)]
    pub donor_id: Option<String>,

    #[serde(rename = "eventID", default)]
    pub event_id: Option<i64>,

    #[serde(rename = "incentiveID", default)]
    pub incentive_id: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(rename = "participantID", default)]
    pub participant_id: Option<i64>,

    #[serde(rename = "teamID", default)]
    pub team_id: Option<i64>,
}

// ============================================================================
// Donor
// ============================================================================

/// Aggregated view of one donor's giving
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    #[serde(rename = "avatarImageURL", default)]
    pub avatar_image_url: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(rename = "donorID", default)]
    pub donor_id: Option<String>,

    #[serde(rename = "modifiedDateUTC", default, with = "donordrive_date")]
    pub modified_date_utc: Option<DateTime<Utc>>,

    #[serde(default)]
    pub num_donations: i64,

    #[serde(default)]
    pub sum_donations: f64,
}

// ============================================================================
// Activity
// ============================================================================

/// An entry in a participant's activity feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default)]
    pub amount: Option<f64>,

    #[serde(rename = "createdDateUTC", default, with = "donordrive_date")]
    pub created_date_utc: Option<DateTime<Utc>>,

    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub is_incentive: Option<bool>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    /// Feed entry kind, e.g. "donation"
    #[serde(rename = "type", default)]
    pub activity_type: Option<String>,
}

// ============================================================================
// Timestamps
// ============================================================================

/// DonorDrive timestamps look like `2021-10-03T15:22:46.270+0000` (no colon
/// in the offset), which strict RFC 3339 parsing rejects.
mod donordrive_date {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const DONORDRIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        let Some(raw) = raw else {
            return Ok(None);
        };

        DateTime::parse_from_rfc3339(&raw)
            .or_else(|_| DateTime::parse_from_str(&raw, DONORDRIVE_FORMAT))
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{raw}': {e}")))
    }
}
