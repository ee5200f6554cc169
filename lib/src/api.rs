//! REST and stream payload types shared between the engine and its hosts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Club, ClubCategory, ClubProfile, SwingRecord};

/// GET /api/clubs response element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubSummary {
    pub code: String,
    pub category: ClubCategory,
    pub profile: ClubProfile,
}

impl ClubSummary {
    pub fn of(club: Club) -> Self {
        Self {
            code: club.to_string(),
            category: club.category(),
            profile: club.profile(),
        }
    }
}

/// One swing pushed on the stream socket: a record plus feed metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingEnvelope {
    pub sequence: u64,
    pub timestamp: DateTime<Utc>,
    pub record: SwingRecord,
}
