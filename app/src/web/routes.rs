//! REST endpoint handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use super::WebState;
use swingforge::{Club, ClubSummary, SkillTier, SwingError, SwingRecord};

/// GET /api/clubs — the supported club set with baselines.
pub async fn get_clubs() -> Json<Vec<ClubSummary>> {
    Json(Club::ALL.iter().copied().map(ClubSummary::of).collect())
}

#[derive(Deserialize)]
pub struct SwingQuery {
    pub club: Option<String>,
    pub skill: Option<SkillTier>,
    /// Fixed seed for reproducible output; omit for OS entropy.
    pub seed: Option<u64>,
}

/// GET /api/swing?club=7I&skill=expert&seed=42
pub async fn get_swing(
    State(state): State<Arc<WebState>>,
    Query(query): Query<SwingQuery>,
) -> Result<Json<SwingRecord>, (StatusCode, String)> {
    let club = query
        .club
        .unwrap_or_else(|| state.settings.generator.club.clone());
    let skill = query.skill.unwrap_or(state.settings.generator.skill);
    let mut rng = match query.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    swingforge::generate(&club, skill, &mut rng)
        .map(Json)
        .map_err(|e| match e {
            SwingError::UnknownClub { .. } => (StatusCode::NOT_FOUND, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })
}
