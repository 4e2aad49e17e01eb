//! AI interaction stub
//!
//! Returns a canned response chosen uniformly at random for a known artist.
//! Explicitly a placeholder: no language model is consulted and the incoming
//! message does not influence the reply.

use std::collections::HashMap;

use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db;
use crate::{ApiError, ApiResult, AppState};

/// Canned responses keyed by artist name
static CANNED_RESPONSES: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        (
            "Leonardo da Vinci",
            vec![
                "Greetings! I am Leonardo, a student of all things in nature. Art and science are not separate realms, but unified expressions of understanding the divine creation around us.",
                "The eye, which is called the window of the soul, is the principal means by which understanding may most fully appreciate the infinite works of nature.",
                "Painting is poetry that is seen rather than felt, and poetry is painting that is felt rather than seen.",
            ],
        ),
        (
            "Vincent van Gogh",
            vec![
                "Hello, my friend. I paint not what I see, but what I feel. The colors of my soul flow through my brush onto the canvas.",
                "I dream of painting and then I paint my dream. Art is to console those who are broken by life.",
                "Great things are done by a series of small things brought together. Each brushstroke carries my passion.",
            ],
        ),
        (
            "Pablo Picasso",
            vec![
                "¡Hola! I am Pablo. Art washes away from the soul the dust of everyday life. Every child is an artist - the problem is staying an artist when you grow up.",
                "I paint objects as I think them, not as I see them. Reality is more than what meets the eye.",
                "The meaning of life is to find your gift. The purpose of life is to give it away through art.",
            ],
        ),
        (
            "Frida Kahlo",
            vec![
                "Hola, querido. I paint my own reality. The thing is to suffer without complaining. Art is the most intense mode of individualism.",
                "I never paint dreams or nightmares. I paint my own reality - the pain, the joy, the struggle of being human.",
                "Feet, what do I need you for when I have wings to fly? My art gives me wings beyond physical limitations.",
            ],
        ),
        (
            "Claude Monet",
            vec![
                "Bonjour! I am Claude. I must have flowers, always, and always. My garden is my most beautiful masterpiece.",
                "Color is my day-long obsession, joy and torment. Light constantly changes, and I chase these changes with my brush.",
                "I perhaps owe having become a painter to flowers. My water lilies teach me about the beauty of reflection and time.",
            ],
        ),
    ])
});

/// Request payload for AI interaction
#[derive(Debug, Deserialize)]
pub struct AiInteractionRequest {
    /// User message (recorded but not interpreted by the stub)
    pub message: String,
    pub artist_id: Uuid,
}

/// Response payload for AI interaction
#[derive(Debug, Serialize)]
pub struct AiInteractionResponse {
    pub response: String,
    pub artist_name: String,
    pub artist_id: Uuid,
    pub timestamp: String,
}

/// POST /api/v1/ai-interaction
///
/// Looks up the artist, then picks one of its canned responses uniformly at
/// random. 404 when the artist is unknown or has no response set.
pub async fn ai_interaction(
    State(state): State<AppState>,
    Json(payload): Json<AiInteractionRequest>,
) -> ApiResult<Json<AiInteractionResponse>> {
    if payload.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".to_string()));
    }

    let artist = db::artists::get_artist(&state.db, payload.artist_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Artist not found: {}", payload.artist_id)))?;

    let responses = CANNED_RESPONSES.get(artist.name.as_str()).ok_or_else(|| {
        ApiError::NotFound(format!("AI responses not available for artist: {}", artist.name))
    })?;

    let response = responses
        .choose(&mut rand::thread_rng())
        .ok_or_else(|| ApiError::Internal("Empty response set".to_string()))?;

    Ok(Json(AiInteractionResponse {
        response: (*response).to_string(),
        artist_name: artist.name,
        artist_id: payload.artist_id,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// Build AI interaction routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/ai-interaction", post(ai_interaction))
}
