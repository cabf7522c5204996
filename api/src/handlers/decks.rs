//! Deck handlers
//!
//! Endpoints for creating, opening and drawing from decks.

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::app::{CreateDeckOutput, DeckCreationOptions, DrawCardsOutput, OpenDeckOutput};
use crate::domain::entities::{Card, DeckId};
use crate::error::{AppError, DeckOperation};
use crate::AppState;

/// Query parameters for creating a deck
#[derive(Debug, Default, Deserialize)]
pub struct CreateDeckQuery {
    /// `n`/`false` for an unshuffled deck, `y`/`true` (or absent) to shuffle
    pub shuffled: Option<String>,
    /// Comma separated card codes, e.g. `AS,KD,10H`
    pub cards: Option<String>,
}

impl CreateDeckQuery {
    fn into_options(self) -> Result<DeckCreationOptions, AppError> {
        let shuffled = match self.shuffled.as_deref().map(str::to_lowercase).as_deref() {
            None | Some("") => None,
            Some("n" | "no" | "false") => Some(false),
            Some("y" | "yes" | "true") => Some(true),
            Some(other) => {
                return Err(AppError::BadRequest(format!(
                    "Invalid shuffled value: {}",
                    other
                )))
            }
        };

        let cards = match self.cards.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(codes) => Some(
                codes
                    .split(',')
                    .map(|code| Card::from_code(code.trim()))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| AppError::deck(DeckOperation::Create, e))?,
            ),
        };

        Ok(DeckCreationOptions { shuffled, cards })
    }
}

/// Request body for drawing cards
#[derive(Debug, Default, Deserialize)]
pub struct DrawCardsRequest {
    #[serde(default)]
    pub amount: i64,
}

impl DrawCardsRequest {
    /// Parse a draw request body
    ///
    /// An empty body draws nothing whatever its content type. A non-empty
    /// body must be JSON.
    fn from_body(headers: &HeaderMap, body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let invalid = || AppError::BadRequest("Invalid body".to_string());

        if !is_json_content_type(headers) {
            return Err(invalid());
        }

        serde_json::from_slice(body).map_err(|_| invalid())
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// Deck id from the path, rejecting anything that is not a UUID
fn deck_id(path: Result<Path<Uuid>, PathRejection>) -> Result<DeckId, AppError> {
    path.map(|Path(id)| DeckId(id)).map_err(|rejection| {
        AppError::BadRequest(format!("Invalid deck id: {}", rejection.body_text()))
    })
}

/// POST /v1/decks
///
/// Create a new deck. Shuffled and complete unless the query says otherwise.
pub async fn create_deck(
    State(state): State<AppState>,
    Query(query): Query<CreateDeckQuery>,
) -> Result<(StatusCode, Json<CreateDeckOutput>), AppError> {
    let options = query.into_options()?;
    let output = state.deck_service.create_deck(options).await?;

    Ok((StatusCode::CREATED, Json(output)))
}

/// GET /v1/decks/:id
///
/// Open a deck and list its remaining cards.
pub async fn open_deck(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<OpenDeckOutput>, AppError> {
    let id = deck_id(path)?;
    let output = state.deck_service.open_deck(&id).await?;
    Ok(Json(output))
}

/// POST /v1/decks/:id/draw
///
/// Draw cards from the top of a deck. A request with an empty body draws
/// nothing.
pub async fn draw_cards(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<DrawCardsOutput>, AppError> {
    let id = deck_id(path)?;
    let request = DrawCardsRequest::from_body(&headers, &body)?;

    if request.amount < 0 {
        return Err(AppError::BadRequest(
            "Invalid amount, must be greater or equal to 0".to_string(),
        ));
    }

    let output = state
        .deck_service
        .draw_cards(&id, request.amount)
        .await?;

    Ok(Json(output))
}
