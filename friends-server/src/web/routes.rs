//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::domain::{DayOfWeek, Departure, DepartureTime, DomainError, StationName, Username};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users/friends", post(create_friend).get(list_friends))
        .route(
            "/users/:username/favoriteJourney",
            post(set_favorite_journey).get(get_favorite_journey),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Create a friend.
async fn create_friend(
    State(state): State<AppState>,
    Json(req): Json<CreateFriendRequest>,
) -> Result<(StatusCode, Json<FriendResponse>), AppError> {
    let username = Username::parse(&req.username).map_err(|_| AppError::BadRequest {
        message: format!("Invalid username: {}", req.username),
    })?;

    let friend = state.friends.create_friend(username).await?;

    Ok((StatusCode::CREATED, Json(FriendResponse::from_friend(&friend))))
}

/// List all friends.
async fn list_friends(State(state): State<AppState>) -> Json<FriendListResponse> {
    let friends = state
        .friends
        .friends()
        .await
        .iter()
        .map(FriendResponse::from_friend)
        .collect();

    Json(FriendListResponse { friends })
}

/// Set a friend's favorite journey, or schedule its departure.
///
/// Journey and day/time submissions share this endpoint; the presence of
/// `origin`/`destination` selects the journey form.
async fn set_favorite_journey(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
    Json(req): Json<FavoriteJourneyRequest>,
) -> Result<Response, AppError> {
    if req.origin.is_some() || req.destination.is_some() {
        let origin = parse_station(&state, req.origin.as_deref(), "origin").await?;
        let destination = parse_station(&state, req.destination.as_deref(), "destination").await?;
        let username = path_username(&user_name)?;

        let stored = state
            .friends
            .set_favorite_journey(&username, origin, destination)
            .await?;

        Ok((
            StatusCode::CREATED,
            Json(JourneyResponse::from_journey(&stored)),
        )
            .into_response())
    } else if req.day_of_week.is_some() || req.time.is_some() {
        let departure = parse_departure(&req)?;
        let username = path_username(&user_name)?;

        let stored = state.friends.set_departure(&username, departure).await?;
        let departure = stored.departure().ok_or_else(|| AppError::Internal {
            message: "scheduled journey lost its departure".to_string(),
        })?;

        Ok((
            StatusCode::CREATED,
            Json(DepartureResponse {
                day_of_week: departure.day.to_string(),
                time: departure.time.to_string(),
            }),
        )
            .into_response())
    } else {
        Err(AppError::BadRequest {
            message: "expected origin/destination or dayOfWeek/time".to_string(),
        })
    }
}

/// Fetch a friend's stored favorite journey.
async fn get_favorite_journey(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> Result<Json<FavoriteJourneyView>, AppError> {
    let username = path_username(&user_name)?;
    let friend = state.friends.friend(&username).await?;

    let journey = friend.favorite_journey().ok_or_else(|| AppError::NotFound {
        message: format!("No favorite journey for user: {username}"),
    })?;

    Ok(Json(FavoriteJourneyView::from_journey(journey)))
}

/// Parse and check a station field against the registry.
async fn parse_station(
    state: &AppState,
    raw: Option<&str>,
    field: &str,
) -> Result<StationName, AppError> {
    let raw = raw.ok_or_else(|| AppError::BadRequest {
        message: format!("Missing {field}"),
    })?;

    let name = StationName::parse(raw).map_err(|_| AppError::BadRequest {
        message: format!("Invalid {field} station: {raw}"),
    })?;

    if !state.stations.contains(&name).await {
        return Err(AppError::BadRequest {
            message: format!("Unknown {field} station: {raw}"),
        });
    }

    Ok(name)
}

/// Parse the day/time fields of a scheduling request.
fn parse_departure(req: &FavoriteJourneyRequest) -> Result<Departure, AppError> {
    let day_raw = req.day_of_week.as_deref().ok_or_else(|| AppError::BadRequest {
        message: "Missing dayOfWeek".to_string(),
    })?;
    let day = DayOfWeek::parse(day_raw).map_err(|_| AppError::BadRequest {
        message: format!("Invalid dayOfWeek: {day_raw}"),
    })?;

    let time_raw = req.time.as_deref().ok_or_else(|| AppError::BadRequest {
        message: "Missing time".to_string(),
    })?;
    let time = DepartureTime::parse_hhmm(time_raw).map_err(|_| AppError::BadRequest {
        message: format!("Invalid time: {time_raw}"),
    })?;

    Ok(Departure { day, time })
}

/// Parse the username path segment.
///
/// A malformed username can never have been stored, so the outcome is the
/// same as looking up a missing user.
fn path_username(raw: &str) -> Result<Username, AppError> {
    Username::parse(raw).map_err(|_| AppError::NotFound {
        message: format!("No such user: {raw}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        let message = e.to_string();
        match e {
            DomainError::UserDoesNotExist(_) => AppError::NotFound { message },
            DomainError::FriendAlreadyExists(_)
            | DomainError::SameOriginDestination(_)
            | DomainError::NoFavoriteJourney(_) => AppError::Conflict { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
