//! Airport HTTP handlers: extract, delegate to the service, map status codes.

use crate::error::AppError;
use crate::representation::AirportRepresentation;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let airports = state.service.list().await?;
    Ok(Json(airports))
}

pub async fn get(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let airport = state.service.get(&code).await?;
    Ok(Json(airport))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<AirportRepresentation>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.service.create(&body).await?;
    let location = created.link("self").unwrap_or_default().to_string();
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(body): Json<AirportRepresentation>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.service.update(&code, &body).await?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.service.delete(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
