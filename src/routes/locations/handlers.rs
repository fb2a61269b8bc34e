use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use crate::common::AppState;
use crate::entity::locations;
use crate::error::{AppError, AppResult};
use crate::routes::converters::location_url;
use crate::routes::json::JsonDocument;
use crate::validation;

use super::types::{LocationDocument, LocationResponse};

/// Create a location
#[utoipa::path(
    post,
    path = "/api/locations/",
    request_body = LocationDocument,
    responses(
        (status = 201, description = "Location created; see the Location header"),
        (status = 400, description = "Document does not match the location schema"),
        (status = 415, description = "Body is not JSON"),
    ),
    tag = "locations"
)]
pub async fn create_location(
    State(state): State<AppState>,
    document: JsonDocument,
) -> AppResult<impl IntoResponse> {
    let input: LocationDocument = document.parse(&validation::LOCATION)?;

    let location = locations::ActiveModel {
        name: Set(input.name),
        latitude: Set(input.latitude),
        longitude: Set(input.longitude),
        altitude: Set(input.altitude),
        description: Set(input.description),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    tracing::info!(location_id = location.id, name = %location.name, "Location created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location_url(location.id))],
    ))
}

/// Get a location by ID
#[utoipa::path(
    get,
    path = "/api/locations/{location}/",
    params(
        ("location" = i32, Path, description = "Location ID"),
    ),
    responses(
        (status = 200, description = "Location retrieved successfully", body = LocationResponse),
        (status = 404, description = "Location not found"),
    ),
    tag = "locations"
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(location_id): Path<i32>,
) -> AppResult<Json<LocationResponse>> {
    let location = locations::Entity::find_by_id(location_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Location {location_id} not found")))?;

    Ok(Json(location.into()))
}
