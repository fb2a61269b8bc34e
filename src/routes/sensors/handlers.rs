use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

use crate::common::AppState;
use crate::entity::{locations, sensors};
use crate::error::{AppError, AppResult};
use crate::routes::converters::{sensor_url, SensorByName};
use crate::routes::json::JsonDocument;
use crate::routes::locations::LocationView;
use crate::validation;

use super::types::{SensorDocument, SensorListResponse, SensorResponse};

/// Message for a unique violation on `sensors`, picked by the violated column.
fn sensor_conflict(detail: &str, name: &str, location_id: Option<i32>) -> String {
    match location_id {
        Some(location_id) if detail.contains("location_id") => {
            format!("Location {location_id} is already attached to another sensor")
        }
        _ => format!("Sensor with name '{name}' already exists."),
    }
}

/// Make sure `location_id` exists and is not attached to another sensor.
async fn ensure_location_available(
    db: &DatabaseConnection,
    location_id: i32,
    sensor_id: Option<i32>,
) -> AppResult<()> {
    if locations::Entity::find_by_id(location_id)
        .one(db)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest(format!(
            "Location {location_id} does not exist"
        )));
    }

    let holder = sensors::Entity::find()
        .filter(sensors::Column::LocationId.eq(location_id))
        .one(db)
        .await?;

    match holder {
        Some(other) if Some(other.id) != sensor_id => Err(AppError::Conflict(format!(
            "Location {location_id} is already attached to sensor '{}'",
            other.name
        ))),
        _ => Ok(()),
    }
}

/// List all sensors
#[utoipa::path(
    get,
    path = "/api/sensors/",
    responses(
        (status = 200, description = "Sensors retrieved successfully", body = SensorListResponse),
    ),
    tag = "sensors"
)]
pub async fn list_sensors(State(state): State<AppState>) -> AppResult<Json<SensorListResponse>> {
    let rows = sensors::Entity::find()
        .find_also_related(locations::Entity)
        .order_by_asc(sensors::Column::Id)
        .all(&state.db)
        .await?;

    let items = rows
        .into_iter()
        .map(|(s, location)| SensorResponse {
            name: s.name,
            model: s.model,
            location: location.map(LocationView::short),
        })
        .collect();

    Ok(Json(SensorListResponse { items }))
}

/// Create a sensor
#[utoipa::path(
    post,
    path = "/api/sensors/",
    request_body = SensorDocument,
    responses(
        (status = 201, description = "Sensor created; see the Location header"),
        (status = 400, description = "Document does not match the sensor schema"),
        (status = 409, description = "A sensor with this name already exists"),
        (status = 415, description = "Body is not JSON"),
    ),
    tag = "sensors"
)]
pub async fn create_sensor(
    State(state): State<AppState>,
    document: JsonDocument,
) -> AppResult<impl IntoResponse> {
    let input: SensorDocument = document.parse(&validation::SENSOR)?;

    if let Some(location_id) = input.location_id {
        ensure_location_available(&state.db, location_id, None).await?;
    }

    let sensor = sensors::ActiveModel {
        name: Set(input.name.clone()),
        model: Set(input.model),
        location_id: Set(input.location_id),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(|e| {
        AppError::from_write(e, |detail| {
            sensor_conflict(detail, &input.name, input.location_id)
        })
    })?;

    tracing::info!(sensor_id = sensor.id, name = %sensor.name, "Sensor created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, sensor_url(&sensor.name))],
    ))
}

/// Get a sensor by name
#[utoipa::path(
    get,
    path = "/api/sensors/{sensor}/",
    params(
        ("sensor" = String, Path, description = "Sensor name"),
    ),
    responses(
        (status = 200, description = "Sensor retrieved successfully", body = SensorResponse),
        (status = 404, description = "Sensor not found"),
    ),
    tag = "sensors"
)]
pub async fn get_sensor(
    State(state): State<AppState>,
    SensorByName(sensor): SensorByName,
) -> AppResult<Json<SensorResponse>> {
    let location = match sensor.location_id {
        Some(location_id) => locations::Entity::find_by_id(location_id)
            .one(&state.db)
            .await?,
        None => None,
    };

    Ok(Json(SensorResponse {
        name: sensor.name,
        model: sensor.model,
        location: location.map(LocationView::full),
    }))
}

/// Replace a sensor's name and model
#[utoipa::path(
    put,
    path = "/api/sensors/{sensor}/",
    params(
        ("sensor" = String, Path, description = "Sensor name"),
    ),
    request_body = SensorDocument,
    responses(
        (status = 204, description = "Sensor updated"),
        (status = 400, description = "Document does not match the sensor schema"),
        (status = 404, description = "Sensor not found"),
        (status = 409, description = "Another sensor already has this name"),
        (status = 415, description = "Body is not JSON"),
    ),
    tag = "sensors"
)]
pub async fn update_sensor(
    State(state): State<AppState>,
    SensorByName(sensor): SensorByName,
    document: JsonDocument,
) -> AppResult<StatusCode> {
    let input: SensorDocument = document.parse(&validation::SENSOR)?;

    if let Some(location_id) = input.location_id {
        ensure_location_available(&state.db, location_id, Some(sensor.id)).await?;
    }

    let sensor_id = sensor.id;
    let mut active = sensor.into_active_model();
    active.name = Set(input.name.clone());
    active.model = Set(input.model);
    if let Some(location_id) = input.location_id {
        active.location_id = Set(Some(location_id));
    }

    active
        .update(&state.db)
        .await
        .map_err(|e| {
            AppError::from_write(e, |detail| {
                sensor_conflict(detail, &input.name, input.location_id)
            })
        })?;

    tracing::info!(sensor_id, name = %input.name, "Sensor updated");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a sensor
///
/// Measurements recorded by the sensor are kept with their sensor reference cleared.
#[utoipa::path(
    delete,
    path = "/api/sensors/{sensor}/",
    params(
        ("sensor" = String, Path, description = "Sensor name"),
    ),
    responses(
        (status = 204, description = "Sensor deleted"),
        (status = 404, description = "Sensor not found"),
    ),
    tag = "sensors"
)]
pub async fn delete_sensor(
    State(state): State<AppState>,
    SensorByName(sensor): SensorByName,
) -> AppResult<StatusCode> {
    sensors::Entity::delete_by_id(sensor.id)
        .exec(&state.db)
        .await?;

    tracing::info!(sensor_id = sensor.id, name = %sensor.name, "Sensor deleted");

    Ok(StatusCode::NO_CONTENT)
}
