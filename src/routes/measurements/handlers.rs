use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::common::AppState;
use crate::entity::{measurements, sensors};
use crate::error::{AppError, AppResult};
use crate::routes::converters::{measurement_url, SensorByName};
use crate::routes::json::JsonDocument;
use crate::validation;

use super::types::{
    MeasurementDocument, MeasurementListResponse, MeasurementResponse, MeasurementSummary,
};

/// Find a measurement, but only among those recorded by `sensor`.
async fn find_measurement(
    db: &DatabaseConnection,
    sensor: &sensors::Model,
    measurement_id: i32,
) -> AppResult<measurements::Model> {
    measurements::Entity::find_by_id(measurement_id)
        .filter(measurements::Column::SensorId.eq(sensor.id))
        .one(db)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Measurement {measurement_id} not found for sensor '{}'",
                sensor.name
            ))
        })
}

/// List a sensor's measurements, oldest first
#[utoipa::path(
    get,
    path = "/api/sensors/{sensor}/measurements/",
    params(
        ("sensor" = String, Path, description = "Sensor name"),
    ),
    responses(
        (status = 200, description = "Measurements retrieved successfully", body = MeasurementListResponse),
        (status = 404, description = "Sensor not found"),
    ),
    tag = "measurements"
)]
pub async fn list_measurements(
    State(state): State<AppState>,
    SensorByName(sensor): SensorByName,
) -> AppResult<Json<MeasurementListResponse>> {
    let items = measurements::Entity::find()
        .filter(measurements::Column::SensorId.eq(sensor.id))
        .order_by_asc(measurements::Column::Time)
        .order_by_asc(measurements::Column::Id)
        .all(&state.db)
        .await?
        .into_iter()
        .map(MeasurementSummary::from)
        .collect();

    Ok(Json(MeasurementListResponse { items }))
}

/// Record a measurement for a sensor
#[utoipa::path(
    post,
    path = "/api/sensors/{sensor}/measurements/",
    params(
        ("sensor" = String, Path, description = "Sensor name"),
    ),
    request_body = MeasurementDocument,
    responses(
        (status = 201, description = "Measurement recorded; see the Location header"),
        (status = 400, description = "Document does not match the measurement schema"),
        (status = 404, description = "Sensor not found"),
        (status = 409, description = "Measurement conflicts with stored data"),
        (status = 415, description = "Body is not JSON"),
    ),
    tag = "measurements"
)]
pub async fn create_measurement(
    State(state): State<AppState>,
    SensorByName(sensor): SensorByName,
    document: JsonDocument,
) -> AppResult<impl IntoResponse> {
    let input: MeasurementDocument = document.parse(&validation::MEASUREMENT)?;

    let measurement = measurements::ActiveModel {
        sensor_id: Set(Some(sensor.id)),
        value: Set(input.value),
        time: Set(input.time.with_timezone(&Utc)),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(|e| {
        AppError::from_write(e, |_| {
            format!("Measurement conflicts with stored data for sensor '{}'", sensor.name)
        })
    })?;

    tracing::debug!(
        sensor = %sensor.name,
        measurement_id = measurement.id,
        value = measurement.value,
        "Measurement recorded"
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, measurement_url(&sensor.name, measurement.id))],
    ))
}

/// Get a single measurement
#[utoipa::path(
    get,
    path = "/api/sensors/{sensor}/measurements/{measurement}/",
    params(
        ("sensor" = String, Path, description = "Sensor name"),
        ("measurement" = i32, Path, description = "Measurement ID"),
    ),
    responses(
        (status = 200, description = "Measurement retrieved successfully", body = MeasurementResponse),
        (status = 404, description = "Sensor or measurement not found"),
    ),
    tag = "measurements"
)]
pub async fn get_measurement(
    State(state): State<AppState>,
    SensorByName(sensor): SensorByName,
    Path((_sensor, measurement_id)): Path<(String, i32)>,
) -> AppResult<Json<MeasurementResponse>> {
    let measurement = find_measurement(&state.db, &sensor, measurement_id).await?;

    Ok(Json(MeasurementResponse {
        value: measurement.value,
        time: measurement.time,
    }))
}

/// Delete a single measurement
#[utoipa::path(
    delete,
    path = "/api/sensors/{sensor}/measurements/{measurement}/",
    params(
        ("sensor" = String, Path, description = "Sensor name"),
        ("measurement" = i32, Path, description = "Measurement ID"),
    ),
    responses(
        (status = 204, description = "Measurement deleted"),
        (status = 404, description = "Sensor or measurement not found"),
    ),
    tag = "measurements"
)]
pub async fn delete_measurement(
    State(state): State<AppState>,
    SensorByName(sensor): SensorByName,
    Path((_sensor, measurement_id)): Path<(String, i32)>,
) -> AppResult<StatusCode> {
    let measurement = find_measurement(&state.db, &sensor, measurement_id).await?;

    measurements::Entity::delete_by_id(measurement.id)
        .exec(&state.db)
        .await?;

    tracing::info!(sensor = %sensor.name, measurement_id, "Measurement deleted");

    Ok(StatusCode::NO_CONTENT)
}
