//! Path segment <-> stored entity conversion.

use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::common::AppState;
use crate::entity::sensors;
use crate::error::{AppError, AppResult};

/// Characters that may not appear raw inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Name of the path parameter that carries a sensor name.
pub const SENSOR_PARAM: &str = "sensor";

/// The sensor named by the `{sensor}` path segment.
///
/// Resolution happens before the handler body runs; an unknown name is
/// answered with 404.
#[derive(Debug, Clone)]
pub struct SensorByName(pub sensors::Model);

impl FromRequestParts<AppState> for SensorByName {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let name = params.get(SENSOR_PARAM).ok_or_else(|| {
            AppError::Internal(format!("route has no {{{SENSOR_PARAM}}} segment")).into_response()
        })?;

        resolve_sensor(&state.db, name)
            .await
            .map(Self)
            .map_err(IntoResponse::into_response)
    }
}

/// Look a sensor up by its unique name.
pub async fn resolve_sensor(db: &DatabaseConnection, name: &str) -> AppResult<sensors::Model> {
    sensors::Entity::find()
        .filter(sensors::Column::Name.eq(name))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Sensor '{name}' not found")))
}

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

#[must_use]
pub fn sensor_url(name: &str) -> String {
    format!("/api/sensors/{}/", segment(name))
}

#[must_use]
pub fn measurement_url(sensor_name: &str, measurement_id: i32) -> String {
    format!("{}measurements/{measurement_id}/", sensor_url(sensor_name))
}

#[must_use]
pub fn location_url(location_id: i32) -> String {
    format!("/api/locations/{location_id}/")
}
