use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::measurements;

/// Body accepted by `POST /api/sensors/{sensor}/measurements/`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MeasurementDocument {
    /// Measured value
    pub value: f64,
    /// Time of measurement (RFC 3339)
    pub time: DateTime<FixedOffset>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MeasurementResponse {
    pub value: f64,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MeasurementSummary {
    pub id: i32,
    pub value: f64,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MeasurementListResponse {
    pub items: Vec<MeasurementSummary>,
}

impl From<measurements::Model> for MeasurementSummary {
    fn from(m: measurements::Model) -> Self {
        Self {
            id: m.id,
            value: m.value,
            time: m.time,
        }
    }
}
