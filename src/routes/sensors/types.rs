use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::routes::locations::LocationView;

/// Body accepted by `POST /api/sensors/` and `PUT /api/sensors/{sensor}/`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SensorDocument {
    /// Sensor's unique name
    pub name: String,
    /// Name of the sensor's model
    pub model: String,
    /// Attach the sensor to this location; left unchanged when omitted
    #[serde(default)]
    pub location_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SensorResponse {
    pub name: String,
    pub model: String,
    pub location: Option<LocationView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SensorListResponse {
    pub items: Vec<SensorResponse>,
}
