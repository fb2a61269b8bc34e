use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::locations;

/// Body accepted by `POST /api/locations/`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LocationDocument {
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LocationResponse {
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LocationSummary {
    pub name: String,
}

/// A location rendered inside a sensor: only the name in listings, every
/// column on the sensor's own page.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum LocationView {
    Full(LocationResponse),
    Short(LocationSummary),
}

impl From<locations::Model> for LocationResponse {
    fn from(l: locations::Model) -> Self {
        Self {
            name: l.name,
            latitude: l.latitude,
            longitude: l.longitude,
            altitude: l.altitude,
            description: l.description,
        }
    }
}

impl LocationView {
    #[must_use]
    pub fn full(location: locations::Model) -> Self {
        Self::Full(location.into())
    }

    #[must_use]
    pub fn short(location: locations::Model) -> Self {
        Self::Short(LocationSummary {
            name: location.name,
        })
    }
}
