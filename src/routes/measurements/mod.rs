mod handlers;
mod types;

pub use handlers::{create_measurement, delete_measurement, get_measurement, list_measurements};
pub use types::{
    MeasurementDocument, MeasurementListResponse, MeasurementResponse, MeasurementSummary,
};

// Re-export utoipa path structs for OpenAPI documentation
pub use handlers::{
    __path_create_measurement, __path_delete_measurement, __path_get_measurement,
    __path_list_measurements,
};
