mod handlers;
mod types;

pub use handlers::{create_location, get_location};
pub use types::{LocationDocument, LocationResponse, LocationSummary, LocationView};

// Re-export utoipa path structs for OpenAPI documentation
pub use handlers::{__path_create_location, __path_get_location};
