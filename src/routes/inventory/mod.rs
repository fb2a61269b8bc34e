//! Products and where they are stored.

mod handlers;
mod types;

pub use handlers::{add_product, add_to_storage, get_inventory};
pub use types::{InventoryEntry, ProductDocument, StorageDocument};

// Re-export utoipa path structs for OpenAPI documentation
pub use handlers::{__path_add_product, __path_add_to_storage, __path_get_inventory};
