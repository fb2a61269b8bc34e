//! SeaORM entities. Relationships are plain foreign-key columns; related rows
//! are fetched with explicit queries, never held by the models themselves.

pub mod deployments;
pub mod locations;
pub mod measurements;
pub mod products;
pub mod sensor_deployments;
pub mod sensors;
pub mod storage_items;
