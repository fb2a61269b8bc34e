mod database;
mod state;

pub use database::{connect, StartupError};
pub use state::AppState;
