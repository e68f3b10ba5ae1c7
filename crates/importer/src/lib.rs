pub mod chain;
pub mod error;
pub mod gyms;
pub mod loader;

pub use chain::ChainConfig;
pub use error::{ImporterError, Result};
pub use gyms::{SqlGenerator, SqlScript};
pub use loader::{load_gym_records, resolve_input_path};
