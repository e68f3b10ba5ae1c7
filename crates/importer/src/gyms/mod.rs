pub mod generator;
pub mod models;
pub mod sql;
pub mod validator;

pub use generator::{SqlGenerator, SqlScript};
pub use models::{GymRecord, InternalId, RawGymRecord};
pub use validator::{GymValidator, SkipReason, SkippedRecord, ValidationReport};
