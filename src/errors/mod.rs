pub mod types;
pub mod classification;

pub use types::VajraError;
pub use classification::ErrorClassification;
