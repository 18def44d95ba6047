pub mod orchestrator;

pub use orchestrator::{ScanOutcome, ScanPipeline};
