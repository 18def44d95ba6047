pub mod invoker;
pub mod parser;

pub use invoker::{ExternalScanner, Scanner, ScannerOutput};
pub use parser::parse_findings;
