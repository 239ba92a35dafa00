pub mod cli;
pub mod collector;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod prober;
pub mod report;

// Re-export key types and functions at the crate root
pub use collector::load_targets;
pub use config::RunConfig;
pub use engine::{ScanEngine, ScanReport};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use prober::{HttpProber, Probe, ProbeOutcome};
pub use report::print_report;
