// Modules
pub mod config;
pub mod constants;
pub mod data;
pub mod drift;
pub mod errors;
pub mod io;
pub mod report;
pub mod utils;

// Individual classes, and functions
pub use config::{DriftConfig, DriftIO, FeatureSelection};
pub use data::{Column, ColumnKind, Dataset};
pub use drift::{detect_drift, DriftDetector};
pub use errors::DriftError;
pub use io::load_csv;
pub use report::{DriftReport, DriftSummary, FeatureResult, TestType};
