//! Drift Detection Logic
//!
//! This module compares the distribution of each feature between a reference and a
//! production dataset. Continuous features use the two-sample Kolmogorov-Smirnov test,
//! categorical and low cardinality numeric features use a chi-square goodness-of-fit
//! test over the aligned category sets.

pub mod align;
pub mod calculation;
pub mod classify;
pub mod sample;
pub mod stats;

pub use calculation::{compare, detect_drift, DriftDetector};
pub use classify::{classify, FeatureKind};
pub use sample::{FeatureSample, SkipReason};
pub use stats::{chi2_goodness_of_fit, ks_2samp, TestOutcome};
