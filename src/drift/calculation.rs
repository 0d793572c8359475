use crate::config::DriftConfig;
use crate::data::{Column, Dataset};
use crate::drift::align::align_samples;
use crate::drift::sample::FeatureSample;
use crate::drift::stats::{chi2_goodness_of_fit, ks_2samp, TestOutcome};
use crate::errors::DriftError;
use crate::io::load_csv;
use crate::report::{DriftReport, FeatureResult, TestType};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::path::Path;

/// Run the test matching the sample's kind.
///
/// * `sample` - Non-empty feature sample.
/// * `eps` - Constant added to the chi-square expected counts.
pub fn compare(sample: &FeatureSample, eps: f64) -> (TestType, TestOutcome) {
    match sample {
        FeatureSample::Continuous { reference, production } => {
            (TestType::KolmogorovSmirnov, ks_2samp(reference, production))
        }
        FeatureSample::Categorical { reference, production } => {
            let aligned = align_samples(reference, production);
            let outcome = chi2_goodness_of_fit(&aligned, production.len(), eps);
            (TestType::ChiSquare, outcome.into())
        }
    }
}

/// Compares a reference and a production dataset feature by feature.
///
/// The detector holds only its configuration, every call to
/// [`DriftDetector::detect`] is independent of the others.
#[derive(Debug, Clone, Default)]
pub struct DriftDetector {
    config: DriftConfig,
}

impl DriftDetector {
    /// Create a detector, validating the configuration.
    pub fn new(config: DriftConfig) -> Result<Self, DriftError> {
        config.validate()?;
        Ok(DriftDetector { config })
    }

    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    /// Evaluate a single feature.
    ///
    /// Returns `None` when the feature has no usable sample on one side.
    ///
    /// * `feature` - Feature name.
    /// * `reference` - Reference column.
    /// * `production` - Production column.
    pub fn evaluate_feature(&self, feature: &str, reference: &Column, production: &Column) -> Option<FeatureResult> {
        let sample = match FeatureSample::build(reference, production, self.config.cardinality_cutoff) {
            Ok(s) => s,
            Err(reason) => {
                warn!("Skipping feature {}: {}.", feature, reason);
                return None;
            }
        };
        let (test_type, outcome) = compare(&sample, self.config.expected_count_eps);
        let result = FeatureResult::new(
            feature,
            test_type,
            outcome.statistic,
            outcome.p_value,
            self.config.threshold,
        );
        debug!(
            "Feature {}: {} statistic {:.6}, p-value {:.6}, drift {}.",
            feature, test_type, result.statistic, result.p_value, result.drift_detected
        );
        Some(result)
    }

    /// Detect drift between two in-memory datasets.
    ///
    /// Features absent from either dataset or without usable values are left out
    /// of the report, they never fail the run.
    ///
    /// * `reference` - Baseline dataset.
    /// * `production` - Dataset checked against the baseline.
    pub fn detect(&self, reference: &Dataset, production: &Dataset) -> DriftReport {
        let features = self.config.features.resolve(reference, production);
        info!("Checking {} features for drift.", features.len());
        let mut results = Vec::with_capacity(features.len());
        for feature in &features {
            let (r, p) = match (reference.column(feature), production.column(feature)) {
                (Some(r), Some(p)) => (r, p),
                _ => {
                    warn!("Skipping feature {}: not present in both datasets.", feature);
                    continue;
                }
            };
            if let Some(result) = self.evaluate_feature(feature, r, p) {
                results.push(result);
            }
        }
        let report = DriftReport::from_results(results);
        let summary = report.summary();
        info!(
            "Drift detected in {} of {} analyzed features.",
            summary.features_drifted, summary.features_analyzed
        );
        report
    }

    /// Load both datasets from CSV files and detect drift between them.
    ///
    /// Fails with [`DriftError::DatasetNotFound`] or [`DriftError::UnableToRead`]
    /// when either file cannot be loaded.
    ///
    /// * `reference_file` - Path of the reference CSV.
    /// * `production_file` - Path of the production CSV.
    pub fn detect_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        reference_file: P,
        production_file: Q,
    ) -> Result<DriftReport, DriftError> {
        let reference = load_csv(reference_file)?;
        let production = load_csv(production_file)?;
        Ok(self.detect(&reference, &production))
    }

    /// Detect drift for several independent dataset pairs in parallel.
    ///
    /// Reports are returned in the order of `pairs`.
    pub fn detect_pairs(&self, pairs: &[(&Dataset, &Dataset)]) -> Vec<DriftReport> {
        pairs
            .par_iter()
            .map(|(reference, production)| self.detect(reference, production))
            .collect()
    }
}

/// Detect drift on the default churn features between two CSV files.
///
/// * `reference_file` - Path of the reference CSV.
/// * `production_file` - Path of the production CSV.
/// * `threshold` - Significance level.
pub fn detect_drift<P: AsRef<Path>, Q: AsRef<Path>>(
    reference_file: P,
    production_file: Q,
    threshold: f64,
) -> Result<DriftReport, DriftError> {
    DriftDetector::new(DriftConfig::default().with_threshold(threshold))?.detect_files(reference_file, production_file)
}
