//! Drift Configuration
//!
//! Defines the configuration used by the drift detector: significance level,
//! feature selection, and the numeric constants of the test selection policy.
use crate::constants::{CARDINALITY_CUTOFF, DEFAULT_FEATURES, DEFAULT_THRESHOLD, EXPECTED_COUNT_EPS};
use crate::data::Dataset;
use crate::errors::DriftError;
use crate::utils::{validate_float_parameter, validate_positive_float_parameter};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which features a detection run evaluates.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum FeatureSelection {
    /// A fixed list of feature names, evaluated in this order.
    Listed(Vec<String>),
    /// Every column present in both datasets, in reference column order,
    /// except the target column.
    AllCommon { target: Option<String> },
}

impl Default for FeatureSelection {
    fn default() -> Self {
        FeatureSelection::Listed(DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect())
    }
}

impl FeatureSelection {
    /// Resolve the selection to the ordered list of candidate feature names.
    ///
    /// Listed names are returned as configured (duplicates removed), even when
    /// a dataset lacks them; the detector skips those.
    pub fn resolve(&self, reference: &Dataset, production: &Dataset) -> Vec<String> {
        match self {
            FeatureSelection::Listed(names) => {
                let mut out: Vec<String> = Vec::with_capacity(names.len());
                for n in names {
                    if !out.contains(n) {
                        out.push(n.clone());
                    }
                }
                out
            }
            FeatureSelection::AllCommon { target } => reference
                .column_names()
                .iter()
                .filter(|n| production.contains(n))
                .filter(|n| target.as_deref() != Some(n.as_str()))
                .cloned()
                .collect(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}
fn default_cardinality_cutoff() -> usize {
    CARDINALITY_CUTOFF
}
fn default_expected_count_eps() -> f64 {
    EXPECTED_COUNT_EPS
}

/// Configuration for the `DriftDetector`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct DriftConfig {
    /// Significance level, drift is flagged when `p_value < threshold`.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Features to evaluate.
    #[serde(default)]
    pub features: FeatureSelection,
    /// Numeric features with more distinct reference values than this are continuous.
    #[serde(default = "default_cardinality_cutoff")]
    pub cardinality_cutoff: usize,
    /// Constant added to every expected count of the chi-square test.
    #[serde(default = "default_expected_count_eps")]
    pub expected_count_eps: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        DriftConfig {
            threshold: DEFAULT_THRESHOLD,
            features: FeatureSelection::default(),
            cardinality_cutoff: CARDINALITY_CUTOFF,
            expected_count_eps: EXPECTED_COUNT_EPS,
        }
    }
}

impl DriftConfig {
    /// Set the significance level.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Evaluate a fixed list of features.
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = FeatureSelection::Listed(features.into_iter().map(Into::into).collect());
        self
    }

    /// Evaluate every common column except `target`.
    pub fn with_all_common(mut self, target: Option<&str>) -> Self {
        self.features = FeatureSelection::AllCommon {
            target: target.map(str::to_string),
        };
        self
    }

    /// Set the cardinality cutoff of the feature classifier.
    pub fn with_cardinality_cutoff(mut self, cutoff: usize) -> Self {
        self.cardinality_cutoff = cutoff;
        self
    }

    /// Set the constant added to the chi-square expected counts.
    pub fn with_expected_count_eps(mut self, eps: f64) -> Self {
        self.expected_count_eps = eps;
        self
    }

    /// Check that all parameters are within their valid ranges.
    pub fn validate(&self) -> Result<(), DriftError> {
        validate_float_parameter(self.threshold, 0.0, 1.0, "threshold")?;
        validate_positive_float_parameter(self.expected_count_eps, "expected_count_eps")?;
        Ok(())
    }
}

/// IO
pub trait DriftIO: Serialize + DeserializeOwned + Sized {
    /// Save as a json object to a file.
    ///
    /// * `path` - Path to save to.
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DriftError> {
        fs::write(path, self.json_dump()?).map_err(|e| DriftError::UnableToWrite(e.to_string()))
    }

    /// Dump as a json object
    fn json_dump(&self) -> Result<String, DriftError> {
        serde_json::to_string(self).map_err(|e| DriftError::UnableToWrite(e.to_string()))
    }

    /// Load from Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, DriftError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| DriftError::UnableToRead(e.to_string()))
    }

    /// Load from a path to a json object.
    ///
    /// * `path` - Path to load from.
    fn load<P: AsRef<Path>>(path: P) -> Result<Self, DriftError> {
        let json_str = fs::read_to_string(path).map_err(|e| DriftError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl DriftIO for DriftConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Column;
    use tempfile::tempdir;

    #[test]
    fn test_drift_config_default() {
        let config = DriftConfig::default();
        assert_eq!(config.threshold, 0.05);
        assert_eq!(config.cardinality_cutoff, 10);
        assert_eq!(config.expected_count_eps, 1e-10);
        match &config.features {
            FeatureSelection::Listed(f) => {
                assert_eq!(f.len(), 10);
                assert_eq!(f[0], "CreditScore");
            }
            _ => panic!("default selection should be a list"),
        }
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_drift_config_validate() {
        assert!(DriftConfig::default().with_threshold(1.2).validate().is_err());
        assert!(DriftConfig::default().with_threshold(-0.1).validate().is_err());
        assert!(DriftConfig::default().with_expected_count_eps(0.0).validate().is_err());
        assert!(DriftConfig::default().with_threshold(0.0).validate().is_ok());
    }

    #[test]
    fn test_drift_config_partial_json() {
        let config = DriftConfig::from_json(r#"{"threshold": 0.01}"#).unwrap();
        assert_eq!(config.threshold, 0.01);
        assert_eq!(config.cardinality_cutoff, 10);
        assert_eq!(config.features, FeatureSelection::default());

        let json = r#"{"features": {"AllCommon": {"target": "Exited"}}}"#;
        let config = DriftConfig::from_json(json).unwrap();
        assert_eq!(
            config.features,
            FeatureSelection::AllCommon {
                target: Some("Exited".to_string())
            }
        );
    }

    #[test]
    fn test_drift_config_io_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("drift.json");
        let config = DriftConfig::default().with_features(["Age", "Tenure"]).with_threshold(0.1);
        config.save(&file_path).unwrap();
        let config2 = DriftConfig::load(&file_path).unwrap();
        assert_eq!(config, config2);
    }

    #[test]
    fn test_feature_selection_resolve() {
        let reference = Dataset::from_columns([
            ("Age", Column::from(vec![1.0])),
            ("Exited", Column::from(vec![0_i64])),
            ("Tenure", Column::from(vec![2_i64])),
        ])
        .unwrap();
        let production = Dataset::from_columns([
            ("Tenure", Column::from(vec![2_i64])),
            ("Exited", Column::from(vec![1_i64])),
            ("Age", Column::from(vec![3.0])),
        ])
        .unwrap();

        let all = DriftConfig::default().with_all_common(Some("Exited")).features;
        assert_eq!(all.resolve(&reference, &production), vec!["Age", "Tenure"]);

        let listed = DriftConfig::default().with_features(["Tenure", "Missing", "Tenure"]).features;
        assert_eq!(listed.resolve(&reference, &production), vec!["Tenure", "Missing"]);
    }
}
