//! Report
//!
//! Per-feature drift verdicts and the ordered mapping returned by a detection run.
use crate::errors::DriftError;
use crate::utils::{items_to_strings, precision_round};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Statistical test used for a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestType {
    /// Two-sample Kolmogorov-Smirnov test.
    #[serde(rename = "ks_test")]
    KolmogorovSmirnov,
    /// Chi-square goodness-of-fit test.
    #[serde(rename = "chi2_test")]
    ChiSquare,
}

impl TestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::KolmogorovSmirnov => "ks_test",
            TestType::ChiSquare => "chi2_test",
        }
    }
}

impl Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = DriftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ks_test" => Ok(TestType::KolmogorovSmirnov),
            "chi2_test" => Ok(TestType::ChiSquare),
            _ => Err(DriftError::ParseString(
                s.to_string(),
                "TestType".to_string(),
                items_to_strings(vec!["ks_test", "chi2_test"]),
            )),
        }
    }
}

/// Drift verdict for a single feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureResult {
    /// Feature (column) name.
    pub feature: String,
    /// Test used to compare the two samples.
    #[serde(rename = "type")]
    pub test_type: TestType,
    /// Test statistic, never negative.
    pub statistic: f64,
    /// p-value in `[0, 1]`.
    pub p_value: f64,
    /// `p_value < threshold`.
    pub drift_detected: bool,
    /// Significance level the verdict was made against.
    pub threshold: f64,
}

impl FeatureResult {
    /// Build a result, deriving the verdict from `p_value` and `threshold`.
    pub fn new<S: Into<String>>(feature: S, test_type: TestType, statistic: f64, p_value: f64, threshold: f64) -> Self {
        FeatureResult {
            feature: feature.into(),
            test_type,
            statistic,
            p_value,
            drift_detected: p_value < threshold,
            threshold,
        }
    }
}

/// Aggregate counts over a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftSummary {
    /// Number of features with a result.
    pub features_analyzed: usize,
    /// Number of features flagged as drifted.
    pub features_drifted: usize,
    /// Drifted share of the analyzed features, rounded to 4 digits.
    pub drift_share: f64,
}

/// Ordered mapping from feature name to [`FeatureResult`].
///
/// Keys are unique and follow evaluation order. Serializes as a JSON object
/// keyed by feature name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriftReport {
    results: Vec<FeatureResult>,
}

impl DriftReport {
    pub(crate) fn from_results(results: Vec<FeatureResult>) -> Self {
        DriftReport { results }
    }

    /// Get the result of a feature.
    pub fn get(&self, feature: &str) -> Option<&FeatureResult> {
        self.results.iter().find(|r| r.feature == feature)
    }

    /// Whether the feature has a result.
    pub fn contains(&self, feature: &str) -> bool {
        self.get(feature).is_some()
    }

    /// Results in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, FeatureResult> {
        self.results.iter()
    }

    /// Feature names in evaluation order.
    pub fn features(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.feature.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Names of the features flagged as drifted.
    pub fn drifted_features(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| r.drift_detected)
            .map(|r| r.feature.as_str())
            .collect()
    }

    /// Aggregate counts for display.
    pub fn summary(&self) -> DriftSummary {
        let features_analyzed = self.results.len();
        let features_drifted = self.results.iter().filter(|r| r.drift_detected).count();
        let drift_share = if features_analyzed == 0 {
            0.0
        } else {
            precision_round(features_drifted as f64 / features_analyzed as f64, 4)
        };
        DriftSummary {
            features_analyzed,
            features_drifted,
            drift_share,
        }
    }

    /// Dump the report as a json object.
    pub fn json_dump(&self) -> Result<String, DriftError> {
        serde_json::to_string(self).map_err(|e| DriftError::UnableToWrite(e.to_string()))
    }
}

impl<'a> IntoIterator for &'a DriftReport {
    type Item = &'a FeatureResult;
    type IntoIter = std::slice::Iter<'a, FeatureResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl Serialize for DriftReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.results.len()))?;
        for r in &self.results {
            map.serialize_entry(&r.feature, r)?;
        }
        map.end()
    }
}
