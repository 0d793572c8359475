use crate::data::{Category, Column, ColumnKind};
use crate::drift::classify::{classify_column, FeatureKind};
use std::fmt::{self, Display};

/// Non-missing values of one feature in both datasets, tagged with the
/// comparison strategy picked by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureSample {
    Continuous { reference: Vec<f64>, production: Vec<f64> },
    Categorical { reference: Vec<Category>, production: Vec<Category> },
}

/// Why a feature present in both datasets produced no sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// One side has no values left once missing values are dropped.
    EmptySample { reference: usize, production: usize },
    /// The reference is continuous but the production column is not numeric.
    IncompatibleKind(ColumnKind),
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptySample { reference, production } => write!(
                f,
                "empty sample after dropping missing values (reference {}, production {})",
                reference, production
            ),
            SkipReason::IncompatibleKind(kind) => {
                write!(f, "continuous in reference but production column is {:?}", kind)
            }
        }
    }
}

impl FeatureSample {
    /// Drop missing values on each side and classify the feature from the reference column.
    ///
    /// * `reference` - Reference column of the feature.
    /// * `production` - Production column of the feature.
    /// * `cutoff` - Cardinality cutoff of the classifier.
    pub fn build(reference: &Column, production: &Column, cutoff: usize) -> Result<Self, SkipReason> {
        let sample = match classify_column(reference, cutoff) {
            FeatureKind::Continuous => {
                let production = production
                    .numeric_values()
                    .ok_or(SkipReason::IncompatibleKind(production.kind()))?;
                FeatureSample::Continuous {
                    reference: reference.numeric_values().unwrap_or_default(),
                    production,
                }
            }
            FeatureKind::Categorical => FeatureSample::Categorical {
                reference: reference.categories(),
                production: production.categories(),
            },
        };
        let (r, p) = sample.sizes();
        if r == 0 || p == 0 {
            return Err(SkipReason::EmptySample {
                reference: r,
                production: p,
            });
        }
        Ok(sample)
    }

    pub fn kind(&self) -> FeatureKind {
        match self {
            FeatureSample::Continuous { .. } => FeatureKind::Continuous,
            FeatureSample::Categorical { .. } => FeatureKind::Categorical,
        }
    }

    /// Number of (reference, production) values.
    pub fn sizes(&self) -> (usize, usize) {
        match self {
            FeatureSample::Continuous { reference, production } => (reference.len(), production.len()),
            FeatureSample::Categorical { reference, production } => (reference.len(), production.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_drops_missing() {
        let reference = Column::from((0..20).map(|i| i as f64).chain([f64::NAN]).collect::<Vec<_>>());
        let production = Column::from(vec![Some(1_i64), None, Some(2)]);
        let sample = FeatureSample::build(&reference, &production, 10).unwrap();
        assert_eq!(sample.kind(), FeatureKind::Continuous);
        assert_eq!(sample.sizes(), (20, 2));
    }

    #[test]
    fn test_build_categorical() {
        let reference = Column::from(vec!["France", "Spain", "France"]);
        let production = Column::Text(vec![Some("Germany".to_string()), None]);
        let sample = FeatureSample::build(&reference, &production, 10).unwrap();
        assert_eq!(sample.kind(), FeatureKind::Categorical);
        assert_eq!(sample.sizes(), (3, 1));
    }

    #[test]
    fn test_build_empty_sample() {
        let reference = Column::from(vec![1_i64, 0, 1]);
        let production = Column::Integer(vec![None, None]);
        let err = FeatureSample::build(&reference, &production, 10).unwrap_err();
        assert_eq!(
            err,
            SkipReason::EmptySample {
                reference: 3,
                production: 0
            }
        );

        let reference = Column::Float(vec![f64::NAN; 4]);
        let production = Column::from(vec![1.0, 2.0, 3.0, 4.0]);
        assert!(FeatureSample::build(&reference, &production, 10).is_err());
    }

    #[test]
    fn test_build_incompatible_production() {
        let reference = Column::from((0..50).collect::<Vec<i64>>());
        let production = Column::from(vec!["a"; 50]);
        let err = FeatureSample::build(&reference, &production, 10).unwrap_err();
        assert_eq!(err, SkipReason::IncompatibleKind(ColumnKind::Text));
    }
}
