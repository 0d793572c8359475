use crate::data::{Category, Column, ColumnKind};
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

/// How a feature is compared between the two datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Compared with the two-sample Kolmogorov-Smirnov test.
    Continuous,
    /// Compared with the chi-square goodness-of-fit test.
    Categorical,
}

/// Classify a feature from its reference storage kind and distinct value count.
///
/// A feature is continuous only when its storage is numeric and it has strictly
/// more than `cutoff` distinct non-missing values. Everything else, low cardinality
/// numeric codes and flags included, is categorical.
pub fn classify(kind: ColumnKind, distinct: usize, cutoff: usize) -> FeatureKind {
    if kind.is_numeric() && distinct > cutoff {
        FeatureKind::Continuous
    } else {
        FeatureKind::Categorical
    }
}

/// Classify a reference column.
pub fn classify_column(column: &Column, cutoff: usize) -> FeatureKind {
    if !column.kind().is_numeric() {
        return FeatureKind::Categorical;
    }
    let distinct = column.categories().into_iter().collect::<HashSet<Category>>().len();
    classify(column.kind(), distinct, cutoff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinality_boundary() {
        assert_eq!(classify(ColumnKind::Integer, 10, 10), FeatureKind::Categorical);
        assert_eq!(classify(ColumnKind::Integer, 11, 10), FeatureKind::Continuous);
        assert_eq!(classify(ColumnKind::Float, 11, 10), FeatureKind::Continuous);
        assert_eq!(classify(ColumnKind::Text, 500, 10), FeatureKind::Categorical);
        assert_eq!(classify(ColumnKind::Boolean, 2, 0), FeatureKind::Categorical);
    }

    #[test]
    fn test_classify_column() {
        let flag = Column::from(vec![0_i64, 1, 1, 0, 1]);
        assert_eq!(classify_column(&flag, 10), FeatureKind::Categorical);

        let ten: Vec<f64> = (0..10).map(|i| i as f64).chain([f64::NAN, 3.0]).collect();
        assert_eq!(classify_column(&Column::from(ten), 10), FeatureKind::Categorical);

        let eleven: Vec<i64> = (0..11).collect();
        assert_eq!(classify_column(&Column::from(eleven), 10), FeatureKind::Continuous);

        let text = Column::from(vec!["a", "b"]);
        assert_eq!(classify_column(&text, 0), FeatureKind::Categorical);
    }
}
