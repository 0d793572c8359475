//! Data
//!
//! Tabular containers handed to the drift detector: a [`Dataset`] of named,
//! homogeneous [`Column`]s, and the [`Category`] key used to compare discrete values.
use crate::errors::DriftError;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

/// Storage kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// 64 bit floating point values.
    Float,
    /// 64 bit signed integers.
    Integer,
    /// Boolean flags stored as `true`/`false`.
    Boolean,
    /// Free text or string codes.
    Text,
}

impl ColumnKind {
    /// Float and integer storage are numeric, everything else is not.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Float | ColumnKind::Integer)
    }
}

/// A single homogeneous column.
///
/// Missing values are `NaN` for [`Column::Float`] and `None` for every other kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Float(Vec<f64>),
    Integer(Vec<Option<i64>>),
    Boolean(Vec<Option<bool>>),
    Text(Vec<Option<String>>),
}

impl Column {
    /// Storage kind of the column.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Float(_) => ColumnKind::Float,
            Column::Integer(_) => ColumnKind::Integer,
            Column::Boolean(_) => ColumnKind::Boolean,
            Column::Text(_) => ColumnKind::Text,
        }
    }

    /// Number of rows, missing values included.
    pub fn len(&self) -> usize {
        match self {
            Column::Float(v) => v.len(),
            Column::Integer(v) => v.len(),
            Column::Boolean(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of missing values.
    pub fn null_count(&self) -> usize {
        match self {
            Column::Float(v) => v.iter().filter(|x| x.is_nan()).count(),
            Column::Integer(v) => v.iter().filter(|x| x.is_none()).count(),
            Column::Boolean(v) => v.iter().filter(|x| x.is_none()).count(),
            Column::Text(v) => v.iter().filter(|x| x.is_none()).count(),
        }
    }

    /// Non-missing values as floats, or `None` when the column is not numeric.
    pub fn numeric_values(&self) -> Option<Vec<f64>> {
        match self {
            Column::Float(v) => Some(v.iter().copied().filter(|x| !x.is_nan()).collect()),
            Column::Integer(v) => Some(v.iter().flatten().map(|x| *x as f64).collect()),
            Column::Boolean(_) | Column::Text(_) => None,
        }
    }

    /// Non-missing values as category keys, in row order.
    pub fn categories(&self) -> Vec<Category> {
        match self {
            Column::Float(v) => v.iter().filter(|x| !x.is_nan()).map(|x| Category::number(*x)).collect(),
            Column::Integer(v) => v.iter().flatten().map(|x| Category::number(*x as f64)).collect(),
            Column::Boolean(v) => v.iter().flatten().map(|x| Category::Bool(*x)).collect(),
            Column::Text(v) => v.iter().flatten().map(|x| Category::Text(x.clone())).collect(),
        }
    }
}

impl From<Vec<f64>> for Column {
    fn from(v: Vec<f64>) -> Self {
        Column::Float(v)
    }
}

impl From<Vec<i64>> for Column {
    fn from(v: Vec<i64>) -> Self {
        Column::Integer(v.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<i64>>> for Column {
    fn from(v: Vec<Option<i64>>) -> Self {
        Column::Integer(v)
    }
}

impl From<Vec<bool>> for Column {
    fn from(v: Vec<bool>) -> Self {
        Column::Boolean(v.into_iter().map(Some).collect())
    }
}

impl From<Vec<&str>> for Column {
    fn from(v: Vec<&str>) -> Self {
        Column::Text(v.into_iter().map(|s| Some(s.to_string())).collect())
    }
}

impl From<Vec<Option<String>>> for Column {
    fn from(v: Vec<Option<String>>) -> Self {
        Column::Text(v)
    }
}

/// A discrete value used as a frequency table key.
///
/// Integer and float storage share the `Number` variant, so `1` and `1.0`
/// are the same category. Negative zero is folded into zero.
#[derive(Debug, Clone)]
pub enum Category {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Category {
    /// Numeric category key.
    pub fn number(v: f64) -> Self {
        if v == 0.0 {
            Category::Number(0.0)
        } else {
            Category::Number(v)
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Category::Bool(_) => 0,
            Category::Number(_) => 1,
            Category::Text(_) => 2,
        }
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Category {}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Category::Bool(a), Category::Bool(b)) => a.cmp(b),
            (Category::Number(a), Category::Number(b)) => a.total_cmp(b),
            (Category::Text(a), Category::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Category::Bool(b) => b.hash(state),
            Category::Number(v) => v.to_bits().hash(state),
            Category::Text(s) => s.hash(state),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Bool(b) => write!(f, "{}", b),
            Category::Number(v) => write!(f, "{}", v),
            Category::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Table of named columns, all with the same number of rows.
///
/// Column order is the insertion order, which is also the order used when
/// every common column is evaluated.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    names: Vec<String>,
    columns: HashMap<String, Column>,
    rows: usize,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Dataset::default()
    }

    /// Build a dataset from `(name, column)` pairs.
    pub fn from_columns<I, S>(columns: I) -> Result<Self, DriftError>
    where
        I: IntoIterator<Item = (S, Column)>,
        S: Into<String>,
    {
        let mut dataset = Dataset::new();
        for (name, column) in columns {
            dataset.insert(name, column)?;
        }
        Ok(dataset)
    }

    /// Add a column, replacing any column already stored under the same name.
    ///
    /// * `name` - Column name.
    /// * `column` - Column values, must match the row count of the existing columns.
    pub fn insert<S: Into<String>>(&mut self, name: S, column: Column) -> Result<(), DriftError> {
        let name = name.into();
        let replacing = self.columns.contains_key(&name);
        let expected = if self.names.is_empty() || (replacing && self.names.len() == 1) {
            column.len()
        } else {
            self.rows
        };
        if column.len() != expected {
            return Err(DriftError::RaggedDataset(name, column.len(), expected));
        }
        self.rows = expected;
        if !replacing {
            self.names.push(name.clone());
        }
        self.columns.insert(name, column);
        Ok(())
    }

    /// Builder form of [`Dataset::insert`].
    pub fn with_column<S: Into<String>>(mut self, name: S, column: Column) -> Result<Self, DriftError> {
        self.insert(name, column)?;
        Ok(self)
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Whether a column with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_numeric_values_drop_missing() {
        let col = Column::Float(vec![1.0, f64::NAN, 3.0]);
        assert_eq!(col.numeric_values().unwrap(), vec![1.0, 3.0]);
        assert_eq!(col.null_count(), 1);

        let col = Column::Integer(vec![Some(4), None, Some(6)]);
        assert_eq!(col.numeric_values().unwrap(), vec![4.0, 6.0]);
        assert_eq!(col.kind(), ColumnKind::Integer);

        let col = Column::from(vec!["a", "b"]);
        assert!(col.numeric_values().is_none());
    }

    #[test]
    fn test_category_numeric_keys_match_across_storage() {
        let ints = Column::from(vec![0_i64, 1]).categories();
        let floats = Column::from(vec![-0.0, 1.0]).categories();
        assert_eq!(ints, floats);
        assert_ne!(Category::Text("1".to_string()), Category::number(1.0));
        assert!(Category::Bool(true) < Category::number(0.0));
    }

    #[test]
    fn test_dataset_insert() {
        let mut ds = Dataset::new();
        ds.insert("a", Column::from(vec![1.0, 2.0])).unwrap();
        ds.insert("b", Column::from(vec![1_i64, 2])).unwrap();
        assert_eq!(ds.rows(), 2);
        assert_eq!(ds.cols(), 2);
        assert_eq!(ds.column_names(), &["a".to_string(), "b".to_string()]);

        ds.insert("a", Column::from(vec!["x", "y"])).unwrap();
        assert_eq!(ds.column_names().len(), 2);
        assert_eq!(ds.column("a").unwrap().kind(), ColumnKind::Text);

        let err = ds.insert("c", Column::from(vec![1.0])).unwrap_err();
        assert!(matches!(err, DriftError::RaggedDataset(_, 1, 2)));
        assert!(!ds.contains("c"));
    }
}
