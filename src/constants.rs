/// Distinct non-missing reference values a numeric feature must exceed to be continuous.
pub const CARDINALITY_CUTOFF: usize = 10;
/// Added to every expected count of the chi-square test.
pub const EXPECTED_COUNT_EPS: f64 = 1e-10;
/// Default significance level.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// Features of the churn model checked when no explicit list is configured.
pub const DEFAULT_FEATURES: [&str; 10] = [
    "CreditScore",
    "Age",
    "Tenure",
    "Balance",
    "NumOfProducts",
    "HasCrCard",
    "IsActiveMember",
    "EstimatedSalary",
    "Geography_Germany",
    "Geography_Spain",
];

/// Below this lambda the Kolmogorov survival function uses the theta-function form.
pub const KS_SMALL_LAMBDA: f64 = 1.18;
/// Maximum number of terms summed for the Kolmogorov series.
pub const KS_SERIES_TERMS: usize = 100;
/// Convergence tolerance for the Kolmogorov series.
pub const KS_SERIES_EPS: f64 = 1e-16;

/// Cell values read as missing by the CSV loader, besides the empty string.
pub const MISSING_TOKENS: [&str; 7] = ["NaN", "nan", "NA", "N/A", "null", "NULL", "None"];
