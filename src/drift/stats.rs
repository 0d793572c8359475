use crate::constants::{KS_SERIES_EPS, KS_SERIES_TERMS, KS_SMALL_LAMBDA};
use crate::drift::align::AlignedFrequencies;
use statrs::distribution::{ChiSquared, ContinuousCDF};
use std::f64::consts::PI;

/// Statistic and p-value of a two-sample test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestOutcome {
    pub statistic: f64,
    pub p_value: f64,
}

/// Two-sample Kolmogorov-Smirnov D statistic, the largest absolute difference
/// between the empirical CDFs of `a` and `b`.
///
/// Both samples must be non-empty and free of `NaN`.
pub fn ks_statistic(a: &[f64], b: &[f64]) -> f64 {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_by(f64::total_cmp);
    b.sort_by(f64::total_cmp);
    let (n1, n2) = (a.len() as f64, b.len() as f64);
    let (mut i, mut j) = (0, 0);
    let mut d: f64 = 0.0;
    while i < a.len() && j < b.len() {
        let v = if a[i] <= b[j] { a[i] } else { b[j] };
        // Step over every tie of v on both sides before comparing the CDFs.
        while i < a.len() && a[i] <= v {
            i += 1;
        }
        while j < b.len() && b[j] <= v {
            j += 1;
        }
        d = d.max((i as f64 / n1 - j as f64 / n2).abs());
    }
    d
}

/// Survival function of the Kolmogorov distribution, `P(K > lambda)`.
pub fn kolmogorov_sf(lambda: f64) -> f64 {
    if lambda <= 0.0 {
        return 1.0;
    }
    if lambda < KS_SMALL_LAMBDA {
        // P(K <= l) = sqrt(2 pi) / l * sum exp(-(2k - 1)^2 pi^2 / (8 l^2))
        let w = -PI * PI / (8.0 * lambda * lambda);
        let mut cdf = 0.0;
        for k in 1..=KS_SERIES_TERMS {
            let m = (2 * k - 1) as f64;
            let term = (m * m * w).exp();
            cdf += term;
            if term <= KS_SERIES_EPS * cdf {
                break;
            }
        }
        (1.0 - (2.0 * PI).sqrt() / lambda * cdf).clamp(0.0, 1.0)
    } else {
        // P(K > l) = 2 sum (-1)^(k - 1) exp(-2 k^2 l^2)
        let w = -2.0 * lambda * lambda;
        let mut sf = 0.0;
        let mut sign = 1.0;
        for k in 1..=KS_SERIES_TERMS {
            let kf = k as f64;
            let term = (kf * kf * w).exp();
            sf += sign * term;
            sign = -sign;
            if term <= KS_SERIES_EPS * sf.abs() {
                break;
            }
        }
        (2.0 * sf).clamp(0.0, 1.0)
    }
}

/// Two-sample Kolmogorov-Smirnov test with the two-sided asymptotic p-value.
///
/// * `reference` - Reference sample, non-empty.
/// * `production` - Production sample, non-empty.
pub fn ks_2samp(reference: &[f64], production: &[f64]) -> TestOutcome {
    let statistic = ks_statistic(reference, production);
    let (n1, n2) = (reference.len() as f64, production.len() as f64);
    let en = n1 * n2 / (n1 + n2);
    TestOutcome {
        statistic,
        p_value: kolmogorov_sf(en.sqrt() * statistic),
    }
}

/// Upper tail probability `1 - CDF(statistic, df)` of the chi-square distribution.
///
/// With zero degrees of freedom the distribution is degenerate and the
/// result is fixed to 1.0.
pub fn chi2_sf(statistic: f64, df: usize) -> f64 {
    if df == 0 {
        return 1.0;
    }
    match ChiSquared::new(df as f64) {
        Ok(dist) => (1.0 - dist.cdf(statistic)).clamp(0.0, 1.0),
        Err(_) => 1.0,
    }
}

/// Chi-square goodness-of-fit of the production distribution against the reference one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chi2Outcome {
    pub statistic: f64,
    pub p_value: f64,
    pub df: usize,
}

impl From<Chi2Outcome> for TestOutcome {
    fn from(c: Chi2Outcome) -> Self {
        TestOutcome {
            statistic: c.statistic,
            p_value: c.p_value,
        }
    }
}

/// Chi-square goodness-of-fit over aligned frequency tables.
///
/// Both expected (reference) and observed (production) counts are scaled by the
/// production sample size. `eps` is added to every expected cell.
///
/// * `aligned` - Frequencies over the category union.
/// * `n_production` - Size of the production sample.
/// * `eps` - Constant added to the expected counts.
pub fn chi2_goodness_of_fit(aligned: &AlignedFrequencies, n_production: usize, eps: f64) -> Chi2Outcome {
    let n = n_production as f64;
    let statistic = aligned
        .reference
        .iter()
        .zip(&aligned.production)
        .map(|(r, p)| {
            let observed = p * n;
            let expected = r * n + eps;
            (observed - expected).powi(2) / expected
        })
        .sum::<f64>();
    let df = aligned.len().saturating_sub(1);
    Chi2Outcome {
        statistic,
        p_value: chi2_sf(statistic, df),
        df,
    }
}
