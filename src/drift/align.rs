use crate::data::Category;
use hashbrown::HashMap;
use std::collections::BTreeSet;

/// Share of each category in its own sample. Shares sum to 1.0 for a non-empty sample.
pub fn relative_frequencies(values: &[Category]) -> HashMap<Category, f64> {
    let mut counts: HashMap<Category, usize> = HashMap::new();
    for v in values {
        *counts.entry(v.clone()).or_insert(0) += 1;
    }
    let n = values.len() as f64;
    counts.into_iter().map(|(k, c)| (k, c as f64 / n)).collect()
}

/// Reference and production frequencies reindexed over the union of their categories.
///
/// `reference[i]` and `production[i]` are the shares of `categories[i]`,
/// zero when the category never occurs on that side.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedFrequencies {
    pub categories: Vec<Category>,
    pub reference: Vec<f64>,
    pub production: Vec<f64>,
}

impl AlignedFrequencies {
    /// Size of the category union.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Align two frequency tables over the union of their keys.
pub fn align(reference: &HashMap<Category, f64>, production: &HashMap<Category, f64>) -> AlignedFrequencies {
    let union: BTreeSet<&Category> = reference.keys().chain(production.keys()).collect();
    let mut aligned = AlignedFrequencies {
        categories: Vec::with_capacity(union.len()),
        reference: Vec::with_capacity(union.len()),
        production: Vec::with_capacity(union.len()),
    };
    for c in union {
        aligned.reference.push(reference.get(c).copied().unwrap_or(0.0));
        aligned.production.push(production.get(c).copied().unwrap_or(0.0));
        aligned.categories.push(c.clone());
    }
    aligned
}

/// Frequency tables of both samples, aligned over the category union.
pub fn align_samples(reference: &[Category], production: &[Category]) -> AlignedFrequencies {
    align(&relative_frequencies(reference), &relative_frequencies(production))
}
