//! IO
//!
//! CSV dataset loader. Column kinds are inferred from the cell contents.
use crate::constants::MISSING_TOKENS;
use crate::data::{Column, Dataset};
use crate::errors::DriftError;
use log::debug;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Load a dataset from a CSV file with a header row.
///
/// A path that does not exist yields [`DriftError::DatasetNotFound`],
/// anything else that prevents reading yields [`DriftError::UnableToRead`].
///
/// * `path` - Path of the CSV file.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Dataset, DriftError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DriftError::DatasetNotFound(path.display().to_string()),
        _ => DriftError::UnableToRead(format!("{}: {}", path.display(), e)),
    })?;
    let dataset = read_csv(BufReader::new(file))
        .map_err(|e| DriftError::UnableToRead(format!("{}: {}", path.display(), e)))?;
    debug!(
        "Loaded {} rows and {} columns from {}.",
        dataset.rows(),
        dataset.cols(),
        path.display()
    );
    Ok(dataset)
}

/// Read a dataset from any CSV source with a header row.
///
/// * `reader` - The CSV source.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset, DriftError> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| DriftError::UnableToRead(e.to_string()))?
        .clone();
    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for result in csv_reader.records() {
        let record = result.map_err(|e| DriftError::UnableToRead(e.to_string()))?;
        for (i, col) in cells.iter_mut().enumerate() {
            let cell = record.get(i).map(str::trim).unwrap_or("");
            if is_missing_token(cell) {
                col.push(None);
            } else {
                col.push(Some(cell.to_string()));
            }
        }
    }
    Dataset::from_columns(
        headers
            .iter()
            .zip(cells)
            .map(|(name, col)| (name.trim().to_string(), infer_column(col))),
    )
}

fn is_missing_token(cell: &str) -> bool {
    cell.is_empty() || MISSING_TOKENS.contains(&cell)
}

/// Pick the narrowest kind every non-missing cell parses as:
/// integer, then float, then boolean, falling back to text.
/// A column without any value is a float column of `NaN`.
fn infer_column(cells: Vec<Option<String>>) -> Column {
    let present = || cells.iter().flatten();
    if present().next().is_none() {
        return Column::Float(vec![f64::NAN; cells.len()]);
    }
    if present().all(|c| c.parse::<i64>().is_ok()) {
        return Column::Integer(cells.iter().map(|c| c.as_ref().and_then(|v| v.parse().ok())).collect());
    }
    if present().all(|c| c.parse::<f64>().is_ok()) {
        return Column::Float(
            cells
                .iter()
                .map(|c| c.as_ref().and_then(|v| v.parse().ok()).unwrap_or(f64::NAN))
                .collect(),
        );
    }
    if present().all(|c| parse_bool(c).is_some()) {
        return Column::Boolean(cells.iter().map(|c| c.as_deref().and_then(parse_bool)).collect());
    }
    Column::Text(cells)
}

fn parse_bool(cell: &str) -> Option<bool> {
    if cell.eq_ignore_ascii_case("true") {
        Some(true)
    } else if cell.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
