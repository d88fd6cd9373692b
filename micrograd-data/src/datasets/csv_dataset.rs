use super::sample::Sample;
use super::traits::Dataset;
use super::vec_dataset::VecDataset;
use micrograd_core::MicrogradError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Rescaling applied to every input column.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Normalization {
    #[default]
    None,
    /// Maps `[0, max]` onto `[-1, 1]` via `x / (max / 2) - 1`.
    Symmetric { max: f64 },
}

impl Normalization {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Normalization::None => x,
            Normalization::Symmetric { max } => x / (max / 2.0) - 1.0,
        }
    }
}

/// How rows of a CSV file become [`Sample`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvOptions {
    /// Skip the first non-blank line.
    pub has_header: bool,
    pub delimiter: char,
    /// 0-based column holding the label; every other column is an input.
    pub label_column: usize,
    /// One-hot encode the label over this many classes. `None` keeps the raw
    /// label as a single target value.
    pub num_classes: Option<usize>,
    pub normalization: Normalization,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            has_header: true,
            delimiter: ',',
            label_column: 0,
            num_classes: None,
            normalization: Normalization::None,
        }
    }
}

impl CsvOptions {
    /// Digit images: label first, ten classes, pixel bytes rescaled with max 254.
    pub fn digits() -> Self {
        CsvOptions {
            num_classes: Some(10),
            normalization: Normalization::Symmetric { max: 254.0 },
            ..CsvOptions::default()
        }
    }

    pub fn validate(&self) -> Result<(), MicrogradError> {
        if self.num_classes == Some(0) {
            return Err(MicrogradError::InvalidConfig(
                "num_classes must be greater than 0".to_string(),
            ));
        }
        if let Normalization::Symmetric { max } = self.normalization {
            if !(max.is_finite() && max > 0.0) {
                return Err(MicrogradError::InvalidConfig(format!(
                    "normalization max must be positive and finite, got {max}"
                )));
            }
        }
        Ok(())
    }
}

/// Reads `path` and parses it with [`parse_csv`].
pub fn load_csv<P: AsRef<Path>>(path: P, options: &CsvOptions) -> Result<VecDataset<Sample>, MicrogradError> {
    let path = path.as_ref();
    let io_error = |e: std::io::Error| MicrogradError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    };
    let file = File::open(path).map_err(io_error)?;
    let dataset = parse_csv(BufReader::new(file), options).map_err(|e| match e {
        MicrogradError::Io { message, .. } => MicrogradError::Io {
            path: path.display().to_string(),
            message,
        },
        other => other,
    })?;
    log::debug!("Loaded {} samples from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parses labelled rows into samples.
///
/// Blank lines are skipped. Errors carry the 1-based line and column of the
/// offending field. Every data row must have as many fields as the first one.
pub fn parse_csv<R: BufRead>(reader: R, options: &CsvOptions) -> Result<VecDataset<Sample>, MicrogradError> {
    options.validate()?;

    let mut samples = Vec::new();
    let mut header_pending = options.has_header;
    let mut width: Option<usize> = None;

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|e| MicrogradError::Io {
            path: "<reader>".to_string(),
            message: e.to_string(),
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if header_pending {
            header_pending = false;
            continue;
        }

        let fields: Vec<&str> = trimmed.split(options.delimiter).map(str::trim).collect();
        let expected = *width.get_or_insert(fields.len());
        if fields.len() != expected {
            return Err(MicrogradError::CsvParse {
                line: line_no,
                column: fields.len().min(expected) + 1,
                message: format!("expected {} fields, found {}", expected, fields.len()),
            });
        }
        if options.label_column >= fields.len() {
            return Err(MicrogradError::CsvParse {
                line: line_no,
                column: options.label_column + 1,
                message: format!("label column missing; row has {} fields", fields.len()),
            });
        }

        let mut input = Vec::with_capacity(fields.len() - 1);
        let mut label = 0.0;
        for (col, field) in fields.iter().enumerate() {
            let value = parse_number(field, line_no, col + 1)?;
            if col == options.label_column {
                label = value;
            } else {
                input.push(options.normalization.apply(value));
            }
        }

        let target = match options.num_classes {
            Some(n) => one_hot(label, n).ok_or_else(|| MicrogradError::CsvParse {
                line: line_no,
                column: options.label_column + 1,
                message: format!("label {label} is not a class index below {n}"),
            })?,
            None => vec![label],
        };
        samples.push(Sample::new(input, target));
    }

    if samples.is_empty() {
        return Err(MicrogradError::EmptyDataset);
    }
    Ok(VecDataset::new(samples))
}

fn parse_number(field: &str, line: usize, column: usize) -> Result<f64, MicrogradError> {
    field.parse::<f64>().map_err(|e| MicrogradError::CsvParse {
        line,
        column,
        message: format!("cannot parse {field:?} as a number: {e}"),
    })
}

fn one_hot(label: f64, num_classes: usize) -> Option<Vec<f64>> {
    if label < 0.0 || label.fract() != 0.0 || label >= num_classes as f64 {
        return None;
    }
    let class = label as usize;
    Some((0..num_classes).map(|i| if i == class { 1.0 } else { 0.0 }).collect())
}

#[cfg(test)]
#[path = "csv_dataset_test.rs"]
mod tests;
