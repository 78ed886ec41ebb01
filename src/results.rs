//! Reader for the tab-separated simulation results file.
//!
//! The first line names each recorded series; every following line holds one
//! value per series for one recorded iteration. Only the last iteration is
//! kept.

use crate::error::{Error, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsFile {
    names: Vec<String>,
    last: Option<Vec<f64>>,
    iterations: usize,
}

impl ResultsFile {
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let file = fs::File::open(path.as_ref())?;
        log::debug!("reading results from {}", path.as_ref().display());
        Self::from_reader(file)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut names: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        // Writers terminate every field with a tab, which leaves empty names.
        while names.last().is_some_and(|name| name.is_empty()) {
            names.pop();
        }

        let mut last = None;
        let mut iterations = 0;
        for record in reader.records() {
            let record = record?;
            last = Some(parse_row(&record, names.len())?);
            iterations += 1;
        }

        Ok(ResultsFile {
            names,
            last,
            iterations,
        })
    }
}

fn parse_row(record: &StringRecord, expected: usize) -> Result<Vec<f64>> {
    let line = record.position().map_or(0, |position| position.line());
    let filled = record.len() - record.iter().rev().take_while(|field| field.is_empty()).count();
    if filled > expected || record.len() < expected {
        let got = if filled > expected { filled } else { record.len() };
        return Err(Error::RaggedRow {
            line,
            expected,
            got,
        });
    }
    record
        .iter()
        .take(expected)
        .map(|field| {
            field.parse::<f64>().map_err(|_| Error::ParseFloat {
                line,
                value: field.to_string(),
            })
        })
        .collect()
}

/*
 * Access to data
 */
impl ResultsFile {
    pub fn series_names(&self) -> &[String] {
        &self.names
    }

    /// Number of recorded iterations (data rows).
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Last recorded value of the series called exactly `name`.
    pub fn last_value(&self, name: &str) -> Result<f64> {
        let column = self
            .names
            .iter()
            .position(|series| series == name)
            .ok_or_else(|| Error::SeriesNotFound(name.to_string()))?;
        let last = self.last.as_ref().ok_or(Error::EmptyResults)?;
        Ok(last[column])
    }

    pub fn last_values(&self) -> Result<HashMap<String, f64>> {
        let last = self.last.as_ref().ok_or(Error::EmptyResults)?;
        Ok(self.names.iter().cloned().zip(last.iter().copied()).collect())
    }
}
