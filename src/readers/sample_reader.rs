use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::{AggregateError, Result};
use crate::models::{FilterCriteria, HourlyRecord, Metric};
use crate::utils::constants::{
    DEFAULT_BUFFER_SIZE, IS_DAY_COLUMN, MIN_FIELDS, PREAMBLE_LINES, TIMESTAMP_COLUMN,
    TIMESTAMP_FORMAT,
};

/// Streams metric values out of an Open-Meteo hourly CSV export.
///
/// The file starts with a fixed 4-line preamble (3 metadata lines + 1 header)
/// that is skipped without inspection. Every following line is a data row
/// whose timestamp and daylight flag are checked against the filter criteria;
/// rows that pass yield the reading in the metric's column.
pub struct SampleReader {
    metric: Metric,
    criteria: FilterCriteria,
}

impl SampleReader {
    pub fn new(metric: Metric, criteria: FilterCriteria) -> Self {
        Self { metric, criteria }
    }

    /// Open the file and return a lazy, single-pass iterator over the metric
    /// values of the rows that pass both filters, in file order. The file
    /// handle lives inside the iterator and closes when it is dropped.
    pub fn stream_values(&self, path: &Path) -> Result<ValueIterator> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        debug!(path = %path.display(), metric = self.metric.name(), "opened csv source");

        Ok(ValueIterator {
            reader,
            metric: self.metric,
            criteria: self.criteria,
            line_count: 0,
        })
    }

    /// Eagerly collect the filtered values. A malformed row aborts the whole
    /// scan rather than being skipped.
    pub fn read_values(&self, path: &Path) -> Result<Vec<f64>> {
        self.stream_values(path)?.collect()
    }

    /// Parse one data line against the filters. Returns `Ok(None)` for rows
    /// rejected by the date range or the day/night selector.
    ///
    /// Parsing is staged in filter order: the timestamp is parsed first and
    /// an out-of-range row is dropped before its flag or metric field is
    /// looked at, so garbage outside the range never aborts the scan.
    /// `line_number` is the 1-based physical line number used in error
    /// reports.
    fn filter_row(
        metric: Metric,
        criteria: &FilterCriteria,
        line: &str,
        line_number: usize,
    ) -> Result<Option<HourlyRecord>> {
        let fields: Vec<&str> = line.split(',').collect();

        let timestamp = NaiveDateTime::parse_from_str(fields[TIMESTAMP_COLUMN], TIMESTAMP_FORMAT)
            .map_err(|e| AggregateError::MalformedRow {
                line: line_number,
                reason: format!("bad timestamp '{}': {}", fields[TIMESTAMP_COLUMN], e),
            })?;

        if !criteria.contains(timestamp) {
            return Ok(None);
        }

        if fields.len() < MIN_FIELDS {
            return Err(AggregateError::MalformedRow {
                line: line_number,
                reason: format!(
                    "expected at least {} fields, got {}",
                    MIN_FIELDS,
                    fields.len()
                ),
            });
        }

        let is_day = match fields[IS_DAY_COLUMN] {
            "0" => false,
            "1" => true,
            other => {
                return Err(AggregateError::MalformedRow {
                    line: line_number,
                    reason: format!("bad is_day flag '{}'", other),
                })
            }
        };

        if !criteria.selector().matches(is_day) {
            return Ok(None);
        }

        let raw_value = fields[metric.column()];
        let value = raw_value
            .parse::<f64>()
            .map_err(|_| AggregateError::MalformedRow {
                line: line_number,
                reason: format!("non-numeric {} value '{}'", metric.name(), raw_value),
            })?;

        Ok(Some(HourlyRecord::new(timestamp, is_day, value)))
    }
}

/// Lazy iterator over the filtered metric values. Restartable only by
/// re-opening the source through [`SampleReader::stream_values`].
pub struct ValueIterator {
    reader: BufReader<File>,
    metric: Metric,
    criteria: FilterCriteria,
    line_count: usize,
}

impl Iterator for ValueIterator {
    type Item = Result<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();

        loop {
            line.clear();

            match self.reader.read_line(&mut line) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    self.line_count += 1;

                    // Preamble and header are skipped without inspection
                    if self.line_count <= PREAMBLE_LINES {
                        continue;
                    }

                    let trimmed = line.trim_end_matches(['\r', '\n']);
                    if trimmed.is_empty() {
                        continue;
                    }

                    match SampleReader::filter_row(
                        self.metric,
                        &self.criteria,
                        trimmed,
                        self.line_count,
                    ) {
                        Ok(Some(record)) => return Some(Ok(record.value)),
                        Ok(None) => continue,
                        Err(e) => return Some(Err(e)),
                    }
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
