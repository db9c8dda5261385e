use tracing::debug;

use crate::error::{AggregateError, Result};
use crate::models::Metric;

/// Reduction applied to the filtered value sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Sum,
    Avg,
    Min,
    Max,
}

impl Aggregation {
    /// Parse the aggregation keyword, case-insensitively.
    pub fn from_keyword(keyword: &str) -> Result<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "SUM" => Ok(Aggregation::Sum),
            "AVG" => Ok(Aggregation::Avg),
            "MIN" => Ok(Aggregation::Min),
            "MAX" => Ok(Aggregation::Max),
            _ => Err(AggregateError::UnknownAggregation(keyword.to_string())),
        }
    }
}

/// Final scalar of one invocation, ready to be rendered.
#[derive(Debug, Clone, Copy)]
pub struct AggregationResult {
    pub value: f64,
    pub kind: Aggregation,
    pub unit: &'static str,
}

/// Running statistics over the value stream. All four aggregations are
/// maintained in the same single pass so they stay mutually consistent.
#[derive(Debug, Clone, Copy)]
pub struct Accumulator {
    sum: f64,
    min: f64,
    max: f64,
    count: usize,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            count: 0,
        }
    }

    pub fn push(&mut self, value: f64) {
        self.sum += value;
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The requested statistic. An empty accumulator yields 0 for every kind
    /// rather than raising an arithmetic error.
    pub fn value(&self, kind: Aggregation) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        match kind {
            Aggregation::Sum => self.sum,
            Aggregation::Avg => self.sum / self.count as f64,
            Aggregation::Min => self.min,
            Aggregation::Max => self.max,
        }
    }
}

pub struct Aggregator;

impl Aggregator {
    /// Drain the value stream into one [`AggregationResult`]. The first
    /// malformed-row or I/O error aborts the reduction.
    pub fn reduce<I>(values: I, kind: Aggregation, metric: Metric) -> Result<AggregationResult>
    where
        I: Iterator<Item = Result<f64>>,
    {
        let mut acc = Accumulator::new();
        for value in values {
            acc.push(value?);
        }
        debug!(rows = acc.count(), ?kind, "reduced value stream");

        Ok(AggregationResult {
            value: acc.value(kind),
            kind,
            unit: metric.unit(),
        })
    }
}
