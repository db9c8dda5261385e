pub mod aggregator;
pub mod formatter;

pub use aggregator::{Accumulator, Aggregation, AggregationResult, Aggregator};
pub use formatter::{format_result, format_value};
