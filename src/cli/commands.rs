use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::cli::args::{Cli, Commands};
use crate::error::{AggregateError, Result};
use crate::models::{DaySelector, FilterCriteria, Metric};
use crate::processors::{format_result, Aggregation, Aggregator};
use crate::readers::SampleReader;
use crate::utils::constants::CAT_MAX_BYTES;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Aggregate {
            file,
            start_date,
            end_date,
            metric,
            selector,
            aggregation,
        } => {
            let line = run_aggregate(&file, start_date, end_date, &metric, &selector, &aggregation)?;
            println!("{}", line);
        }

        Commands::Cat { file } => {
            let content = read_small_file(&file)?;
            println!("{}", content);
        }
    }

    Ok(())
}

/// Validate the request, scan the file once, and render the result line.
///
/// Metric, selector and aggregation keywords are checked before any I/O so a
/// bad request never touches the file. A zero-row match is not an error: the
/// aggregations fall back to 0.
pub fn run_aggregate(
    path: &Path,
    start_date: NaiveDate,
    end_date: NaiveDate,
    metric: &str,
    selector: &str,
    aggregation: &str,
) -> Result<String> {
    let metric = Metric::from_name(metric)?;
    let aggregation = Aggregation::from_keyword(aggregation)?;
    let selector = DaySelector::from_keyword(selector)?;
    let criteria = FilterCriteria::new(start_date, end_date, selector);

    info!(
        path = %path.display(),
        metric = metric.name(),
        ?selector,
        ?aggregation,
        "aggregating"
    );

    let reader = SampleReader::new(metric, criteria);
    let values = reader.stream_values(path)?;
    let result = Aggregator::reduce(values, aggregation, metric)?;

    Ok(format_result(&result))
}

/// Read one small plain-text file for the `cat` command. Validations run in
/// order: the file must exist, must not be a directory, and must not exceed
/// the size cap.
pub fn read_small_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(AggregateError::FileNotFound(path.to_path_buf()));
    }

    let metadata = std::fs::metadata(path)?;
    if metadata.is_dir() {
        return Err(AggregateError::NotAFile(path.to_path_buf()));
    }
    if metadata.len() > CAT_MAX_BYTES {
        return Err(AggregateError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
        });
    }

    Ok(std::fs::read_to_string(path)?)
}
