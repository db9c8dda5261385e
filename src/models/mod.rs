pub mod criteria;
pub mod hourly;
pub mod metric;

pub use criteria::{DaySelector, FilterCriteria};
pub use hourly::HourlyRecord;
pub use metric::Metric;
