use chrono::NaiveDateTime;

/// One parsed data row of the hourly export. Built and discarded one at a
/// time during the scan; never buffered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyRecord {
    pub timestamp: NaiveDateTime,
    pub is_day: bool,
    pub value: f64,
}

impl HourlyRecord {
    pub fn new(timestamp: NaiveDateTime, is_day: bool, value: f64) -> Self {
        Self {
            timestamp,
            is_day,
            value,
        }
    }
}
