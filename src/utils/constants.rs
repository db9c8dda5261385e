/// Leading lines of an Open-Meteo CSV export that carry no data
/// (3 metadata/blank lines + 1 header line). Always skipped, never parsed.
pub const PREAMBLE_LINES: usize = 4;

/// Minimum comma-separated fields per data row.
pub const MIN_FIELDS: usize = 9;

/// Column holding the ISO-8601 local timestamp.
pub const TIMESTAMP_COLUMN: usize = 0;

/// Column holding the is_day flag ("0" or "1").
pub const IS_DAY_COLUMN: usize = 7;

/// chrono format of the timestamp column (`2023-01-01T14:00`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Magnitude at which non-AVG results switch to scientific notation.
pub const SCIENTIFIC_THRESHOLD: f64 = 1e7;

/// Fractional digits of an AVG result.
pub const AVG_PRECISION: usize = 15;

/// Fractional digits of a scientific-notation mantissa.
pub const SCIENTIFIC_PRECISION: usize = 7;

/// Read buffer size for the CSV scan.
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB

/// Largest file the `cat` command will print, in bytes.
pub const CAT_MAX_BYTES: u64 = 3072;
