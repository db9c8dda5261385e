use crate::error::{AggregateError, Result};

/// One of the fixed metrics exported by the hourly CSV. Each metric is bound
/// to a zero-based column index and a display unit; the table is built into
/// the binary and never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Temperature2m,
    PressureMsl,
    WindSpeed10m,
    DirectNormalIrradianceInstant,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Temperature2m,
        Metric::PressureMsl,
        Metric::WindSpeed10m,
        Metric::DirectNormalIrradianceInstant,
    ];

    /// Look up a metric by its CSV column name. Unrecognized names are an
    /// error before any row is scanned.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "temperature_2m" => Ok(Metric::Temperature2m),
            "pressure_msl" => Ok(Metric::PressureMsl),
            "wind_speed_10m" => Ok(Metric::WindSpeed10m),
            "direct_normal_irradiance_instant" => Ok(Metric::DirectNormalIrradianceInstant),
            other => Err(AggregateError::UnknownMetric(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Temperature2m => "temperature_2m",
            Metric::PressureMsl => "pressure_msl",
            Metric::WindSpeed10m => "wind_speed_10m",
            Metric::DirectNormalIrradianceInstant => "direct_normal_irradiance_instant",
        }
    }

    /// Zero-based index of the column holding this metric's readings.
    pub fn column(&self) -> usize {
        match self {
            Metric::Temperature2m => 1,
            Metric::PressureMsl => 3,
            Metric::WindSpeed10m => 5,
            Metric::DirectNormalIrradianceInstant => 8,
        }
    }

    /// Physical unit appended to the formatted result.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature2m => "°C",
            Metric::PressureMsl => "hPa",
            Metric::WindSpeed10m => "km/h",
            Metric::DirectNormalIrradianceInstant => "W/m²",
        }
    }
}
