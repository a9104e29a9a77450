// Decoded archive reading model

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;

/// One decoded archive reading in physical units. Every field with a dash
/// convention is an `Option`, so "no reading" is distinct from zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedReading {
    /// The packed 32-bit timestamp as used in archive queries
    pub station_timestamp: u32,

    /// The moment the record was written, in the station's UTC offset
    pub timestamp: DateTime<FixedOffset>,

    /// Highest outside temperature over the interval, °C
    pub high_temperature_c: Option<f64>,

    /// Lowest outside temperature over the interval, °C
    pub low_temperature_c: Option<f64>,

    /// Average outside temperature over the interval, °C
    pub temperature_c: Option<f64>,

    /// Rain over the interval, mm
    pub rain_amount_mm: f64,

    /// Highest rain rate over the interval, mm/h
    pub rain_rate_mm_per_hour: f64,

    /// Barometric pressure, inHg
    pub barometer_in_hg: Option<f64>,

    /// Average solar radiation, W/m²
    pub solar_radiation: Option<u16>,

    /// Highest solar radiation, W/m²
    pub high_solar_radiation: Option<u16>,

    /// Outside relative humidity, percent
    pub humidity: Option<u8>,

    /// Average wind speed, km/h
    pub average_wind_speed: Option<f64>,

    /// Highest wind speed, km/h
    pub high_wind_speed: Option<f64>,

    /// Compass label of the direction of the highest wind speed
    pub high_wind_direction: Option<&'static str>,

    /// Compass label of the prevailing wind direction
    pub wind_direction: Option<&'static str>,

    /// Average UV index
    pub average_uv: Option<f64>,

    /// Highest UV index
    pub high_uv_index: Option<f64>,

    /// Evapotranspiration over the interval, mm
    pub et_mm: Option<f64>,

    /// Extended-sensor fields carried through undecoded
    pub extra: ExtraSensors,
}

/// Extended-sensor byte groups the station logs but this codec does not
/// interpret. Kept verbatim so nothing is lost downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtraSensors {
    pub leaf_temperatures: u16,
    pub leaf_wetnesses: u16,
    pub soil_temperatures: u32,
    pub extra_humidities: u16,
    pub extra_temperatures: [u8; 3],
    pub soil_moistures: u32,
}

impl fmt::Display for DecodedReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn opt<T: fmt::Display>(v: &Option<T>) -> String {
            v.as_ref().map(|v| v.to_string()).unwrap_or_else(|| "---".to_string())
        }

        write!(
            f,
            "{}: temp {} C (lo {} / hi {}), rain {:.1} mm, wind {} km/h {}",
            self.timestamp,
            opt(&self.temperature_c.map(|t| format!("{:.1}", t))),
            opt(&self.low_temperature_c.map(|t| format!("{:.1}", t))),
            opt(&self.high_temperature_c.map(|t| format!("{:.1}", t))),
            self.rain_amount_mm,
            opt(&self.average_wind_speed),
            opt(&self.wind_direction),
        )
    }
}
