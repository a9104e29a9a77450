// Fixed 52-byte archive record layout
// Reference: Vantage Serial Communication Reference Manual v261, section X.4
//
// All multi-byte fields are little-endian. The layout below is the Rev B
// archive record and is a wire contract: offsets, widths and order must not
// change.

use super::{ArchiveError, Result, ARCHIVE_RECORD_SIZE};
use nom::number::complete::{le_i16, le_u16, le_u32, u8 as byte};
use nom::IResult;

/// Raw integer image of one 52-byte archive record, one field per protocol
/// field. No unit conversion or dash handling happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRecord {
    /// Packed date word (offset 0, u16)
    pub date_stamp: u16,
    /// Decimal time word, hour*100 + minute (offset 2, u16)
    pub time_stamp: u16,
    /// Highest outside temperature, tenths of °F (offset 4, i16)
    pub temperature_high: i16,
    /// Lowest outside temperature, tenths of °F (offset 6, i16)
    pub temperature_low: i16,
    /// Average outside temperature, tenths of °F (offset 8, i16)
    pub temperature_avg: i16,
    /// Rain clicks this interval (offset 10, u16)
    pub rain_clicks: u16,
    /// Highest rain rate, clicks per hour (offset 12, u16)
    pub rain_rate: u16,
    /// Barometer, thousandths of inHg (offset 14, u16)
    pub barometer: u16,
    /// Average solar radiation, W/m² (offset 16, u16)
    pub solar_radiation: u16,
    /// Number of wind samples in the interval (offset 18, u16)
    pub wind_samples: u16,
    /// Average inside temperature, tenths of °F (offset 20, u16)
    pub inside_temperature: u16,
    /// Inside humidity, percent (offset 22, u8)
    pub inside_humidity: u8,
    /// Outside humidity, percent (offset 23, u8)
    pub humidity: u8,
    /// Average wind speed, mph (offset 24, u8)
    pub wind_speed_avg: u8,
    /// Highest wind speed, mph (offset 25, u8)
    pub wind_speed_high: u8,
    /// Direction code of the highest wind speed (offset 26, u8)
    pub wind_dir_high: u8,
    /// Prevailing wind direction code (offset 27, u8)
    pub wind_dir_avg: u8,
    /// Average UV index, tenths (offset 28, u8)
    pub uv_avg: u8,
    /// Evapotranspiration, thousandths of an inch (offset 29, u8)
    pub et: u8,
    /// Highest solar radiation, W/m² (offset 30, u16)
    pub solar_radiation_high: u16,
    /// Highest UV index, tenths (offset 32, u8)
    pub uv_high: u8,
    /// Forecast rule at the end of the interval (offset 33, u8)
    pub forecast_rule: u8,
    /// Leaf temperature sensors, raw (offset 34, u16)
    pub leaf_temperatures: u16,
    /// Leaf wetness sensors, raw (offset 36, u16)
    pub leaf_wetnesses: u16,
    /// Soil temperature sensors, raw (offset 38, u32)
    pub soil_temperatures: u32,
    /// Record type marker, 0x00 for Rev B (offset 42, u8)
    pub record_type: u8,
    /// Extra humidity sensors, raw (offset 43, u16)
    pub extra_humidities: u16,
    /// Extra temperature sensor channels, raw (offsets 45-47, u8 each)
    pub extra_temperature_0: u8,
    pub extra_temperature_1: u8,
    pub extra_temperature_2: u8,
    /// Soil moisture sensors, raw (offset 48, u32)
    pub soil_moistures: u32,
}

fn parse_fields(input: &[u8]) -> IResult<&[u8], ArchiveRecord> {
    let (input, date_stamp) = le_u16(input)?;
    let (input, time_stamp) = le_u16(input)?;
    let (input, temperature_high) = le_i16(input)?;
    let (input, temperature_low) = le_i16(input)?;
    let (input, temperature_avg) = le_i16(input)?;
    let (input, rain_clicks) = le_u16(input)?;
    let (input, rain_rate) = le_u16(input)?;
    let (input, barometer) = le_u16(input)?;
    let (input, solar_radiation) = le_u16(input)?;
    let (input, wind_samples) = le_u16(input)?;
    let (input, inside_temperature) = le_u16(input)?;
    let (input, inside_humidity) = byte(input)?;
    let (input, humidity) = byte(input)?;
    let (input, wind_speed_avg) = byte(input)?;
    let (input, wind_speed_high) = byte(input)?;
    let (input, wind_dir_high) = byte(input)?;
    let (input, wind_dir_avg) = byte(input)?;
    let (input, uv_avg) = byte(input)?;
    let (input, et) = byte(input)?;
    let (input, solar_radiation_high) = le_u16(input)?;
    let (input, uv_high) = byte(input)?;
    let (input, forecast_rule) = byte(input)?;
    let (input, leaf_temperatures) = le_u16(input)?;
    let (input, leaf_wetnesses) = le_u16(input)?;
    let (input, soil_temperatures) = le_u32(input)?;
    let (input, record_type) = byte(input)?;
    let (input, extra_humidities) = le_u16(input)?;
    let (input, extra_temperature_0) = byte(input)?;
    let (input, extra_temperature_1) = byte(input)?;
    let (input, extra_temperature_2) = byte(input)?;
    let (input, soil_moistures) = le_u32(input)?;

    Ok((
        input,
        ArchiveRecord {
            date_stamp,
            time_stamp,
            temperature_high,
            temperature_low,
            temperature_avg,
            rain_clicks,
            rain_rate,
            barometer,
            solar_radiation,
            wind_samples,
            inside_temperature,
            inside_humidity,
            humidity,
            wind_speed_avg,
            wind_speed_high,
            wind_dir_high,
            wind_dir_avg,
            uv_avg,
            et,
            solar_radiation_high,
            uv_high,
            forecast_rule,
            leaf_temperatures,
            leaf_wetnesses,
            soil_temperatures,
            record_type,
            extra_humidities,
            extra_temperature_0,
            extra_temperature_1,
            extra_temperature_2,
            soil_moistures,
        },
    ))
}

impl ArchiveRecord {
    /// Parse one archive record. `bytes` must be exactly 52 bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ARCHIVE_RECORD_SIZE {
            return Err(ArchiveError::BadRecordLength {
                expected: ARCHIVE_RECORD_SIZE,
                actual: bytes.len(),
            });
        }
        let (_, record) = parse_fields(bytes).map_err(|_| ArchiveError::BadRecordLength {
            expected: ARCHIVE_RECORD_SIZE,
            actual: bytes.len(),
        })?;
        Ok(record)
    }
}
