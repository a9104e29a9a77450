// Archive record and archive buffer decoding

use super::layout::ArchiveRecord;
use super::reading::{DecodedReading, ExtraSensors};
use super::{ArchiveError, Result, ARCHIVE_RECORD_SIZE};
use crate::timestamp::{decode_timestamp, pack_datetime};
use crate::units;
use chrono::FixedOffset;

/// True when a record is an unused archive slot ("dashed"): the first two
/// little-endian words, date and time, are both 0xFFFF. The remaining 48
/// bytes carry no information in that case.
pub fn is_dash(record: &[u8]) -> bool {
    record.len() >= 4
        && u16::from_le_bytes([record[0], record[1]]) == 0xFFFF
        && u16::from_le_bytes([record[2], record[3]]) == 0xFFFF
}

/// Decode a single 52-byte archive record. An unused slot decodes to
/// `Ok(None)`; a record whose date/time words do not form a real calendar
/// moment is an error.
pub fn decode_archive(record: &[u8], utc_offset: FixedOffset) -> Result<Option<DecodedReading>> {
    if record.len() != ARCHIVE_RECORD_SIZE {
        return Err(ArchiveError::BadRecordLength {
            expected: ARCHIVE_RECORD_SIZE,
            actual: record.len(),
        });
    }

    if is_dash(record) {
        tracing::debug!("skipping dashed archive slot");
        return Ok(None);
    }

    let fields = ArchiveRecord::parse(record)?;
    let timestamp = decode_timestamp(fields.date_stamp, fields.time_stamp, utc_offset)?;

    Ok(Some(DecodedReading {
        station_timestamp: pack_datetime(fields.date_stamp, fields.time_stamp),
        timestamp,
        high_temperature_c: units::decode_temperature(fields.temperature_high),
        low_temperature_c: units::decode_temperature(fields.temperature_low),
        temperature_c: units::decode_temperature(fields.temperature_avg),
        rain_amount_mm: units::decode_rain(fields.rain_clicks),
        rain_rate_mm_per_hour: units::decode_rain(fields.rain_rate),
        barometer_in_hg: units::decode_barometer(fields.barometer),
        solar_radiation: units::decode_solar_radiation(fields.solar_radiation),
        high_solar_radiation: units::decode_solar_radiation(fields.solar_radiation_high),
        humidity: units::decode_humidity(fields.humidity),
        average_wind_speed: units::decode_wind_speed(fields.wind_speed_avg),
        high_wind_speed: units::decode_wind_speed(fields.wind_speed_high),
        high_wind_direction: units::decode_wind_direction(fields.wind_dir_high),
        wind_direction: units::decode_wind_direction(fields.wind_dir_avg),
        average_uv: units::decode_uv(fields.uv_avg),
        high_uv_index: units::decode_uv(fields.uv_high),
        et_mm: units::decode_et(fields.et as u16),
        extra: ExtraSensors {
            leaf_temperatures: fields.leaf_temperatures,
            leaf_wetnesses: fields.leaf_wetnesses,
            soil_temperatures: fields.soil_temperatures,
            extra_humidities: fields.extra_humidities,
            extra_temperatures: [
                fields.extra_temperature_0,
                fields.extra_temperature_1,
                fields.extra_temperature_2,
            ],
            soil_moistures: fields.soil_moistures,
        },
    }))
}

/// Decode a buffer of consecutive archive records. The buffer length must
/// be an exact multiple of 52; a trailing partial record means a corrupted
/// download and is rejected rather than silently dropped. Dashed slots are
/// skipped, and output order equals record order in the buffer.
pub fn decode_data(buffer: &[u8], utc_offset: FixedOffset) -> Result<Vec<DecodedReading>> {
    if buffer.len() % ARCHIVE_RECORD_SIZE != 0 {
        return Err(ArchiveError::MalformedBufferLength {
            length: buffer.len(),
        });
    }

    let mut readings = Vec::with_capacity(buffer.len() / ARCHIVE_RECORD_SIZE);
    for record in buffer.chunks_exact(ARCHIVE_RECORD_SIZE) {
        if let Some(reading) = decode_archive(record, utc_offset)? {
            readings.push(reading);
        }
    }
    Ok(readings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::TimestampError;
    use chrono::TimeZone;

    fn offset(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    fn put_u16(buf: &mut [u8], offset: usize, value: u16) {
        buf[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
    }

    // A realistic record written 2012-06-17 15:05: warm afternoon, a little
    // rain, UV and solar sensors present, no extended sensors.
    fn sample_record() -> [u8; 52] {
        let mut buf = [0u8; 52];
        put_u16(&mut buf, 0, 6353); // date 2012-06-17
        put_u16(&mut buf, 2, 1505); // time 15:05
        put_u16(&mut buf, 4, 766i16 as u16); // high temp 76.6 F
        put_u16(&mut buf, 6, 736i16 as u16); // low temp 73.6 F
        put_u16(&mut buf, 8, 750i16 as u16); // avg temp 75.0 F
        put_u16(&mut buf, 10, 10); // 10 rain clicks
        put_u16(&mut buf, 12, 3); // rain rate 3 clicks/h
        put_u16(&mut buf, 14, 29925); // barometer 29.925 inHg
        put_u16(&mut buf, 16, 1000); // solar 1000 W/m2
        put_u16(&mut buf, 18, 120); // wind samples
        put_u16(&mut buf, 20, 780); // inside temp
        buf[22] = 40; // inside humidity
        buf[23] = 35; // outside humidity
        buf[24] = 2; // avg wind 2 mph
        buf[25] = 9; // high wind 9 mph
        buf[26] = 15; // high wind dir NNW
        buf[27] = 0; // avg wind dir N
        buf[28] = 100; // avg UV 10.0
        buf[29] = 0; // ET not measured
        put_u16(&mut buf, 30, 1200); // high solar
        buf[32] = 110; // high UV 11.0
        buf[33] = 193; // forecast rule
        buf[42] = 0; // Rev B record type
        buf
    }

    fn dash_record() -> [u8; 52] {
        [0xFF; 52]
    }

    #[test]
    fn test_is_dash() {
        assert!(is_dash(&dash_record()));
        assert!(!is_dash(&sample_record()));

        // Only the date/time words matter
        let mut record = sample_record();
        record[..4].copy_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
        assert!(is_dash(&record));
    }

    #[test]
    fn test_decode_archive() {
        let reading = decode_archive(&sample_record(), offset(-2)).unwrap().unwrap();

        assert_eq!(reading.station_timestamp, 416351713);
        assert_eq!(
            reading.timestamp,
            offset(-2).with_ymd_and_hms(2012, 6, 17, 15, 5, 0).unwrap()
        );
        assert_eq!(reading.high_temperature_c.unwrap().round(), 25.0);
        assert_eq!(reading.low_temperature_c.unwrap().round(), 23.0);
        assert_eq!(reading.temperature_c.unwrap().round(), 24.0);
        assert_eq!(reading.rain_amount_mm, 2.0);
        assert!((reading.rain_rate_mm_per_hour - 0.6).abs() < 1e-9);
        assert_eq!(reading.barometer_in_hg, Some(29.925));
        assert_eq!(reading.solar_radiation, Some(1000));
        assert_eq!(reading.high_solar_radiation, Some(1200));
        assert_eq!(reading.humidity, Some(35));
        assert!((reading.average_wind_speed.unwrap() - 3.2).abs() < 0.1);
        assert!((reading.high_wind_speed.unwrap() - 14.5).abs() < 0.1);
        assert_eq!(reading.high_wind_direction, Some("NNW"));
        assert_eq!(reading.wind_direction, Some("N"));
        assert_eq!(reading.average_uv, Some(10.0));
        assert_eq!(reading.high_uv_index, Some(11.0));
        assert_eq!(reading.et_mm, None);
    }

    #[test]
    fn test_decode_archive_dashed_fields() {
        let mut record = sample_record();
        put_u16(&mut record, 4, 32767); // high temp dashed
        put_u16(&mut record, 16, 32767); // solar dashed
        record[23] = 0xFF; // humidity dashed
        record[24] = 0xFF; // avg wind dashed
        record[27] = 0xFF; // avg wind dir dashed
        record[28] = 0xFF; // avg UV dashed

        let reading = decode_archive(&record, offset(0)).unwrap().unwrap();
        assert_eq!(reading.high_temperature_c, None);
        assert_eq!(reading.solar_radiation, None);
        assert_eq!(reading.humidity, None);
        assert_eq!(reading.average_wind_speed, None);
        assert_eq!(reading.wind_direction, None);
        assert_eq!(reading.average_uv, None);
        // the rest still decodes
        assert_eq!(reading.low_temperature_c.unwrap().round(), 23.0);
    }

    #[test]
    fn test_decode_archive_dash_slot() {
        assert_eq!(decode_archive(&dash_record(), offset(-2)).unwrap(), None);

        // A dash slot is recognized from the leading words alone
        let mut record = sample_record();
        record[..4].copy_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(decode_archive(&record, offset(-2)).unwrap(), None);
    }

    #[test]
    fn test_decode_archive_bad_length() {
        assert!(matches!(
            decode_archive(&[0u8; 50], offset(0)),
            Err(ArchiveError::BadRecordLength { actual: 50, .. })
        ));
    }

    #[test]
    fn test_decode_archive_bad_calendar_value() {
        let mut record = sample_record();
        // month bits 13 cannot resolve to a calendar date
        put_u16(&mut record, 0, 17 + 13 * 32 + 12 * 512);

        let err = decode_archive(&record, offset(0)).unwrap_err();
        assert!(matches!(
            err,
            ArchiveError::Timestamp(TimestampError::InvalidCalendarValue { month: 13, .. })
        ));
    }

    #[test]
    fn test_decode_data() {
        let mut buffer = Vec::new();
        buffer.extend_from_slice(&sample_record());
        buffer.extend_from_slice(&dash_record());

        let mut later = sample_record();
        put_u16(&mut later, 2, 1510); // 15:10, next interval
        buffer.extend_from_slice(&later);

        let readings = decode_data(&buffer, offset(-2)).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].station_timestamp, pack_datetime(6353, 1505));
        assert_eq!(readings[1].station_timestamp, pack_datetime(6353, 1510));
    }

    #[test]
    fn test_decode_data_empty() {
        assert_eq!(decode_data(&[], offset(0)).unwrap(), Vec::new());
    }

    #[test]
    fn test_decode_data_rejects_partial_tail() {
        let mut buffer = sample_record().to_vec();
        buffer.push(0x00);

        assert!(matches!(
            decode_data(&buffer, offset(0)),
            Err(ArchiveError::MalformedBufferLength { length: 53 })
        ));
    }

    #[test]
    fn test_reading_serializes() {
        let reading = decode_archive(&sample_record(), offset(-2)).unwrap().unwrap();
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["station_timestamp"], 416351713);
        assert_eq!(json["humidity"], 35);
        assert_eq!(json["wind_direction"], "N");
        assert_eq!(json["et_mm"], serde_json::Value::Null);
    }
}
