// Packed date/time codec for archive records and archive queries
//
// The station stores the moment an archive record was written as two 16-bit
// little-endian words. The date word is bit-packed:
//
//   15 14 13 12 11 10  9  8  7  6  5  4  3  2  1  0
//    y  y  y  y  y  y  y  m  m  m  m  d  d  d  d  d
//
// i.e. day + month*32 + (year - 2000)*512. The time word is decimal, not
// bit-packed: hour*100 + minute. Archive query commands carry both words in
// one 32-bit value with the time word in the low half, because the device
// transmits time before date.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Timelike};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TimestampError {
    #[error("year {0} outside the representable range 2000-2127")]
    YearOutOfRange(i32),

    #[error("no such calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("time of day out of range: {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("calendar value out of range: {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}")]
    InvalidCalendarValue {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },
}

pub type Result<T> = std::result::Result<T, TimestampError>;

const YEAR_MASK: u16 = 0xfe00;
const MONTH_MASK: u16 = 0x01e0;
const DAY_MASK: u16 = 0x001f;

/// Encode year/month/day into the station's packed date word.
/// Rejects anything that is not a real calendar date in 2000-2127, since an
/// out-of-range month or day would produce a word that cannot round-trip.
pub fn encode_date(year: i32, month: u32, day: u32) -> Result<u16> {
    if !(2000..=2127).contains(&year) {
        return Err(TimestampError::YearOutOfRange(year));
    }
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(TimestampError::InvalidDate { year, month, day });
    }
    Ok(day as u16 + (month as u16) * 32 + ((year - 2000) as u16) * 512)
}

/// Encode hour/minute into the station's decimal time word
pub fn encode_time(hour: u32, minute: u32) -> Result<u16> {
    if hour > 23 || minute > 59 {
        return Err(TimestampError::InvalidTime { hour, minute });
    }
    Ok((hour * 100 + minute) as u16)
}

/// Pack the date and time words in the order expected by archive query
/// commands: the time word occupies the low 16 bits.
pub fn pack_datetime(date: u16, time: u16) -> u32 {
    ((date as u32) << 16) | time as u32
}

/// Encode a calendar moment into the packed 32-bit query timestamp.
/// Example: 2012-06-17 15:05 encodes to 416351713.
pub fn encode_timestamp<T>(t: &T) -> Result<u32>
where
    T: Datelike + Timelike,
{
    let date = encode_date(t.year(), t.month(), t.day())?;
    let time = encode_time(t.hour(), t.minute())?;
    Ok(pack_datetime(date, time))
}

/// Decode the station's date and time words into a calendar timestamp
/// anchored in the given fixed UTC offset. Seconds are not recorded and
/// come back as zero. A month or day outside the calendar (or a time word
/// above 2359) is an `InvalidCalendarValue` error.
pub fn decode_timestamp(date: u16, time: u16, utc_offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    let year = (((date & YEAR_MASK) >> 9) as i32) + 2000;
    let month = ((date & MONTH_MASK) >> 5) as u32;
    let day = (date & DAY_MASK) as u32;

    let hour = (time / 100) as u32;
    let minute = (time % 100) as u32;

    tracing::debug!(year, month, day, hour, minute, "decoded archive timestamp");

    utc_offset
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .ok_or(TimestampError::InvalidCalendarValue {
            year,
            month,
            day,
            hour,
            minute,
        })
}
