// VANTAGE-ARCHIVE: codec for Davis Vantage weather-station archive records
//
// Decodes the fixed 52-byte archive records downloaded from Vantage Pro,
// Pro2 and Vue data loggers into physical readings, and encodes calendar
// moments into the packed timestamps archive queries expect. Transport and
// persistence live elsewhere; this crate only speaks bytes.

pub mod archive;
pub mod offset;
pub mod timestamp;
pub mod units;

// Re-export commonly used types
pub use archive::{
    decode_archive, decode_data, is_dash, ArchiveError, ArchiveRecord, DecodedReading,
    ExtraSensors, ARCHIVE_RECORD_SIZE,
};
pub use offset::{parse_utc_offset, to_fixed_offset};
pub use timestamp::{
    decode_timestamp, encode_date, encode_time, encode_timestamp, pack_datetime, TimestampError,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
