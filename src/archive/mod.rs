// Archive record decoding: the 52-byte wire layout and the reading model

pub mod decoder;
pub mod layout;
pub mod reading;

pub use decoder::{decode_archive, decode_data, is_dash};
pub use layout::ArchiveRecord;
pub use reading::{DecodedReading, ExtraSensors};

use thiserror::Error;

/// Size of one archive record on the wire, in bytes
pub const ARCHIVE_RECORD_SIZE: usize = 52;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("archive record must be {expected} bytes, got {actual}")]
    BadRecordLength { expected: usize, actual: usize },

    #[error("buffer length {length} is not a multiple of {ARCHIVE_RECORD_SIZE} bytes")]
    MalformedBufferLength { length: usize },

    #[error(transparent)]
    Timestamp(#[from] crate::timestamp::TimestampError),
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
