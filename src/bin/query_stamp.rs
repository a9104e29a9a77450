//! Query timestamp utility
//! Encodes a calendar moment into the packed 32-bit timestamp that archive
//! query commands (DMP AFT) embed, and shows the round-trip decode

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveTime, Timelike};
use std::env;
use vantage_archive::{decode_timestamp, encode_date, encode_time, pack_datetime};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <YYYY-MM-DD> <HH:MM>", args[0]);
        eprintln!("Example: {} 2012-06-17 15:05", args[0]);
        std::process::exit(1);
    }

    let date = NaiveDate::parse_from_str(&args[1], "%Y-%m-%d")?;
    let time = NaiveTime::parse_from_str(&args[2], "%H:%M")?;

    let date_word = encode_date(date.year(), date.month(), date.day())?;
    let time_word = encode_time(time.hour(), time.minute())?;
    let packed = pack_datetime(date_word, time_word);

    println!("Date word:  {} (0x{:04X})", date_word, date_word);
    println!("Time word:  {} (0x{:04X})", time_word, time_word);
    println!("Packed:     {} (0x{:08X})", packed, packed);

    // Round trip through the decoder as a sanity check
    let utc = FixedOffset::east_opt(0).unwrap();
    let decoded = decode_timestamp(date_word, time_word, utc)?;
    println!("Round trip: {}", decoded);

    Ok(())
}
