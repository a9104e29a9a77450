//! Archive dump decode utility
//! Decodes a binary file of downloaded archive records and displays the readings

use std::env;
use std::fs;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};
use vantage_archive::{decode_data, parse_utc_offset, to_fixed_offset, DecodedReading};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <dump_file.bin> <utc-offset> [--json]", args[0]);
        eprintln!("\nThe UTC offset is the token the station reports, e.g. \"-0200\".");
        eprintln!("\nExamples:");
        eprintln!("  {} archive.bin -0200          # Human-readable listing", args[0]);
        eprintln!("  {} archive.bin +0530 --json   # One JSON object per reading", args[0]);
        std::process::exit(1);
    }

    let dump_file = &args[1];
    let offset_token = &args[2];
    let json = args.get(3).map(|s| s.as_str()) == Some("--json");

    // Resolve the station's UTC offset; an unparseable token is a hard
    // error rather than a silent fallback to UTC
    let normalized = parse_utc_offset(offset_token)
        .ok_or_else(|| anyhow::anyhow!("unparseable UTC offset token: {:?}", offset_token))?;
    let utc_offset = to_fixed_offset(&normalized)
        .ok_or_else(|| anyhow::anyhow!("UTC offset out of range: {}", normalized))?;

    // Read and decode the dump
    let data = fs::read(dump_file)?;
    tracing::info!("loaded {} bytes from {}", data.len(), dump_file);

    let readings = decode_data(&data, utc_offset)?;
    tracing::info!(
        "decoded {} readings from {} records",
        readings.len(),
        data.len() / vantage_archive::ARCHIVE_RECORD_SIZE
    );

    for reading in &readings {
        if json {
            println!("{}", serde_json::to_string(reading)?);
        } else {
            print_reading(reading);
        }
    }

    Ok(())
}

fn print_reading(reading: &DecodedReading) {
    println!("Reading at {}", reading.timestamp);
    println!("  Query stamp:   {} (0x{:08X})", reading.station_timestamp, reading.station_timestamp);
    print_opt("Temperature", reading.temperature_c.map(|t| format!("{:.1} C", t)));
    print_opt("  high", reading.high_temperature_c.map(|t| format!("{:.1} C", t)));
    print_opt("  low", reading.low_temperature_c.map(|t| format!("{:.1} C", t)));
    println!("  Rain:          {:.1} mm ({:.1} mm/h peak)", reading.rain_amount_mm, reading.rain_rate_mm_per_hour);
    print_opt("Barometer", reading.barometer_in_hg.map(|b| format!("{:.3} inHg", b)));
    print_opt("Humidity", reading.humidity.map(|h| format!("{} %", h)));
    print_opt(
        "Wind",
        match (reading.average_wind_speed, reading.wind_direction) {
            (Some(speed), Some(dir)) => Some(format!("{:.1} km/h {}", speed, dir)),
            (Some(speed), None) => Some(format!("{:.1} km/h", speed)),
            _ => None,
        },
    );
    print_opt(
        "  gust",
        match (reading.high_wind_speed, reading.high_wind_direction) {
            (Some(speed), Some(dir)) => Some(format!("{:.1} km/h {}", speed, dir)),
            (Some(speed), None) => Some(format!("{:.1} km/h", speed)),
            _ => None,
        },
    );
    print_opt("Solar", reading.solar_radiation.map(|s| format!("{} W/m2", s)));
    print_opt("UV index", reading.average_uv.map(|u| format!("{:.1}", u)));
    print_opt("ET", reading.et_mm.map(|e| format!("{:.2} mm", e)));
    println!();
}

fn print_opt(label: &str, value: Option<String>) {
    println!(
        "  {:<14} {}",
        format!("{}:", label),
        value.unwrap_or_else(|| "---".to_string())
    );
}
