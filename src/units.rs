// Unit conversions for raw Davis archive field values
// Reference: Vantage Serial Communication Reference Manual v261, section X.4

/// "Dashed" byte value: the station stores 0xFF when a byte-wide sensor
/// field has no reading.
pub const DASH_BYTE: u8 = 0xFF;

/// "Dashed" unsigned short value (0x7FFF).
pub const DASH_SHORT: u16 = 0x7FFF;

/// "Dashed" signed short value.
pub const DASH_SIGNED_SHORT: i16 = i16::MIN;

/// 16-point compass rose, indexed by the station's wind-direction code.
pub const CARDINALS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Convert inches to millimeters
pub fn in_to_mm(inches: f64) -> f64 {
    inches * 25.4
}

/// Convert miles per hour to kilometers per hour, rounded to one decimal
pub fn mph_to_kmh(mph: f64) -> f64 {
    (mph * 1.60934 * 10.0).round() / 10.0
}

/// Decode a temperature field (tenths of a degree Fahrenheit) to Celsius
pub fn decode_temperature(raw: i16) -> Option<f64> {
    if raw == DASH_SHORT as i16 || raw == DASH_SIGNED_SHORT {
        return None;
    }
    Some(((raw as f64 / 10.0) - 32.0) * (5.0 / 9.0))
}

/// Decode a rain counter to millimeters. One click equals 0.2 mm of rain;
/// zero is a valid reading, so there is no dash value.
pub fn decode_rain(raw: u16) -> f64 {
    raw as f64 * 0.2
}

/// Decode the barometer field (thousandths of an inch of mercury)
pub fn decode_barometer(raw: u16) -> Option<f64> {
    if raw == DASH_SHORT {
        return None;
    }
    Some(raw as f64 / 1000.0)
}

/// Decode a wind speed field (whole miles per hour) to km/h
pub fn decode_wind_speed(raw: u8) -> Option<f64> {
    if raw == DASH_BYTE {
        return None;
    }
    Some(mph_to_kmh(raw as f64))
}

/// Decode a wind direction code to its compass label. Codes above 15 carry
/// no meaning and map to `None` like the dash value does.
pub fn decode_wind_direction(raw: u8) -> Option<&'static str> {
    if raw == DASH_BYTE {
        return None;
    }
    CARDINALS.get(raw as usize).copied()
}

/// Decode a UV field (tenths of an index point)
pub fn decode_uv(raw: u8) -> Option<f64> {
    if raw == DASH_BYTE {
        return None;
    }
    Some(raw as f64 / 10.0)
}

/// Decode an evapotranspiration field (thousandths of an inch) to mm.
/// The station reports 0 when ET is not being measured.
pub fn decode_et(raw: u16) -> Option<f64> {
    if raw == 0 {
        return None;
    }
    Some(in_to_mm(raw as f64 / 1000.0))
}

/// Decode a solar radiation field (already in W/m²)
pub fn decode_solar_radiation(raw: u16) -> Option<u16> {
    if raw == DASH_SHORT {
        return None;
    }
    Some(raw)
}

/// Decode a relative humidity field (already in percent)
pub fn decode_humidity(raw: u8) -> Option<u8> {
    if raw == DASH_BYTE {
        return None;
    }
    Some(raw)
}
