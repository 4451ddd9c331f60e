//! Minimal IGC flight-file reader.
//!
//! Reads exactly the parts of an IGC file the API serves: the pilot, glider
//! type, glider id and date header records, and the B-record position fixes
//! used to derive the track length. All other record types are skipped.
//! Unparseable individual fixes are dropped rather than failing the file.

use crate::error::CoreError;

/// Fields extracted from one IGC file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct IgcFlight {
    pub pilot: String,
    pub glider: String,
    pub glider_id: String,
    /// Flight date from the DTE header, rendered `YYYY-MM-DD`.
    pub date: String,
    /// `(lat, lon)` fixes in decimal degrees, in file order.
    pub fixes: Vec<(f64, f64)>,
}

/// Parse an IGC file. The file must open with an `A` (manufacturer) record;
/// anything else is rejected as not being an IGC file.
pub fn parse(contents: &str) -> Result<IgcFlight, CoreError> {
    let mut lines = contents
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty());

    let first = lines
        .next()
        .ok_or_else(|| CoreError::Validation("empty IGC file".to_string()))?;
    if !first.starts_with('A') {
        return Err(CoreError::Validation(
            "not an IGC file: missing A record".to_string(),
        ));
    }

    let mut flight = IgcFlight::default();
    for line in lines {
        match line.as_bytes().first() {
            Some(b'H') => read_header(line, &mut flight),
            Some(b'B') => {
                if let Some(fix) = read_fix(line) {
                    flight.fixes.push(fix);
                }
            }
            _ => {}
        }
    }

    Ok(flight)
}

/// Header records look like `HFPLTPILOTINCHARGE:John Doe` or `HFPLT:John
/// Doe`; the three-letter subtype sits at bytes 2..5.
fn read_header(line: &str, flight: &mut IgcFlight) {
    let Some(subtype) = line.get(2..5) else {
        return;
    };
    match subtype {
        "PLT" => flight.pilot = header_value(line),
        "GTY" => flight.glider = header_value(line),
        "GID" => flight.glider_id = header_value(line),
        "DTE" => flight.date = read_date(&header_value(line)),
        _ => {}
    }
}

fn header_value(line: &str) -> String {
    match line.split_once(':') {
        Some((_, value)) => value.trim().to_string(),
        // Short form without a long name or colon, e.g. `HFDTE281118`.
        None => line.get(5..).unwrap_or_default().trim().to_string(),
    }
}

/// DTE payload is `DDMMYY` (century assumed 2000), possibly followed by a
/// flight number. Falls back to the raw value when it does not match.
fn read_date(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(6).collect();
    if digits.len() != 6 {
        return raw.to_string();
    }
    format!("20{}-{}-{}", &digits[4..6], &digits[2..4], &digits[0..2])
}

/// B records carry the fix as `B HHMMSS DDMMmmmN DDDMMmmmE ...` with
/// latitude at bytes 7..15 and longitude at 15..24 (minutes in
/// thousandths).
fn read_fix(line: &str) -> Option<(f64, f64)> {
    if !line.is_ascii() {
        return None;
    }

    let lat_deg: f64 = line.get(7..9)?.parse().ok()?;
    let lat_min: f64 = line.get(9..14)?.parse().ok()?;
    let lat_hemisphere = line.get(14..15)?;
    let lon_deg: f64 = line.get(15..18)?.parse().ok()?;
    let lon_min: f64 = line.get(18..23)?.parse().ok()?;
    let lon_hemisphere = line.get(23..24)?;

    let mut lat = lat_deg + lat_min / 60_000.0;
    if lat_hemisphere == "S" {
        lat = -lat;
    }
    let mut lon = lon_deg + lon_min / 60_000.0;
    if lon_hemisphere == "W" {
        lon = -lon;
    }

    Some((lat, lon))
}
