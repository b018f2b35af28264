//! Text-to-value parsers for console input.
//!
//! All parsers trim surrounding whitespace. Unit letters are matched
//! case-insensitively.

use std::sync::OnceLock;

use regex::Regex;

use crate::{Date, ValidationError};

/// Parse a duration such as `2h30m15s`, `15m` or `48s` into seconds.
///
/// The grammar is one or more `<digits><unit>` segments with `unit` in
/// `h`, `m`, `s`. Segments are summed in whatever order they appear, and a
/// unit may repeat, so `5s2h` is 7205 seconds. The total must be positive.
pub fn parse_duration(text: &str) -> Result<u32, ValidationError> {
    let invalid = || ValidationError::InvalidDuration(text.to_string());
    let input = text.trim().to_ascii_lowercase();
    if input.is_empty() {
        return Err(invalid());
    }

    let mut total: u32 = 0;
    let mut current: Option<u32> = None;
    for c in input.chars() {
        if let Some(digit) = c.to_digit(10) {
            let value = current
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(invalid)?;
            current = Some(value);
            continue;
        }

        let factor = match c {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return Err(invalid()),
        };
        let value = current.take().ok_or_else(invalid)?;
        total = value
            .checked_mul(factor)
            .and_then(|v| total.checked_add(v))
            .ok_or_else(invalid)?;
    }

    // Digits without a unit
    if current.is_some() || total == 0 {
        return Err(invalid());
    }
    Ok(total)
}

/// Parse a distance such as `2km`, `1.5km`, `100m` or `100` into meters.
///
/// Kilometers may be fractional and are truncated to whole meters, with
/// a space allowed before `km`. Meters must be written without one. The
/// result must be positive.
pub fn parse_distance(text: &str) -> Result<u32, ValidationError> {
    let invalid = || ValidationError::InvalidDistance(text.to_string());
    let input = text.trim().to_ascii_lowercase();

    let meters = if let Some(km) = input.strip_suffix("km") {
        let km: f64 = km.trim().parse().map_err(|_| invalid())?;
        let meters = (km * 1000.0).trunc();
        if !meters.is_finite() || meters < 0.0 || meters > f64::from(u32::MAX) {
            return Err(invalid());
        }
        meters as u32
    } else if let Some(m) = input.strip_suffix('m') {
        m.parse::<u32>().map_err(|_| invalid())?
    } else {
        input.parse::<u32>().map_err(|_| invalid())?
    };

    if meters == 0 {
        return Err(invalid());
    }
    Ok(meters)
}

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("valid date pattern"))
}

/// Parse a `dd/MM/yyyy` date; blank input means `today`.
pub fn parse_date_on(text: &str, today: Date) -> Result<Date, ValidationError> {
    let input = text.trim();
    if input.is_empty() {
        return Ok(today);
    }
    if !date_pattern().is_match(input) {
        return Err(ValidationError::InvalidDate(text.to_string()));
    }
    Date::parse_from_str(input, "%d/%m/%Y")
        .map_err(|_| ValidationError::InvalidDate(text.to_string()))
}

/// Parse a `dd/MM/yyyy` date; blank input means the local current day.
pub fn parse_date(text: &str) -> Result<Date, ValidationError> {
    parse_date_on(text, chrono::Local::now().date_naive())
}

/// Parse a set or rep count.
pub fn parse_count(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

/// Trim a name and check it can be stored on one log line.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.contains(|c| matches!(c, ';' | '\n' | '\r')) {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    Ok(name.to_string())
}
