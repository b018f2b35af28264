//! Display formatters. Output is for people, never parsed back.

use crate::Date;

/// Format seconds as `HhMmSs`, dropping leading zero units only.
pub fn format_duration(seconds: u32) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    if h > 0 {
        format!("{h}h{m}m{s}s")
    } else if m > 0 {
        format!("{m}m{s}s")
    } else {
        format!("{s}s")
    }
}

/// Format meters as `1.5km` from 1000 m upward, else `999m`.
pub fn format_distance(meters: u32) -> String {
    if meters >= 1000 {
        format!("{:.1}km", f64::from(meters) / 1000.0)
    } else {
        format!("{meters}m")
    }
}

/// Format a date as `dd/MM/yyyy`.
pub fn format_date(date: Date) -> String {
    date.format("%d/%m/%Y").to_string()
}
