// src/core/format.rs
// Display helpers shared by the GUI cards, the stats banner and the CLI.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, Timelike, Utc};

const WEEKDAYS: [&str; 7] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"];
const MONTHS: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni",
    "Juli", "Agustus", "September", "Oktober", "November", "Desember",
];

/// Asia/Jakarta has no DST.
pub fn jakarta() -> FixedOffset {
    FixedOffset::east_opt(7 * 3600).unwrap_or_else(|| Utc.fix())
}

/// `quota / registered * 100` to two decimals, or `-` when either is missing or zero.
pub fn fill_percentage(quota: Option<u64>, registered: Option<u64>) -> String {
    match (quota, registered) {
        (Some(q), Some(r)) if q > 0 && r > 0 => format!("{:.2}%", q as f64 / r as f64 * 100.0),
        _ => "-".to_string(),
    }
}

/// Integer with `.` thousands separators, e.g. `12.345`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Date part of a dataset timestamp as `dd/mm/yyyy` (Jakarta time for zoned stamps).
/// Empty input yields `-`; text we cannot read is shown as-is.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".to_string();
    };
    match parse_date(raw) {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&jakarta()).date_naive());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// First `max` characters, with `…` appended when something was cut.
pub fn truncate_chars(s: &str, max: usize) -> String {
    let s = s.trim();
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}…", s[..cut].trim_end()),
        None => s.to_string(),
    }
}

/// Long-form clock in Jakarta time, e.g. `Senin, 19 Oktober 2026 pukul 14.05.09`.
pub fn jakarta_clock(now: DateTime<Utc>) -> String {
    let t = now.with_timezone(&jakarta());
    format!(
        "{}, {} {} {} pukul {:02}.{:02}.{:02}",
        WEEKDAYS[t.weekday().num_days_from_monday() as usize],
        t.day(),
        MONTHS[t.month0() as usize],
        t.year(),
        t.hour(),
        t.minute(),
        t.second(),
    )
}
