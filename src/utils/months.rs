use chrono::NaiveDate;

/// Parse a month label like "2024-01" or "2024/1" into a date pinned to the
/// first of the month. Returns None for labels that don't look like a month,
/// in which case callers fall back to insertion order.
pub fn parse_month_label(label: &str) -> Option<NaiveDate> {
    let normalized = label.trim().replace('/', "-");
    let mut parts = normalized.splitn(2, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}
