//! Display formatting for prices, dates and distances.
//!
//! Output follows Indonesian conventions: `.` groups thousands, `,` marks
//! decimals, month names are abbreviated in Bahasa Indonesia.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des"];

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format an amount as whole Rupiah, e.g. `Rp 15.000`.
pub fn format_rupiah(amount: f64) -> String {
    if !amount.is_finite() {
        return "Rp 0".to_owned();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = amount.abs().round() as u64;
    let sign = if amount < 0.0 && whole > 0 { "-" } else { "" };
    format!("{sign}Rp {}", group_thousands(whole))
}

/// Format a distance in kilometres: metres below 1 km, one decimal above.
/// Parse a Rupiah amount as typed in Indonesian. Dots are thousands
/// separators, a comma marks decimals and a leading `Rp` is ignored.
pub fn parse_rupiah(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches("Rp")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn format_distance(km: f64) -> String {
    if !km.is_finite() || km < 0.0 {
        return "-".to_owned();
    }
    if km < 1.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let metres = (km * 1000.0).round() as u64;
        return format!("{metres} m");
    }
    format!("{km:.1} km").replace('.', ",")
}

/// Parsed `YYYY-MM-DD[THH:MM]` prefix of an ISO-8601 timestamp.
fn parse_iso(raw: &str) -> Option<(u32, usize, u32, Option<(u32, u32)>)> {
    let date = raw.get(0..10)?;
    let mut parts = date.split('-');
    let year = parts.next()?.parse::<u32>().ok()?;
    let month = parts.next()?.parse::<usize>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    let time = raw.get(11..16).and_then(|hm| {
        let (h, m) = hm.split_once(':')?;
        Some((h.parse().ok()?, m.parse().ok()?))
    });
    Some((year, month, day, time))
}

/// `2026-01-05T10:00:00Z` → `5 Jan 2026`. Unparseable input is returned as is.
pub fn format_date(raw: &str) -> String {
    match parse_iso(raw) {
        Some((year, month, day, _)) => format!("{day} {} {year}", MONTHS[month - 1]),
        None => raw.to_owned(),
    }
}

/// `2026-01-05T10:00:00Z` → `5 Jan 2026, 10:00`.
pub fn format_datetime(raw: &str) -> String {
    match parse_iso(raw) {
        Some((year, month, day, Some((hour, minute)))) => {
            format!("{day} {} {year}, {hour:02}:{minute:02}", MONTHS[month - 1])
        }
        Some(_) => format_date(raw),
        None => raw.to_owned(),
    }
}
