//! Shared text helpers for the rendering components.
//!
//! `escape_html` is the sole injection defense for user-supplied text: every
//! string that ends up inside rendered markup must pass through it first.

use chrono::{DateTime, Utc};

/// Escape the five HTML-significant characters (`& < > " '`).
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Round to the nearest whole number, halves away from zero.
///
/// Non-finite inputs round to 0.
pub(crate) fn round_whole(v: f64) -> i64 {
    if !v.is_finite() {
        tracing::warn!("round_whole received non-finite value {}, defaulting to 0", v);
        return 0;
    }
    v.round() as i64
}

/// Format an alert timestamp for display.
pub(crate) fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_escape_html_all_five() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("River rising at Mill Lane"), "River rising at Mill Lane");
    }

    #[test]
    fn test_escape_html_empty() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_round_whole_half_away_from_zero() {
        assert_eq!(round_whole(2.5), 3);
        assert_eq!(round_whole(-2.5), -3);
        assert_eq!(round_whole(17.46), 17);
        assert_eq!(round_whole(-0.4), 0);
    }

    #[test]
    fn test_round_whole_non_finite() {
        assert_eq!(round_whole(f64::NAN), 0);
        assert_eq!(round_whole(f64::INFINITY), 0);
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 6, 14, 30, 0).unwrap();
        assert_eq!(format_timestamp(ts), "2026-08-06 14:30");
    }
}
