// ui/src/currency.rs
use api::amount::Amount;
use chrono::DateTime;
use chrono::Local;
use chrono::TimeZone;
use chrono::Utc;

/// Formats an amount with a leading symbol, e.g. "₦12.50".
pub fn format_price(symbol: &str, amount: Amount) -> String {
    format!("{}{}", symbol, amount)
}

/// Formats the service fee line shown under a price, e.g. "+₦1.50 service fee".
pub fn format_fee(symbol: &str, fee: Amount) -> String {
    format!("+{} service fee", format_price(symbol, fee))
}

/// Wraps a buyer's note in double quotes, verbatim.
pub fn quoted_note(note: &str) -> String {
    format!("\"{}\"", note)
}

/// Long date with time, e.g. "January 5, 2024 at 10:00 AM", in `tz`.
pub fn format_date_in<Tz: TimeZone>(created_at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    created_at
        .with_timezone(tz)
        .format("%B %-d, %Y at %I:%M %p")
        .to_string()
}

/// Long date with time in the viewer's local time zone.
pub fn format_date(created_at: &DateTime<Utc>) -> String {
    format_date_in(created_at, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn price_and_fee_lines() {
        assert_eq!(format_price("₦", Amount::new_from_minor(1250)), "₦12.50");
        assert_eq!(format_fee("₦", Amount::new_from_minor(150)), "+₦1.50 service fee");
        assert_eq!(format_fee("$", Amount::new_from_minor(0)), "+$0.00 service fee");
    }

    #[test]
    fn note_is_quoted_verbatim() {
        assert_eq!(quoted_note("Enjoy!"), "\"Enjoy!\"");
        assert_eq!(quoted_note("  spaced  "), "\"  spaced  \"");
    }

    #[test]
    fn date_uses_long_form_with_at() {
        assert_eq!(
            format_date_in(&ts("2024-01-05T10:00:00Z"), &Utc),
            "January 5, 2024 at 10:00 AM"
        );
        assert_eq!(
            format_date_in(&ts("2023-11-28T21:07:00Z"), &Utc),
            "November 28, 2023 at 09:07 PM"
        );
    }

    #[test]
    fn date_respects_time_zone() {
        let lagos = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(
            format_date_in(&ts("2024-01-05T23:30:00Z"), &lagos),
            "January 6, 2024 at 12:30 AM"
        );
    }
}
