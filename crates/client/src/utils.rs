//! Small display helpers.

use chrono::{DateTime, Local, Utc};

/// Format a Brazilian phone number as `+55 AA NNNN-NNNNN`.
///
/// Anything that doesn't look like a full Brazilian number (country code 55,
/// at least 12 digits) is returned untouched.
pub fn format_phone(number: &str) -> String {
    if number.is_empty() {
        return String::new();
    }

    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if !digits.starts_with("55") || digits.len() < 12 {
        return number.to_string();
    }

    let country = &digits[0..2];
    let area = &digits[2..4];
    let first_part = &digits[4..8];
    let second_part = &digits[8..digits.len().min(13)];

    format!("+{country} {area} {first_part}-{second_part}")
}

/// Initials for an avatar: first letter of the first and last words.
pub fn get_initials(name: Option<&str>) -> String {
    const FALLBACK: &str = "SN";

    let Some(name) = name else {
        return FALLBACK.to_string();
    };

    let parts: Vec<&str> = name.split_whitespace().collect();
    let Some(first_word) = parts.first() else {
        return FALLBACK.to_string();
    };

    let mut initials = String::new();
    initials.extend(first_word.chars().next());
    if parts.len() > 1 {
        if let Some(last) = parts.last().and_then(|w| w.chars().next()) {
            initials.push(last);
        }
    }

    initials.to_uppercase()
}

/// `HH:mm` in the local timezone.
pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string()
}

/// `DD/MM/YYYY HH:mm` in the local timezone, from an RFC3339 string.
/// Returns the raw input when it doesn't parse.
pub fn format_date_time(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%d/%m/%Y %H:%M")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Cross-platform async sleep.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_brazilian_numbers() {
        assert_eq!(format_phone("5511987654321"), "+55 11 9876-54321");
        assert_eq!(format_phone("+55 (11) 98765-4321"), "+55 11 9876-54321");
    }

    #[test]
    fn passes_through_other_numbers() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("123"), "123");
        // Right country code but too short.
        assert_eq!(format_phone("55111234"), "55111234");
        // Not a Brazilian country code.
        assert_eq!(format_phone("4915123456789"), "4915123456789");
    }

    #[test]
    fn initials_from_first_and_last_word() {
        assert_eq!(get_initials(Some("Ana Souza")), "AS");
        assert_eq!(get_initials(Some("ana clara de souza")), "AS");
        assert_eq!(get_initials(Some("Madonna")), "M");
    }

    #[test]
    fn initials_fall_back_when_missing() {
        assert_eq!(get_initials(None), "SN");
        assert_eq!(get_initials(Some("")), "SN");
        assert_eq!(get_initials(Some("   ")), "SN");
    }

    #[test]
    fn time_formats_are_shaped_right() {
        let ts: DateTime<Utc> = "2026-01-10T15:30:00Z".parse().unwrap();
        let formatted = format_time(&ts);
        assert_eq!(formatted.len(), 5);
        assert_eq!(formatted.as_bytes()[2], b':');
    }

    #[test]
    fn date_time_falls_back_to_raw_input() {
        assert_eq!(format_date_time("not-a-date"), "not-a-date");

        let formatted = format_date_time("2026-01-10T15:30:00.000Z");
        // DD/MM/YYYY HH:mm
        assert_eq!(formatted.len(), 16);
        assert!(formatted.contains('/'));
    }
}
