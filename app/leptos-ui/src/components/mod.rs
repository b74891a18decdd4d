pub mod conference_card;
pub mod conference_form;
pub mod keynote_card;
pub mod keynote_form;
pub mod nav_bar;
pub mod spinner;
pub mod toast;

use chrono::{DateTime, NaiveDateTime};

/// Native browser confirmation dialog. Deletes always go through here.
pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// Human form of the backend's ISO-8601 strings, which come either as
/// RFC 3339 or as the zone-less `datetime-local` shape. Unparseable input
/// is shown as-is.
pub(crate) fn format_datetime(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format("%d/%m/%Y %H:%M").to_string();
        }
    }
    raw.to_string()
}

/// Truncate an ISO-8601 string to the `YYYY-MM-DDTHH:MM` shape a
/// `datetime-local` input accepts as its value.
pub(crate) fn datetime_local_value(raw: &str) -> String {
    raw.chars().take(16).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetimes_render_in_day_month_year_order() {
        assert_eq!(format_datetime("2025-03-01T09:00"), "01/03/2025 09:00");
        assert_eq!(format_datetime("2025-03-01T09:00:30"), "01/03/2025 09:00");
        assert_eq!(format_datetime("2025-03-01T12:30:00Z"), "01/03/2025 12:30");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_datetime("bient\u{f4}t"), "bient\u{f4}t");
        assert_eq!(format_datetime(""), "");
    }

    #[test]
    fn datetime_local_values_are_minute_precise() {
        assert_eq!(datetime_local_value("2025-03-01T09:00:30Z"), "2025-03-01T09:00");
        assert_eq!(datetime_local_value("2025-03-01T09:00"), "2025-03-01T09:00");
    }
}
