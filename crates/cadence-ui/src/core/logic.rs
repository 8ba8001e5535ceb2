//! Pure helpers shared by the settings views.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Label shown when a time slot cannot be parsed.
pub const INVALID_DURATION_LABEL: &str = "invalid format";

const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Minutes between two `HH:MM` strings, or `None` when either fails to parse.
///
/// Both times are placed on the same reference day, so an end before the start
/// yields a negative value.
#[must_use]
pub fn duration_minutes(start: &str, end: &str) -> Option<i64> {
    let start = on_reference_day(start)?;
    let end = on_reference_day(end)?;
    Some((end - start).num_minutes())
}

/// Human-readable duration label for a time slot.
#[must_use]
pub fn format_duration(start: &str, end: &str) -> String {
    duration_minutes(start, end)
        .map_or_else(|| INVALID_DURATION_LABEL.to_string(), format_minutes)
}

/// Format a minute count as `{m} minutes`, `{h} hours`, or `{h}h {m}min`.
#[must_use]
pub fn format_minutes(minutes: i64) -> String {
    if minutes < 60 {
        return format!("{minutes} minutes");
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{hours} hours")
    } else {
        format!("{hours}h {rest}min")
    }
}

fn on_reference_day(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    let time = TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())?;
    Some(NaiveDate::from_ymd_opt(2000, 1, 1)?.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_durations_render_in_minutes() {
        assert_eq!(format_duration("08:00", "08:45"), "45 minutes");
    }

    #[test]
    fn whole_hours_render_in_hours() {
        assert_eq!(format_duration("08:00", "10:00"), "2 hours");
    }

    #[test]
    fn mixed_durations_render_compact() {
        assert_eq!(format_duration("08:00", "09:30"), "1h 30min");
    }

    #[test]
    fn seconds_are_accepted() {
        assert_eq!(format_duration("08:00:00", "08:15:00"), "15 minutes");
    }

    #[test]
    fn unparsable_input_uses_fallback_label() {
        assert_eq!(format_duration("abc", "10:00"), INVALID_DURATION_LABEL);
        assert_eq!(format_duration("08:00", "25:00"), INVALID_DURATION_LABEL);
        assert_eq!(duration_minutes("", ""), None);
    }

    #[test]
    fn reversed_slots_are_not_special_cased() {
        assert_eq!(duration_minutes("10:00", "09:30"), Some(-30));
        assert_eq!(format_duration("10:00", "09:30"), "-30 minutes");
    }
}
