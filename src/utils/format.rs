//! Formatting utilities for timestamps.

/// Broken-down local time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalTime {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

/// Short pt-BR style date and time, e.g. `19/10/2026, 14:05`.
pub fn format_short_datetime(t: &LocalTime) -> String {
    format!(
        "{:02}/{:02}/{}, {:02}:{:02}",
        t.day, t.month, t.year, t.hour, t.minute
    )
}

/// Read the browser's local time.
pub fn local_now() -> LocalTime {
    let now = js_sys::Date::new_0();
    LocalTime {
        year: now.get_full_year(),
        month: now.get_month() + 1,
        day: now.get_date(),
        hour: now.get_hours(),
        minute: now.get_minutes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_short_datetime() {
        let t = LocalTime {
            year: 2026,
            month: 10,
            day: 19,
            hour: 14,
            minute: 5,
        };
        assert_eq!(format_short_datetime(&t), "19/10/2026, 14:05");
    }

    #[test]
    fn test_format_pads() {
        let t = LocalTime {
            year: 2025,
            month: 1,
            day: 2,
            hour: 0,
            minute: 0,
        };
        assert_eq!(format_short_datetime(&t), "02/01/2025, 00:00");
    }
}
