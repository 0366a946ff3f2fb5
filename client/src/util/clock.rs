//! Local wall-clock labels for chat timestamps.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Produces the timestamp label for a newly appended message.
pub type ClockFn = fn() -> String;

/// Format an hour/minute pair as 24-hour `HH:MM`.
pub fn format_hhmm(hour: u8, minute: u8) -> String {
    format!("{hour:02}:{minute:02}")
}

/// Current local time as `HH:MM`.
///
/// In the browser this reads the JS `Date` (which knows the user's zone).
/// Elsewhere it uses the process local offset, falling back to UTC when the
/// offset cannot be determined.
pub fn local_time_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let hour = u8::try_from(now.get_hours()).unwrap_or(0);
        let minute = u8::try_from(now.get_minutes()).unwrap_or(0);
        format_hhmm(hour, minute)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        format_hhmm(now.hour(), now.minute())
    }
}
