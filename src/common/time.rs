use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// BRT is UTC-3
fn brt_offset() -> FixedOffset {
    FixedOffset::west_opt(3 * 3600).unwrap()
}

/// Get current Unix timestamp in BRT (milliseconds)
pub fn get_brt_timestamp() -> i64 {
    let now_utc = Utc::now();
    let now_brt: DateTime<FixedOffset> = now_utc.with_timezone(&brt_offset());
    now_brt.timestamp_millis()
}

/// Format a Unix timestamp (milliseconds) as an RFC 3339 string in BRT
pub fn timestamp_to_brt_rfc3339(timestamp_millis: i64) -> String {
    match brt_offset().timestamp_millis_opt(timestamp_millis) {
        chrono::LocalResult::Single(dt) => dt.to_rfc3339(),
        _ => String::new(),
    }
}
