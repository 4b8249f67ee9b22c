//! Korea Standard Time helpers for the clock widget and event timestamps.

use chrono::{DateTime, FixedOffset, Offset, Utc};

const KST_OFFSET_SECS: i32 = 9 * 60 * 60;

fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Renders `now` as the `HH:MM:SS` KST clock string.
pub fn kst_clock_string(now: DateTime<Utc>) -> String {
    now.with_timezone(&kst()).format("%H:%M:%S").to_string()
}

/// Current wall-clock time as the KST clock string.
pub fn kst_clock_now() -> String {
    kst_clock_string(Utc::now())
}

/// Renders epoch milliseconds as `YYYY-MM-DD HH:MM:SS` in KST.
///
/// Returns `None` when the timestamp is out of chrono's range.
pub fn format_kst_timestamp(epoch_ms: i64) -> Option<String> {
    let utc = DateTime::<Utc>::from_timestamp_millis(epoch_ms)?;
    Some(
        utc.with_timezone(&kst())
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
    )
}
