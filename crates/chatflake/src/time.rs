use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

/// Discord epoch: Thursday, January 1, 2015 00:00:00 UTC
pub const DISCORD_EPOCH: Duration = Duration::from_millis(1_420_070_400_000);

/// [`DISCORD_EPOCH`] as signed milliseconds since the Unix epoch.
pub const DISCORD_EPOCH_MILLIS: i64 = DISCORD_EPOCH.as_millis() as i64;

/// Milliseconds between the Unix epoch and `instant`, floored, so instants
/// before 1970 are negative. Values beyond the `i64` range wrap.
pub(crate) fn unix_millis(instant: SystemTime) -> i64 {
    match instant.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_millis() as i64,
        Err(before) => {
            let before = before.duration();
            let millis = before.as_millis() as i64;
            if before.subsec_nanos() % 1_000_000 == 0 {
                millis.wrapping_neg()
            } else {
                millis.wrapping_add(1).wrapping_neg()
            }
        }
    }
}

/// Inverse of [`unix_millis`].
pub(crate) fn from_unix_millis(millis: i64) -> SystemTime {
    let offset = Duration::from_millis(millis.unsigned_abs());
    if millis < 0 {
        UNIX_EPOCH - offset
    } else {
        UNIX_EPOCH + offset
    }
}
