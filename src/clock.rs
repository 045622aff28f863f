use crate::err::Error;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// IANA name of the zone every reported time is rendered in.
pub const TIMEZONE: &str = "America/Toronto";

/// Format shared by the API responses and the `time_log.timestamp` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Look up a timezone in the bundled IANA database.
pub fn load_timezone(name: &str) -> Result<Tz, Error> {
    name.parse::<Tz>().map_err(|e| Error::Timezone {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Current instant seen from `tz`.
pub fn now_in(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}

/// Wall-clock rendering of `instant` in its own zone, second precision.
pub fn display(instant: &DateTime<Tz>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Timezone-naive UTC rendering used for the stored column.
///
/// The zone only affects what is shown to the client, the row always holds UTC.
pub fn storage_value(instant: &DateTime<Tz>) -> String {
    instant.with_timezone(&Utc).format(TIMESTAMP_FORMAT).to_string()
}
