use std::fmt;

use time::{error::ComponentRange, format_description::well_known::Rfc3339, OffsetDateTime};

/// Milliseconds since the Unix epoch (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimestampMs(i64);

impl TimestampMs {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl From<OffsetDateTime> for TimestampMs {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl TryFrom<TimestampMs> for OffsetDateTime {
    type Error = ComponentRange;
    fn try_from(from: TimestampMs) -> Result<Self, Self::Error> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
    }
}

impl fmt::Display for TimestampMs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Identifiers can encode instants far beyond the supported date range.
        match OffsetDateTime::try_from(*self)
            .ok()
            .and_then(|dt| dt.format(&Rfc3339).ok())
        {
            Some(formatted) => f.write_str(&formatted),
            None => write!(f, "{}ms", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_offset_date_time() {
        let t1 = TimestampMs::now();
        let dt = OffsetDateTime::try_from(t1).unwrap();
        let t2 = TimestampMs::from(dt);
        assert_eq!(t1, t2);
    }

    #[test]
    fn display_as_rfc3339() {
        let ts = TimestampMs::from_millis(1_469_918_176_385);
        assert!(ts.to_string().starts_with("2016-07-30T22:36:16.385"));
    }

    #[test]
    fn display_out_of_range_as_millis() {
        let ts = TimestampMs::from_millis(i64::MAX);
        assert_eq!(ts.to_string(), format!("{}ms", i64::MAX));
    }
}
