use chrono::{DateTime, Datelike, NaiveDate, Utc};

pub const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// Calendar date. The schema stores the three fields as given; use
/// [`Date::to_naive`] to find out whether they name a real day.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Date {
    #[prost(int32, tag = "1")]
    pub year: i32,
    /// 1..=12
    #[prost(int32, tag = "2")]
    pub month: i32,
    /// 1..=31
    #[prost(int32, tag = "3")]
    pub day: i32,
}

impl Date {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    pub fn to_naive(&self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        // month/day are at most 31
        Self::new(date.year(), date.month() as i32, date.day() as i32)
    }
}

/// Point in time as seconds since the Unix epoch plus a sub-second
/// remainder. Stored verbatim: out-of-range `nanos` survive a round trip.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Timestamp {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    /// 0..=999_999_999
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

impl Timestamp {
    pub fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    pub fn is_normalized(&self) -> bool {
        (0..NANOS_PER_SECOND).contains(&self.nanos)
    }

    /// Carries whole seconds out of `nanos` so that `nanos` lands in
    /// `0..NANOS_PER_SECOND`. Seconds saturate at the `i64` bounds.
    pub fn normalized(&self) -> Self {
        let carry = i64::from(self.nanos.div_euclid(NANOS_PER_SECOND));
        Self {
            seconds: self.seconds.saturating_add(carry),
            nanos: self.nanos.rem_euclid(NANOS_PER_SECOND),
        }
    }

    /// `None` when `nanos` is out of range or the instant is outside what
    /// chrono can represent.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.is_normalized() {
            return None;
        }
        DateTime::<Utc>::from_timestamp(self.seconds, self.nanos as u32)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        // leap-second nanos (>= 1e9) are folded into the next second
        Self::new(dt.timestamp(), dt.timestamp_subsec_nanos() as i32).normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_calendar_check() {
        assert!(Date::new(2024, 2, 29).to_naive().is_some());
        assert!(Date::new(2023, 2, 29).to_naive().is_none());
        assert!(Date::new(2024, 13, 1).to_naive().is_none());
        assert!(Date::new(2024, -1, 1).to_naive().is_none());
        assert!(Date::new(2024, 1, 0).to_naive().is_none());
    }

    #[test]
    fn date_from_naive() {
        let naive = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        assert_eq!(Date::from(naive), Date::new(2025, 7, 14));
    }

    #[test]
    fn normalize_carries_seconds() {
        assert_eq!(Timestamp::new(10, 1_500_000_000).normalized(), Timestamp::new(11, 500_000_000));
        assert_eq!(Timestamp::new(10, -1).normalized(), Timestamp::new(9, 999_999_999));
        assert_eq!(Timestamp::new(10, 5).normalized(), Timestamp::new(10, 5));
        assert_eq!(Timestamp::new(i64::MAX, NANOS_PER_SECOND).normalized().seconds, i64::MAX);
    }

    #[test]
    fn datetime_conversion() {
        let ts = Timestamp::new(1_705_123_456, 250);
        let dt = ts.to_datetime().unwrap();
        assert_eq!(dt.timestamp(), 1_705_123_456);
        assert_eq!(Timestamp::from(dt), ts);
        assert!(Timestamp::new(0, -3).to_datetime().is_none());
    }
}
