/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use std::error::Error as StdError;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time with nanosecond precision, independent of any wire format.
///
/// awsJson services transmit timestamps as fractional epoch seconds; see [`Instant::from_f64`]
/// and [`Instant::epoch_fractional_seconds`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant::from_secs_and_nanos(
            epoch_seconds,
            (fraction * NANOS_PER_SECOND as f64).round() as u32,
        )
    }

    /// Build an instant from whole seconds and a nanosecond offset. Offsets of a second or
    /// more are carried into `seconds`, saturating at `i64::MAX`.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds.saturating_add((subsecond_nanos / NANOS_PER_SECOND) as i64),
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds as i64, epoch_seconds - seconds)
    }

    /// Returns `None` for times before the Unix epoch.
    pub fn from_system_time(system_time: SystemTime) -> Option<Self> {
        let duration = system_time.duration_since(UNIX_EPOCH).ok()?;
        Some(Instant {
            seconds: duration.as_secs() as i64,
            subsecond_nanos: duration.subsec_nanos(),
        })
    }

    /// Returns `None` for times before the Unix epoch.
    pub fn to_system_time(&self) -> Option<SystemTime> {
        if self.seconds < 0 {
            return None;
        }
        UNIX_EPOCH.checked_add(Duration::new(self.seconds as u64, self.subsecond_nanos))
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, ParseError> {
        match format {
            Format::DateTime => DateTime::parse_from_rfc3339(s)
                .map(|dt| Instant::from_secs_and_nanos(dt.timestamp(), dt.timestamp_subsec_nanos()))
                .map_err(|_| ParseError::new(format, s)),
            Format::HttpDate => NaiveDateTime::parse_from_str(s, HTTP_DATE)
                .map(|naive| Utc.from_utc_datetime(&naive))
                .map(|dt| Instant::from_secs_and_nanos(dt.timestamp(), dt.timestamp_subsec_nanos()))
                .map_err(|_| ParseError::new(format, s)),
            Format::EpochSeconds => s
                .parse::<f64>()
                .ok()
                .filter(|secs| secs.is_finite())
                .map(Instant::from_f64)
                .ok_or_else(|| ParseError::new(format, s)),
        }
    }

    fn to_chrono(self) -> DateTime<Utc> {
        match Utc.timestamp_opt(self.seconds, self.subsecond_nanos).single() {
            Some(dt) => dt,
            None => DateTime::<Utc>::from(UNIX_EPOCH),
        }
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => {
                let rfc3339 = self
                    .to_chrono()
                    .to_rfc3339_opts(SecondsFormat::AutoSi, true);
                // chrono pads the fraction to 3, 6 or 9 digits
                if self.has_nanos() {
                    let mut rfc3339 = rfc3339
                        .trim_end_matches('Z')
                        .trim_end_matches('0')
                        .to_owned();
                    rfc3339.push('Z');
                    rfc3339
                } else {
                    rfc3339
                }
            }
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
            Format::HttpDate => self.to_chrono().format(HTTP_DATE).to_string(),
        }
    }
}

const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Format {
    DateTime,
    HttpDate,
    EpochSeconds,
}

/// Failed to parse a timestamp in the requested [`Format`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseError {
    format: Format,
    input: String,
}

impl ParseError {
    fn new(format: Format, input: &str) -> Self {
        ParseError {
            format,
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid {:?} timestamp", self.input, self.format)
    }
}

impl StdError for ParseError {}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;

    #[test]
    fn nanos_carry_into_seconds() {
        let instant = Instant::from_secs_and_nanos(10, 1_500_000_000);
        assert_eq!(instant.epoch_seconds(), 11);
        assert_eq!(instant.subsec_nanos(), 500_000_000);
    }

    #[test]
    fn carry_saturates() {
        let instant = Instant::from_secs_and_nanos(i64::MAX, 2_250_000_000);
        assert_eq!(instant.epoch_seconds(), i64::MAX);
        assert_eq!(instant.subsec_nanos(), 250_000_000);
    }

    #[test]
    fn system_time() {
        let instant = Instant::from_secs_and_nanos(1576540098, 52_000_000);
        let system_time = instant.to_system_time().expect("after the epoch");
        assert_eq!(Instant::from_system_time(system_time), Some(instant));
        assert_eq!(Instant::from_epoch_seconds(-1).to_system_time(), None);
    }

    #[test]
    fn parse_formats() {
        let expected = Instant::from_epoch_seconds(1576540098);
        assert_eq!(
            Instant::from_str("2019-12-16T23:48:18Z", Format::DateTime),
            Ok(expected)
        );
        assert_eq!(
            Instant::from_str("Mon, 16 Dec 2019 23:48:18 GMT", Format::HttpDate),
            Ok(expected)
        );
        assert_eq!(
            Instant::from_str("1576540098", Format::EpochSeconds),
            Ok(expected)
        );
        assert!(Instant::from_str("yesterday", Format::EpochSeconds).is_err());
        assert!(Instant::from_str("NaN", Format::EpochSeconds).is_err());
    }

    #[test]
    fn negative_fractional_epoch() {
        let instant = Instant::from_f64(-1.5);
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.subsec_nanos(), 500_000_000);
        assert_eq!(instant.epoch_fractional_seconds(), -1.5);
    }

    proptest! {
        #[test]
        fn whole_epoch_seconds_round_trip(secs in 0i64..4_102_444_800) {
            let instant = Instant::from_epoch_seconds(secs);
            prop_assert_eq!(Instant::from_f64(instant.epoch_fractional_seconds()), instant);
            prop_assert_eq!(
                Instant::from_str(&instant.fmt(Format::EpochSeconds), Format::EpochSeconds),
                Ok(instant)
            );
        }

        #[test]
        fn millisecond_epoch_seconds_round_trip(secs in 0i64..4_102_444_800, millis in 0u32..1000) {
            let encoded = secs as f64 + millis as f64 / 1000.0;
            let instant = Instant::from_f64(encoded);
            prop_assert_eq!(instant.epoch_seconds(), secs);
            prop_assert_eq!((instant.subsec_nanos() + 500_000) / 1_000_000, millis);
        }
    }
}
