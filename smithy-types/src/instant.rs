/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Timestamps with sub-second precision and the textual formats services use for them.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: f64 = 1_000_000_000_f64;
const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S";

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Format {
    /// RFC-3339, eg. `2019-12-16T23:48:18.52Z`
    DateTime,
    /// IMF-fixdate, eg. `Mon, 16 Dec 2019 23:48:18 GMT`
    HttpDate,
    /// Fractional seconds since the Unix epoch, eg. `1576540098.52`
    EpochSeconds,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseError {
    input: String,
    format: Format,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid {:?} timestamp", self.input, self.format)
    }
}

impl Error for ParseError {}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        let nanos = (fraction * NANOS_PER_SECOND).round() as u32;
        if nanos >= 1_000_000_000 {
            Instant {
                seconds: epoch_seconds + 1,
                subsecond_nanos: nanos - 1_000_000_000,
            }
        } else {
            Instant {
                seconds: epoch_seconds,
                subsecond_nanos: nanos,
            }
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    /// Convert a floating point epoch timestamp
    ///
    /// The shortest decimal that reads back as `epoch_seconds` is used, so `1576540098.123`
    /// becomes exactly 123 milliseconds rather than the nearest binary fraction.
    pub fn from_f64(epoch_seconds: f64) -> Self {
        if let Some(instant) = parse_epoch_decimal(&epoch_seconds.to_string()) {
            return instant;
        }
        let seconds = epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds as i64, epoch_seconds - seconds)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                Instant::from_f64(-before_epoch.duration().as_secs_f64())
            }
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, ParseError> {
        let err = || ParseError {
            input: s.to_string(),
            format,
        };
        match format {
            Format::DateTime => {
                let parsed = DateTime::parse_from_rfc3339(s).map_err(|_| err())?;
                Ok(Instant::from_secs_and_nanos(
                    parsed.timestamp(),
                    parsed.timestamp_subsec_nanos(),
                ))
            }
            Format::HttpDate => {
                let trimmed = s.trim().strip_suffix(" GMT").ok_or_else(err)?;
                let (date, nanos) = match trimmed.rfind('.') {
                    Some(idx) => {
                        let fraction = &trimmed[idx..];
                        if fraction.len() > 4 {
                            return Err(err());
                        }
                        let fraction: f64 = format!("0{}", fraction).parse().map_err(|_| err())?;
                        (&trimmed[..idx], (fraction * NANOS_PER_SECOND).round() as u32)
                    }
                    None => (trimmed, 0),
                };
                let parsed = NaiveDateTime::parse_from_str(date, HTTP_DATE).map_err(|_| err())?;
                Ok(Instant::from_secs_and_nanos(
                    Utc.from_utc_datetime(&parsed).timestamp(),
                    nanos,
                ))
            }
            Format::EpochSeconds => match parse_epoch_decimal(s) {
                Some(instant) => Ok(instant),
                None => {
                    let parsed: f64 = s.parse().map_err(|_| err())?;
                    if !parsed.is_finite() {
                        return Err(err());
                    }
                    Ok(Instant::from_f64(parsed))
                }
            },
        }
    }

    fn to_chrono(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos).single()
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn fmt(&self, format: Format) -> String {
        let date_time = match (format, self.to_chrono()) {
            (Format::EpochSeconds, _) | (_, None) => {
                return if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                };
            }
            (_, Some(date_time)) => date_time,
        };
        match format {
            Format::DateTime if self.has_nanos() => {
                let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::Nanos, true);
                let mut trimmed = rfc3339.trim_end_matches('Z').trim_end_matches('0').to_owned();
                trimmed.push('Z');
                trimmed
            }
            Format::DateTime => date_time.to_rfc3339_opts(SecondsFormat::Secs, true),
            Format::HttpDate if self.has_nanos() => date_time
                .format(&format!("{}.%3f GMT", HTTP_DATE))
                .to_string(),
            _ => date_time.format(&format!("{} GMT", HTTP_DATE)).to_string(),
        }
    }
}

/// Parse `<seconds>[.<fraction>]` exactly, without a round trip through `f64`
fn parse_epoch_decimal(s: &str) -> Option<Instant> {
    let (seconds, fraction) = match s.find('.') {
        Some(idx) => (&s[..idx], &s[idx + 1..]),
        None => (s, ""),
    };
    if fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut seconds: i64 = seconds.parse().ok()?;
    let mut nanos: u32 = if fraction.is_empty() {
        0
    } else {
        format!("{:0<9}", fraction).parse().ok()?
    };
    if s.starts_with('-') && nanos > 0 {
        seconds -= 1;
        nanos = 1_000_000_000 - nanos;
    }
    Some(Instant::from_secs_and_nanos(seconds, nanos))
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::Instant;
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");
        assert_eq!(
            instant.fmt(Format::HttpDate),
            "Mon, 16 Dec 2019 23:48:18 GMT"
        );

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
        assert_eq!(
            instant.fmt(Format::HttpDate),
            "Mon, 16 Dec 2019 23:48:18.520 GMT"
        );
    }

    #[test]
    fn round_seconds_are_not_trimmed() {
        let instant = Instant::from_epoch_seconds(1576540090);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:10Z");
    }

    #[test]
    fn parse_formats() {
        let expected = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(
            Instant::from_str("2019-12-16T23:48:18.52Z", Format::DateTime),
            Ok(expected)
        );
        assert_eq!(
            Instant::from_str("1576540098.52", Format::EpochSeconds),
            Ok(expected)
        );
        assert_eq!(
            Instant::from_str("Mon, 16 Dec 2019 23:48:18.52 GMT", Format::HttpDate),
            Ok(expected)
        );
        assert_eq!(
            Instant::from_str("Mon, 16 Dec 2019 23:48:18 GMT", Format::HttpDate),
            Ok(Instant::from_epoch_seconds(1576540098))
        );
    }

    #[test]
    fn parse_failures() {
        assert!(Instant::from_str("Mon, 16 Dec 2019 23:48:18.1234 GMT", Format::HttpDate).is_err());
        assert!(Instant::from_str("yesterday", Format::DateTime).is_err());
        assert!(Instant::from_str("NaN", Format::EpochSeconds).is_err());
    }

    #[test]
    fn from_system_time() {
        let time = UNIX_EPOCH + Duration::new(1576540098, 500_000_000);
        assert_eq!(
            Instant::from(time),
            Instant::from_fractional_seconds(1576540098, 0.5)
        );
    }

    #[test]
    fn nanos_never_overflow() {
        assert_eq!(Instant::from_f64(-1e-10), Instant::from_epoch_seconds(0));
        assert_eq!(
            Instant::from_fractional_seconds(41, 0.9999999999),
            Instant::from_epoch_seconds(42)
        );
        assert_eq!(
            Instant::from_f64(-0.5),
            Instant::from_secs_and_nanos(-1, 500_000_000)
        );
    }

    #[test]
    fn from_f64_keeps_milliseconds() {
        assert_eq!(
            Instant::from_f64(1576540098.123),
            Instant::from_secs_and_nanos(1576540098, 123_000_000)
        );
        assert_eq!(
            Instant::from_f64(1576540098.0),
            Instant::from_epoch_seconds(1576540098)
        );
    }

    proptest! {
        #[test]
        fn f64_millis_are_exact(seconds in -62135596800_i64..253402300799_i64, millis in 0..1000_u32) {
            let instant = Instant::from_secs_and_nanos(seconds, millis * 1_000_000);
            prop_assert_eq!(Instant::from_f64(instant.epoch_fractional_seconds()), instant);
        }

        #[test]
        fn epoch_seconds_roundtrip(seconds in 0..253402300799_i64, millis in 0..1000_u32) {
            let instant = Instant::from_secs_and_nanos(seconds, millis * 1_000_000);
            let formatted = instant.fmt(Format::EpochSeconds);
            let parsed = Instant::from_str(&formatted, Format::EpochSeconds).expect("valid epoch seconds");
            prop_assert_eq!(parsed.epoch_seconds(), instant.epoch_seconds());
            prop_assert_eq!(parsed.fmt(Format::DateTime), instant.fmt(Format::DateTime));
        }
    }
}
