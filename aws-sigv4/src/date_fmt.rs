/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{Date, DateTime, Utc};

const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const DATE_FORMAT: &str = "%Y%m%d";

/// Formats a chrono `Date<Utc>` in `YYYYMMDD` format.
pub(crate) fn format_date(date: &Date<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats a chrono `DateTime<Utc>` in `YYYYMMDD'T'HHMMSS'Z'` format.
pub(crate) fn format_date_time(date_time: &DateTime<Utc>) -> String {
    date_time.format(DATE_TIME_FORMAT).to_string()
}

/// Parses `YYYYMMDD'T'HHMMSS'Z'` formatted dates into a chrono `DateTime<Utc>`.
#[cfg(test)]
pub(crate) fn parse_date_time(date_time_str: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let date_time = chrono::NaiveDateTime::parse_from_str(date_time_str, DATE_TIME_FORMAT)?;
    Ok(DateTime::<Utc>::from_utc(date_time, Utc))
}

#[cfg(test)]
mod tests {
    use super::{format_date, format_date_time, parse_date_time};

    #[test]
    fn date_time_round_trip() {
        let date_time = parse_date_time("20150830T123600Z").unwrap();
        assert_eq!(format_date_time(&date_time), "20150830T123600Z");
        assert_eq!(format_date(&date_time.date()), "20150830");
    }

    #[test]
    fn invalid_date_time() {
        assert!(parse_date_time("2015-08-30T12:36:00Z").is_err());
    }
}
