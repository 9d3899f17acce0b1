/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values as URI path labels

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use smithy_types::instant::Format;
use smithy_types::Instant;

/// RFC-3986 unreserved characters pass through unencoded
pub(crate) const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const GREEDY: &AsciiSet = &UNRESERVED.remove(b'/');

pub fn fmt_string<T: AsRef<str>>(t: T, greedy: bool) -> String {
    let uri_set = if greedy { GREEDY } else { UNRESERVED };
    percent_encoding::utf8_percent_encode(t.as_ref(), uri_set).to_string()
}

pub fn fmt_timestamp(t: &Instant, format: Format) -> String {
    fmt_string(t.fmt(format), false)
}

#[cfg(test)]
mod test {
    use crate::label::{fmt_string, fmt_timestamp};
    use smithy_types::instant::Format;
    use smithy_types::Instant;

    #[test]
    fn labels_are_percent_encoded() {
        assert_eq!(fmt_string("my analyzer", false), "my%20analyzer");
        assert_eq!(
            fmt_string("arn:aws:iotevents:us-east-1:123:input/a", false),
            "arn%3Aaws%3Aiotevents%3Aus-east-1%3A123%3Ainput%2Fa"
        );
        assert_eq!(fmt_string("a/b c", true), "a/b%20c");
        assert_eq!(fmt_string("keep-._~", false), "keep-._~");
    }

    #[test]
    fn timestamps_use_date_time() {
        assert_eq!(
            fmt_timestamp(&Instant::from_epoch_seconds(1576540098), Format::DateTime),
            "2019-12-16T23%3A48%3A18Z"
        );
    }
}
