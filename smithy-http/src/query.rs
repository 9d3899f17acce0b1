/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values as URI query parameters

use crate::label::UNRESERVED;
use smithy_types::instant::Format;
use smithy_types::Instant;

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    percent_encoding::utf8_percent_encode(t.as_ref(), UNRESERVED).to_string()
}

pub fn fmt_timestamp(t: &Instant, format: Format) -> String {
    fmt_string(t.fmt(format))
}

/// Appends `key=value` pairs to a URI, starting the query string if there is none yet
///
/// Keys and values are written as given; encode them with [`fmt_string`] first.
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        let prefix = if out.contains('?') { '&' } else { '?' };
        Writer { out, prefix }
    }

    pub fn push_kv(&mut self, k: &str, v: &str) {
        self.out.push(self.prefix);
        self.out.push_str(k);
        self.out.push('=');
        self.out.push_str(v);
        self.prefix = '&';
    }

    pub fn push_v(&mut self, k: &str) {
        self.out.push(self.prefix);
        self.out.push_str(k);
        self.prefix = '&';
    }
}

#[cfg(test)]
mod test {
    use crate::query::{fmt_string, Writer};

    #[test]
    fn writer_starts_and_continues_query() {
        let mut uri = String::from("/tags/arn");
        let mut writer = Writer::new(&mut uri);
        writer.push_kv("tagKeys", &fmt_string("team"));
        writer.push_kv("tagKeys", &fmt_string("cost center"));
        assert_eq!(uri, "/tags/arn?tagKeys=team&tagKeys=cost%20center");

        let mut uri = String::from("/analyzer?type=ACCOUNT");
        Writer::new(&mut uri).push_v("flag");
        assert_eq!(uri, "/analyzer?type=ACCOUNT&flag");
    }
}
