/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! `#[serde(with = "...")]` adapters for timestamps and blobs
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use smithy_types::Instant;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Event {
//!     #[serde(
//!         rename = "startTime",
//!         default,
//!         skip_serializing_if = "Option::is_none",
//!         with = "smithy_json::serde_with::epoch_seconds_option"
//!     )]
//!     start_time: Option<Instant>,
//! }
//! ```

use serde::de::{Error, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smithy_types::{Blob, Instant};
use std::fmt;

struct EpochSeconds(Instant);

impl Serialize for EpochSeconds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.has_nanos() {
            serializer.serialize_f64(self.0.epoch_fractional_seconds())
        } else {
            serializer.serialize_i64(self.0.epoch_seconds())
        }
    }
}

struct EpochSecondsVisitor;

impl<'de> Visitor<'de> for EpochSecondsVisitor {
    type Value = EpochSeconds;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("seconds since the Unix epoch")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(EpochSeconds(Instant::from_epoch_seconds(v)))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        if v > i64::MAX as u64 {
            return Err(E::invalid_value(Unexpected::Unsigned(v), &self));
        }
        Ok(EpochSeconds(Instant::from_epoch_seconds(v as i64)))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        if !v.is_finite() {
            return Err(E::invalid_value(Unexpected::Float(v), &self));
        }
        Ok(EpochSeconds(Instant::from_f64(v)))
    }
}

impl<'de> Deserialize<'de> for EpochSeconds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EpochSecondsVisitor)
    }
}

struct Base64Ref<'a>(&'a Blob);

impl<'a> Serialize for Base64Ref<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&base64::encode(self.0.as_ref()))
    }
}

struct Base64(Blob);

impl<'de> Deserialize<'de> for Base64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        let decoded = base64::decode(&encoded)
            .map_err(|_| D::Error::invalid_value(Unexpected::Str(&encoded), &"base64 data"))?;
        Ok(Base64(Blob::new(decoded)))
    }
}

/// An [`Instant`] written as (fractional) epoch seconds
pub mod epoch_seconds {
    use super::EpochSeconds;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use smithy_types::Instant;

    pub fn serialize<S: Serializer>(value: &Instant, serializer: S) -> Result<S::Ok, S::Error> {
        EpochSeconds(*value).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Instant, D::Error> {
        Ok(EpochSeconds::deserialize(deserializer)?.0)
    }
}

pub mod epoch_seconds_option {
    use super::EpochSeconds;
    use serde::{Deserialize, Deserializer, Serializer};
    use smithy_types::Instant;

    pub fn serialize<S: Serializer>(
        value: &Option<Instant>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(instant) => serializer.serialize_some(&EpochSeconds(*instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Instant>, D::Error> {
        Ok(Option::<EpochSeconds>::deserialize(deserializer)?.map(|ts| ts.0))
    }
}

/// A [`Blob`] written as a base64 string
pub mod blob {
    use super::{Base64, Base64Ref};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use smithy_types::Blob;

    pub fn serialize<S: Serializer>(value: &Blob, serializer: S) -> Result<S::Ok, S::Error> {
        Base64Ref(value).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Blob, D::Error> {
        Ok(Base64::deserialize(deserializer)?.0)
    }
}

pub mod blob_option {
    use super::{Base64, Base64Ref};
    use serde::{Deserialize, Deserializer, Serializer};
    use smithy_types::Blob;

    pub fn serialize<S: Serializer>(value: &Option<Blob>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(blob) => serializer.serialize_some(&Base64Ref(blob)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Blob>, D::Error> {
        Ok(Option::<Base64>::deserialize(deserializer)?.map(|b| b.0))
    }
}

pub mod blob_list {
    use super::{Base64, Base64Ref};
    use serde::{Deserialize, Deserializer, Serializer};
    use smithy_types::Blob;

    pub fn serialize<S: Serializer>(value: &[Blob], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(value.iter().map(Base64Ref))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Blob>, D::Error> {
        Ok(Vec::<Base64>::deserialize(deserializer)?
            .into_iter()
            .map(|b| b.0)
            .collect())
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use smithy_types::{Blob, Instant};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Shape {
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "crate::serde_with::epoch_seconds_option"
        )]
        time: Option<Instant>,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "crate::serde_with::blob_option"
        )]
        data: Option<Blob>,
        #[serde(default, with = "crate::serde_with::blob_list")]
        parts: Vec<Blob>,
    }

    #[test]
    fn whole_seconds_are_integers() {
        let shape = Shape {
            time: Some(Instant::from_epoch_seconds(1576540098)),
            data: None,
            parts: vec![],
        };
        assert_eq!(
            serde_json::to_value(&shape).expect("serializes"),
            json!({"time": 1576540098, "parts": []})
        );
    }

    #[test]
    fn fractional_seconds() {
        let parsed: Shape = serde_json::from_str(r#"{"time": 1576540098.5}"#).expect("valid");
        assert_eq!(
            parsed.time,
            Some(Instant::from_secs_and_nanos(1576540098, 500_000_000))
        );
        let out = serde_json::to_value(&parsed).expect("serializes");
        assert_eq!(out["time"], json!(1576540098.5));
    }

    #[test]
    fn milliseconds_are_exact() {
        let parsed: Shape = serde_json::from_str(r#"{"time": 1576540098.123}"#).expect("valid");
        assert_eq!(
            parsed.time,
            Some(Instant::from_secs_and_nanos(1576540098, 123_000_000))
        );
        assert_eq!(
            serde_json::to_string(&parsed).expect("serializes"),
            r#"{"time":1576540098.123,"parts":[]}"#
        );
    }

    proptest! {
        #[test]
        fn millisecond_timestamps_roundtrip(seconds in 0..253402300799_i64, millis in 0..1000_u32) {
            let shape = Shape {
                time: Some(Instant::from_secs_and_nanos(seconds, millis * 1_000_000)),
                data: None,
                parts: vec![],
            };
            let serialized = serde_json::to_string(&shape).expect("serializes");
            let parsed: Shape = serde_json::from_str(&serialized).expect("valid");
            prop_assert_eq!(parsed, shape);
        }
    }

    #[test]
    fn blobs_are_base64() {
        let shape = Shape {
            time: None,
            data: Some(Blob::new("hello")),
            parts: vec![Blob::new("a"), Blob::new("bc")],
        };
        let serialized = serde_json::to_value(&shape).expect("serializes");
        assert_eq!(
            serialized,
            json!({"data": "aGVsbG8=", "parts": ["YQ==", "YmM="]})
        );
        let parsed: Shape = serde_json::from_value(serialized).expect("valid");
        assert_eq!(parsed, shape);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(serde_json::from_str::<Shape>(r#"{"data": "not base64!"}"#).is_err());
        assert!(serde_json::from_str::<Shape>(r#"{"time": "yesterday"}"#).is_err());
        let nulls: Shape = serde_json::from_str(r#"{"time": null, "data": null}"#).expect("valid");
        assert_eq!(nulls.time, None);
        assert_eq!(nulls.data, None);
    }
}
