/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Epoch-seconds timestamps, the default timestamp format of awsJson.
//!
//! Whole seconds are written as JSON integers, anything else as a fractional number. Fractions
//! are read with millisecond precision.
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use smithy_types::Instant;
//!
//! #[derive(Serialize, Deserialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct Credentials {
//!     #[serde(
//!         default,
//!         with = "aws_json::instant_epoch::option",
//!         skip_serializing_if = "Option::is_none"
//!     )]
//!     expiration: Option<Instant>,
//! }
//!
//! let creds: Credentials = serde_json::from_str(r#"{"Expiration":1700000000}"#).unwrap();
//! assert_eq!(creds.expiration, Some(Instant::from_epoch_seconds(1700000000)));
//! ```

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smithy_types::Instant;
use std::fmt;

const MILLIS_PER_SECOND: i64 = 1_000;
const NANOS_PER_MILLI: i64 = 1_000_000;

pub struct InstantEpoch(pub Instant);

impl Serialize for InstantEpoch {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let nanos = self.0.subsec_nanos() as i64;
        if nanos == 0 {
            return serializer.serialize_i64(self.0.epoch_seconds());
        }
        let millis = if nanos % NANOS_PER_MILLI == 0 {
            self.0
                .epoch_seconds()
                .checked_mul(MILLIS_PER_SECOND)
                .and_then(|millis| millis.checked_add(nanos / NANOS_PER_MILLI))
        } else {
            None
        };
        match millis {
            // a single division keeps the printed fraction exact
            Some(millis) => serializer.serialize_f64(millis as f64 / MILLIS_PER_SECOND as f64),
            None => serializer.serialize_f64(self.0.epoch_fractional_seconds()),
        }
    }
}

struct EpochVisitor;

impl<'de> Visitor<'de> for EpochVisitor {
    type Value = InstantEpoch;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a timestamp in seconds since the Unix epoch")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(InstantEpoch(Instant::from_epoch_seconds(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        if v > i64::MAX as u64 {
            return Err(E::invalid_value(Unexpected::Unsigned(v), &self));
        }
        Ok(InstantEpoch(Instant::from_epoch_seconds(v as i64)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        let millis = (v * MILLIS_PER_SECOND as f64).round();
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return Err(E::invalid_value(Unexpected::Float(v), &self));
        }
        let millis = millis as i64;
        Ok(InstantEpoch(Instant::from_secs_and_nanos(
            millis.div_euclid(MILLIS_PER_SECOND),
            (millis.rem_euclid(MILLIS_PER_SECOND) * NANOS_PER_MILLI) as u32,
        )))
    }
}

impl<'de> Deserialize<'de> for InstantEpoch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EpochVisitor)
    }
}

pub fn serialize<S: Serializer>(value: &Instant, serializer: S) -> Result<S::Ok, S::Error> {
    InstantEpoch(*value).serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Instant, D::Error> {
    InstantEpoch::deserialize(deserializer).map(|instant| instant.0)
}

/// For optional members, use with `#[serde(default, with = "aws_json::instant_epoch::option")]`.
pub mod option {
    use super::InstantEpoch;
    use serde::{Deserialize, Deserializer, Serializer};
    use smithy_types::Instant;

    pub fn serialize<S: Serializer>(
        value: &Option<Instant>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(instant) => serializer.serialize_some(&InstantEpoch(*instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Instant>, D::Error> {
        Option::<InstantEpoch>::deserialize(deserializer)
            .map(|instant| instant.map(|instant| instant.0))
    }
}

#[cfg(test)]
mod test {
    use super::InstantEpoch;
    use proptest::prelude::*;
    use smithy_types::Instant;

    fn encode(instant: Instant) -> String {
        serde_json::to_string(&InstantEpoch(instant)).unwrap()
    }

    fn decode(json: &str) -> Instant {
        serde_json::from_str::<InstantEpoch>(json).unwrap().0
    }

    #[test]
    fn whole_seconds_are_integers() {
        assert_eq!(encode(Instant::from_epoch_seconds(1700000000)), "1700000000");
        assert_eq!(decode("1700000000"), Instant::from_epoch_seconds(1700000000));
        assert_eq!(decode("1700000000.0"), Instant::from_epoch_seconds(1700000000));
    }

    #[test]
    fn fractional_seconds() {
        let instant = Instant::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(encode(instant), "1576540098.52");
        assert_eq!(decode("1576540098.52"), instant);
        assert_eq!(
            decode("1576540098.1234"),
            Instant::from_secs_and_nanos(1576540098, 123_000_000)
        );
    }

    #[test]
    fn before_the_epoch() {
        assert_eq!(decode("-1"), Instant::from_epoch_seconds(-1));
        assert_eq!(decode("-0.5"), Instant::from_secs_and_nanos(-1, 500_000_000));
    }

    #[test]
    fn far_future_millis_fall_back_to_fractional_seconds() {
        let instant = Instant::from_secs_and_nanos(i64::MAX / 100, 500_000_000);
        let encoded: f64 = encode(instant).parse().unwrap();
        assert_eq!(encoded, instant.epoch_fractional_seconds());

        let instant = Instant::from_secs_and_nanos(i64::MAX, 999_000_000);
        let encoded: f64 = encode(instant).parse().unwrap();
        assert_eq!(encoded, i64::MAX as f64);
    }

    #[test]
    fn not_a_number() {
        assert!(serde_json::from_str::<InstantEpoch>(r#""1700000000""#).is_err());
        assert!(serde_json::from_str::<InstantEpoch>("null").is_err());
    }

    proptest! {
        #[test]
        fn millisecond_round_trip(seconds in 0..4_102_444_800_i64, millis in 0..1000_u32) {
            let instant = Instant::from_secs_and_nanos(seconds, millis * 1_000_000);
            prop_assert_eq!(decode(&encode(instant)), instant);
        }
    }
}
