/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client-generated tokens that let a service recognize a retried request
//!
//! Members such as `clientToken` are filled in automatically when the caller leaves them unset.

use std::sync::Mutex;

/// Source of idempotency tokens
pub trait MakeIdempotencyToken: Send + Sync {
    fn make_idempotency_token(&self) -> String;
}

/// A token generator backed by a randomly seeded RNG
pub fn default_provider() -> impl MakeIdempotencyToken {
    Mutex::new(fastrand::Rng::new())
}

impl MakeIdempotencyToken for Mutex<fastrand::Rng> {
    fn make_idempotency_token(&self) -> String {
        let input: u128 = match self.lock() {
            Ok(rng) => rng.u128(..),
            Err(poisoned) => poisoned.into_inner().u128(..),
        };
        uuid_v4(input)
    }
}

/// A fixed token, for tests
impl MakeIdempotencyToken for &'static str {
    fn make_idempotency_token(&self) -> String {
        self.to_string()
    }
}

/// Format 122 random bits as a version 4 UUID
pub fn uuid_v4(input: u128) -> String {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(36);
    let mut nibbles = (0..32).map(|idx| ((input >> (idx * 4)) & 0x0F) as u8);
    for position in 0..36 {
        match position {
            8 | 13 | 18 | 23 => out.push('-'),
            14 => out.push('4'),
            _ => {
                let mut nibble = nibbles.next().unwrap_or(0);
                if position == 19 {
                    nibble |= 0b1000;
                }
                out.push(HEX_CHARS[nibble as usize] as char);
            }
        }
    }
    out
}

#[cfg(test)]
mod test {
    use crate::idempotency_token::{default_provider, uuid_v4, MakeIdempotencyToken};
    use proptest::prelude::*;
    use std::sync::Mutex;

    #[test]
    fn fixed_uuids() {
        assert_eq!(uuid_v4(0), "00000000-0000-4000-8000-000000000000");
        assert_eq!(
            uuid_v4(u128::max_value()),
            "ffffffff-ffff-4fff-ffff-ffffffffffff"
        );
    }

    #[test]
    fn seeded_generator_is_deterministic() {
        let first = Mutex::new(fastrand::Rng::with_seed(123)).make_idempotency_token();
        let second = Mutex::new(fastrand::Rng::with_seed(123)).make_idempotency_token();
        assert_eq!(first, second);
        assert_eq!(default_provider().make_idempotency_token().len(), 36);
    }

    proptest! {
        #[test]
        fn tokens_are_valid_v4_uuids(input in any::<u128>()) {
            let uuid = uuid_v4(input);
            prop_assert_eq!(uuid.len(), 36);
            let dashes: Vec<usize> = uuid
                .char_indices()
                .filter_map(|(idx, chr)| if chr == '-' { Some(idx) } else { None })
                .collect();
            prop_assert_eq!(dashes, vec![8, 13, 18, 23]);
            let bytes = uuid.as_bytes();
            prop_assert_eq!(bytes[14] as char, '4');
            prop_assert!(bytes[19] as char >= '8');
        }
    }
}
