// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Compact decimal float decoding.
//!
//! A compact float is a 4-byte encoding distinct from IEEE754:
//!
//! | Byte | Field |
//! |------|-------|
//! | 0-2  | significand, big-endian unsigned magnitude |
//! | 3    | high nibble: exponent magnitude; low bit: exponent sign |
//!
//! An even exponent byte means a positive exponent, odd means negative, and
//! the decoded value is `significand * 10^(signed exponent)`. The encoding
//! is a lossy decimal approximation and there is no encoder; peers produce
//! these bytes, this crate only reads them.

use crate::int::fold_u32_be;

const COMPACT_FLOAT_BYTES: usize = 4;
const SIGNIFICAND_BYTES: usize = 3;

/// Decodes a 4-byte compact float.
///
/// Input of any other length decodes to `0.0`; the lenient default is part
/// of the wire contract and is not an error.
///
/// # Examples
///
/// ```
/// // significand 150, exponent +1
/// assert_eq!(bitwire::float::decode_compact_float(&[0, 0, 150, 0x10]), 1500.0);
/// ```
pub fn decode_compact_float(bytes: &[u8]) -> f32 {
    if bytes.len() != COMPACT_FLOAT_BYTES {
        return 0.0;
    }

    let significand = fold_u32_be(&bytes[..SIGNIFICAND_BYTES]);
    let exponent = (bytes[3] >> 4) as i32;
    let exponent = if bytes[3] % 2 == 0 { exponent } else { -exponent };

    significand as f32 * 10f32.powi(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_exponent() {
        assert_eq!(decode_compact_float(&[0, 0, 150, 0x10]), 1500.0);
    }

    #[test]
    fn test_negative_exponent() {
        // Odd exponent byte flips the sign: 150 * 10^-1.
        assert_eq!(decode_compact_float(&[0, 0, 150, 0x11]), 15.0);
    }

    #[test]
    fn test_zero_exponent() {
        assert_eq!(decode_compact_float(&[0, 0, 150, 0x00]), 150.0);
    }

    #[test]
    fn test_three_byte_significand() {
        // 0x012345 = 74565, exponent +2.
        assert_eq!(decode_compact_float(&[0x01, 0x23, 0x45, 0x20]), 7_456_500.0);
    }

    #[test]
    fn test_wrong_length_decodes_to_zero() {
        assert_eq!(decode_compact_float(&[]), 0.0);
        assert_eq!(decode_compact_float(&[0, 0, 150]), 0.0);
        assert_eq!(decode_compact_float(&[0, 0, 0, 150, 0x10]), 0.0);
    }
}
