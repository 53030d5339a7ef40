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

//! Packing and unpacking of boolean flags onto byte sequences.
//!
//! Bit positions count from the most-significant bit: flag index 0 of a
//! chunk lands on bit 7 of the output byte. A flag sequence whose length is
//! not a multiple of 8 leaves the unused low-order bits of the final byte 0.
//! [`decode_flags`] is the exact inverse of [`encode_flags`] over whole-byte
//! inputs.

use crate::error::Error;

const FLAGS_PER_BYTE: usize = 8;

/// Maps a single flag to a full byte with only `bit_index` set (or none).
///
/// `bit_index` counts left to right: `pack_flag(true, 0)` is `0b1000_0000`
/// and `pack_flag(true, 7)` is `0b0000_0001`.
///
/// # Panics
///
/// Panics if `bit_index > 7`.
pub fn pack_flag(flag: bool, bit_index: u8) -> u8 {
    assert!(bit_index < 8, "bit_index must be < 8");
    (flag as u8) << (7 - bit_index)
}

/// Packs up to 8 flags into one byte, index 0 onto bit 7.
///
/// Fewer than 8 flags leave the remaining low-order bits 0.
///
/// # Errors
///
/// Returns an error if more than 8 flags are given.
pub fn pack_flags(flags: &[bool]) -> Result<u8, Error> {
    if flags.len() > FLAGS_PER_BYTE {
        return Err(Error::invalid_length(
            "pack_flags",
            FLAGS_PER_BYTE,
            flags.len(),
        ));
    }

    let mut byte = 0u8;
    for (index, &flag) in flags.iter().enumerate() {
        byte |= pack_flag(flag, index as u8);
    }
    Ok(byte)
}

/// Packs an arbitrary-length flag sequence into bytes, 8 flags per byte.
///
/// Output length is `ceil(flags.len() / 8)`; a final partial chunk is
/// zero-padded in the low bits.
///
/// # Examples
///
/// ```
/// let bytes = bitwire::bits::encode_flags(&[true, false, false, true, true]);
/// assert_eq!(bytes, [0b1001_1000]);
/// ```
pub fn encode_flags(flags: &[bool]) -> Vec<u8> {
    flags
        .chunks(FLAGS_PER_BYTE)
        .map(|chunk| {
            let mut byte = 0u8;
            for (index, &flag) in chunk.iter().enumerate() {
                byte |= pack_flag(flag, index as u8);
            }
            byte
        })
        .collect()
}

/// Unpacks each byte into 8 flags, bit 7 first, concatenated in byte order.
///
/// Output length is always `8 * bytes.len()`; padding bits written by
/// [`encode_flags`] come back as trailing `false` flags.
pub fn decode_flags(bytes: &[u8]) -> Vec<bool> {
    let mut flags = Vec::with_capacity(bytes.len() * FLAGS_PER_BYTE);
    for &byte in bytes {
        for bit in (0..FLAGS_PER_BYTE).rev() {
            flags.push((byte >> bit) & 1 == 1);
        }
    }
    flags
}
