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

//! Integer to byte-sequence conversions with configurable width and
//! endianness.
//!
//! Encoding serializes the full two's-complement form in the requested byte
//! order and then truncates to `width` bytes, dropping the most-significant
//! bytes. Values that do not fit in `width` bytes silently lose magnitude;
//! callers that need the full range pass the full width. Decoding folds
//! bytes least-significant-first and reports over-length input as an error.

use byteorder::BigEndian;
use byteorder::ByteOrder;
use byteorder::LittleEndian;

use crate::error::Error;

/// Byte ordering applied when serializing multi-byte integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

/// Serializes the low `width` bytes of an `i32`.
///
/// For [`Endianness::Little`] the result is the first `width` bytes of the
/// 4-byte little-endian form; for [`Endianness::Big`] the last `width` bytes
/// of the big-endian form. Either way the bytes kept are the value's
/// least-significant ones.
///
/// # Panics
///
/// Panics if `width` is outside `1..=4`.
///
/// # Examples
///
/// ```
/// use bitwire::int::{i32_to_bytes, Endianness};
///
/// assert_eq!(i32_to_bytes(0x1234, 2, Endianness::Little), [0x34, 0x12]);
/// assert_eq!(i32_to_bytes(0x1234, 2, Endianness::Big), [0x12, 0x34]);
/// ```
pub fn i32_to_bytes(value: i32, width: usize, endianness: Endianness) -> Vec<u8> {
    assert!(width >= 1 && width <= 4, "width must be in 1..=4");
    let mut buf = [0u8; 4];
    match endianness {
        Endianness::Little => {
            LittleEndian::write_i32(&mut buf, value);
            buf[..width].to_vec()
        }
        Endianness::Big => {
            BigEndian::write_i32(&mut buf, value);
            buf[4 - width..].to_vec()
        }
    }
}

/// Serializes the low `width` bytes of an `i64` under the same truncation
/// rules as [`i32_to_bytes`].
///
/// # Panics
///
/// Panics if `width` is outside `1..=8`.
pub fn i64_to_bytes(value: i64, width: usize, endianness: Endianness) -> Vec<u8> {
    assert!(width >= 1 && width <= 8, "width must be in 1..=8");
    let mut buf = [0u8; 8];
    match endianness {
        Endianness::Little => {
            LittleEndian::write_i64(&mut buf, value);
            buf[..width].to_vec()
        }
        Endianness::Big => {
            BigEndian::write_i64(&mut buf, value);
            buf[8 - width..].to_vec()
        }
    }
}

/// Folds up to 4 bytes into an `i32`, first byte least significant.
///
/// Bytes absent from a short input decode as 0, so partial encodings of
/// non-negative values round-trip.
///
/// # Errors
///
/// Returns an error if more than 4 bytes are given.
pub fn bytes_to_i32(bytes: &[u8]) -> Result<i32, Error> {
    if bytes.len() > 4 {
        return Err(Error::invalid_length("bytes_to_i32", 4, bytes.len()));
    }

    let mut value = 0u32;
    for (index, &byte) in bytes.iter().enumerate() {
        value |= (byte as u32) << (8 * index);
    }
    Ok(value as i32)
}

/// Folds up to 8 bytes into an `i64`, first byte least significant.
///
/// # Errors
///
/// Returns an error if more than 8 bytes are given.
pub fn bytes_to_i64(bytes: &[u8]) -> Result<i64, Error> {
    if bytes.len() > 8 {
        return Err(Error::invalid_length("bytes_to_i64", 8, bytes.len()));
    }

    let mut value = 0u64;
    for (index, &byte) in bytes.iter().enumerate() {
        value |= (byte as u64) << (8 * index);
    }
    Ok(value as i64)
}

/// Folds bytes into a `u32` most-significant-first.
///
/// The opposite convention from [`bytes_to_i32`]: the first byte carries the
/// highest magnitude. Input longer than 4 bytes wraps, shifting the oldest
/// bytes out; no error is raised.
pub fn fold_u32_be(bytes: &[u8]) -> u32 {
    let mut value = 0u32;
    for &byte in bytes {
        value = value.wrapping_shl(8) | byte as u32;
    }
    value
}

/// Encodes each element with [`i32_to_bytes`] and concatenates.
///
/// For [`Endianness::Little`] elements are concatenated in reverse iteration
/// order (the last element's bytes come first); for [`Endianness::Big`] in
/// forward order. Multi-word consumers rely on this layout, so it is part of
/// the wire contract.
pub fn i32_slice_to_bytes(values: &[i32], width: usize, endianness: Endianness) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * width);
    match endianness {
        Endianness::Little => {
            for &value in values.iter().rev() {
                bytes.extend_from_slice(&i32_to_bytes(value, width, endianness));
            }
        }
        Endianness::Big => {
            for &value in values {
                bytes.extend_from_slice(&i32_to_bytes(value, width, endianness));
            }
        }
    }
    bytes
}

/// Projects each element onto its least-significant byte, in order.
pub fn low_bytes(values: &[i32]) -> Vec<u8> {
    values.iter().map(|&value| value as u8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i32_to_bytes_single_byte() {
        assert_eq!(i32_to_bytes(0x12, 1, Endianness::Little), [0x12]);
        assert_eq!(i32_to_bytes(0x12, 1, Endianness::Big), [0x12]);
    }

    #[test]
    fn test_i32_to_bytes_full_width() {
        assert_eq!(
            i32_to_bytes(0x1234_5678, 4, Endianness::Little),
            [0x78, 0x56, 0x34, 0x12]
        );
        assert_eq!(
            i32_to_bytes(0x1234_5678, 4, Endianness::Big),
            [0x12, 0x34, 0x56, 0x78]
        );
    }

    #[test]
    fn test_i32_to_bytes_truncates_high_bytes() {
        // 0x12345678 does not fit in 2 bytes; the high bytes are dropped.
        assert_eq!(i32_to_bytes(0x1234_5678, 2, Endianness::Little), [0x78, 0x56]);
        assert_eq!(i32_to_bytes(0x1234_5678, 2, Endianness::Big), [0x56, 0x78]);
    }

    #[test]
    fn test_bytes_to_i32_folds_little_endian() {
        assert_eq!(bytes_to_i32(&[0x34, 0x12]).unwrap(), 0x1234);
        assert_eq!(bytes_to_i32(&[]).unwrap(), 0);
        assert_eq!(bytes_to_i32(&[0xFF, 0xFF, 0xFF, 0xFF]).unwrap(), -1);
    }

    #[test]
    fn test_bytes_to_i32_over_length() {
        let err = bytes_to_i32(&[0; 5]).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidLength);
    }

    #[test]
    fn test_i64_round_trip_full_width() {
        for value in [0i64, 1, -1, i64::MIN, i64::MAX, 0x0123_4567_89AB_CDEF] {
            let le = i64_to_bytes(value, 8, Endianness::Little);
            assert_eq!(bytes_to_i64(&le).unwrap(), value);
        }
    }

    #[test]
    fn test_bytes_to_i64_over_length() {
        let err = bytes_to_i64(&[0; 9]).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidLength);
    }

    #[test]
    fn test_fold_u32_be() {
        assert_eq!(fold_u32_be(&[]), 0);
        assert_eq!(fold_u32_be(&[0x12]), 0x12);
        assert_eq!(fold_u32_be(&[0x12, 0x34]), 0x1234);
        // A fifth byte shifts the first one out.
        assert_eq!(fold_u32_be(&[0xAA, 0x12, 0x34, 0x56, 0x78]), 0x1234_5678);
    }

    #[test]
    fn test_i32_slice_to_bytes_little_reverses_elements() {
        let bytes = i32_slice_to_bytes(&[0x1122, 0x3344], 2, Endianness::Little);
        assert_eq!(bytes, [0x44, 0x33, 0x22, 0x11]);
    }

    #[test]
    fn test_i32_slice_to_bytes_big_keeps_order() {
        let bytes = i32_slice_to_bytes(&[0x1122, 0x3344], 2, Endianness::Big);
        assert_eq!(bytes, [0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn test_low_bytes() {
        assert_eq!(low_bytes(&[0x11, 0x1FF, -1]), [0x11, 0xFF, 0xFF]);
    }
}
