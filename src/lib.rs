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

//! Bidirectional conversions between primitive values and raw byte
//! sequences.
//!
//! The byte layouts produced here (bit order, endianness, compact-float
//! format) are the wire contract other components match bit for bit:
//!
//! - [`bits`] packs boolean flags onto bytes most-significant-bit first.
//! - [`int`] serializes 32/64-bit integers at a configurable width and
//!   [`Endianness`], truncating silently when the value does not fit.
//! - [`float`] decodes a 4-byte decimal-exponent float that is not IEEE754.
//! - [`hex`] renders byte sequences as hex strings for display and
//!   source-literal generation.
//!
//! Every operation is a pure function over its arguments; there is no
//! shared state and calls may run concurrently without coordination.
//! Over-length input to the fixed-capacity decoders is an [`Error`] of kind
//! [`ErrorKind::InvalidLength`]; all other out-of-range conditions degrade
//! silently (encode truncation, the compact float's `0.0` default) because
//! deployed peers depend on that behavior.
//!
//! # Examples
//!
//! ```
//! use bitwire::Endianness;
//!
//! let bytes = bitwire::int::i32_to_bytes(0x1234, 2, Endianness::Little);
//! assert_eq!(bytes, [0x34, 0x12]);
//! assert_eq!(bitwire::int::bytes_to_i32(&bytes)?, 0x1234);
//! # Ok::<(), bitwire::Error>(())
//! ```

pub mod bits;
pub mod error;
pub mod float;
pub mod hex;
pub mod int;

pub use error::Error;
pub use error::ErrorKind;
pub use int::Endianness;
