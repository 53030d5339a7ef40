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

//! Hex-string formatting of byte sequences.
//!
//! Formatting only; nothing here parses hex back into bytes.

use std::fmt::Write as _;

/// Bytes per space-separated group in [`to_display_hex`] output.
const DISPLAY_GROUP_BYTES: usize = 4;
/// Characters per line in [`to_display_hex`] output, separators included.
const DISPLAY_LINE_CHARS: usize = 45;

/// Per-byte template applied by [`to_hex_string`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexFormat {
    /// Text emitted before each byte's hex digits.
    pub prefix: &'static str,
    /// Emit the hex digits in uppercase.
    pub uppercase: bool,
    /// Separator appended after each byte and stripped from the tail.
    pub separator: Option<char>,
}

impl HexFormat {
    /// Bare two-digit uppercase hex, no prefix, no separator.
    pub const PLAIN: HexFormat = HexFormat {
        prefix: "",
        uppercase: true,
        separator: None,
    };
}

impl Default for HexFormat {
    /// The source-literal format: `0x12,0xAB` style.
    fn default() -> Self {
        HexFormat {
            prefix: "0x",
            uppercase: true,
            separator: Some(','),
        }
    }
}

/// Applies `format` to every byte and concatenates, stripping the trailing
/// separator. Empty input yields an empty string.
///
/// # Examples
///
/// ```
/// use bitwire::hex::{to_hex_string, HexFormat};
///
/// assert_eq!(to_hex_string(&[0x12, 0xAB], HexFormat::default()), "0x12,0xAB");
/// assert_eq!(to_hex_string(&[], HexFormat::default()), "");
/// ```
pub fn to_hex_string(bytes: &[u8], format: HexFormat) -> String {
    let mut out = String::with_capacity(bytes.len() * (format.prefix.len() + 3));
    for &byte in bytes {
        out.push_str(format.prefix);
        if format.uppercase {
            let _ = write!(out, "{byte:02X}");
        } else {
            let _ = write!(out, "{byte:02x}");
        }
        if let Some(separator) = format.separator {
            out.push(separator);
        }
    }

    if let Some(separator) = format.separator {
        while out.ends_with(separator) {
            out.pop();
        }
    }
    out
}

/// Formats bytes for display: two-digit uppercase hex, a space after every
/// 4 bytes, wrapped to 45-character lines (separators counted).
pub fn to_display_hex(bytes: &[u8]) -> String {
    let mut grouped = String::with_capacity(bytes.len() * 2 + bytes.len() / DISPLAY_GROUP_BYTES);
    for (index, &byte) in bytes.iter().enumerate() {
        if index > 0 && index % DISPLAY_GROUP_BYTES == 0 {
            grouped.push(' ');
        }
        let _ = write!(grouped, "{byte:02X}");
    }

    let mut out = String::with_capacity(grouped.len() + grouped.len() / DISPLAY_LINE_CHARS);
    for (index, c) in grouped.chars().enumerate() {
        if index > 0 && index % DISPLAY_LINE_CHARS == 0 {
            out.push('\n');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        assert_eq!(to_hex_string(&[0x01], HexFormat::default()), "0x01");
        assert_eq!(
            to_hex_string(&[0x01, 0xFF, 0x00], HexFormat::default()),
            "0x01,0xFF,0x00"
        );
    }

    #[test]
    fn test_plain_format() {
        assert_eq!(to_hex_string(&[0xDE, 0xAD], HexFormat::PLAIN), "DEAD");
    }

    #[test]
    fn test_lowercase_format() {
        let format = HexFormat {
            prefix: "",
            uppercase: false,
            separator: Some(' '),
        };
        assert_eq!(to_hex_string(&[0xDE, 0xAD], format), "de ad");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_hex_string(&[], HexFormat::default()), "");
        assert_eq!(to_display_hex(&[]), "");
    }

    #[test]
    fn test_display_hex_groups() {
        assert_eq!(to_display_hex(&[0xAB; 4]), "ABABABAB");
        assert_eq!(to_display_hex(&[0xAB; 5]), "ABABABAB AB");
        assert_eq!(to_display_hex(&[0xAB; 8]), "ABABABAB ABABABAB");
    }

    #[test]
    fn test_display_hex_wraps_lines() {
        // 24 bytes -> 48 hex chars + 5 spaces = 53 chars, wrapped at 45.
        let out = to_display_hex(&[0x11; 24]);
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 45);
        assert_eq!(lines[1].len(), 8);
    }
}
