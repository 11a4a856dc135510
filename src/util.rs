// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::constants::*;
use super::error::Error;
use super::error::ParseErrorCode;

#[allow(clippy::zero_prefixed_literal)]
static HEX: [u8; 256] = {
    const __: u8 = 255; // not a hex digit
    [
        //   1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 0
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 1
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 2
        00, 01, 02, 03, 04, 05, 06, 07, 08, 09, __, __, __, __, __, __, // 3
        __, 10, 11, 12, 13, 14, 15, __, __, __, __, __, __, __, __, __, // 4
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 5
        __, 10, 11, 12, 13, 14, 15, __, __, __, __, __, __, __, __, __, // 6
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 7
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 8
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 9
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // A
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // B
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // C
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // D
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // E
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // F
    ]
};

/// Returns the byte at `idx`, or the `\0` terminator past the end of `buf`.
#[inline]
pub(crate) fn byte_at(buf: &[u8], idx: usize) -> u8 {
    match buf.get(idx) {
        Some(c) => *c,
        None => b'\0',
    }
}

/// Decode the escape sequence following a backslash.
///
/// `idx` points at the character right after the backslash and is advanced
/// past the whole sequence, including the second half of a surrogate pair.
/// The decoded bytes are appended to `out`.
pub(crate) fn parse_escaped(buf: &[u8], idx: &mut usize, out: &mut Vec<u8>) -> Result<(), Error> {
    let byte = byte_at(buf, *idx);
    match byte {
        b'\\' => out.push(BS),
        b'"' => out.push(QU),
        b'/' => out.push(SD),
        b'b' => out.push(BB),
        b'f' => out.push(FF),
        b'n' => out.push(NN),
        b'r' => out.push(RR),
        b't' => out.push(TT),
        b'u' => {
            *idx += 1;
            let code_point = parse_unicode_escape(buf, idx)?;
            encode_utf8(code_point, *idx, out)?;
            return Ok(());
        }
        _ => {
            return Err(Error::Syntax(
                ParseErrorCode::InvalidStringEscape,
                *idx,
            ))
        }
    }
    *idx += 1;
    Ok(())
}

/// Parse the hex digits of a `\u` escape into a code point.
///
/// Non-BMP characters are encoded as a sequence of two hex escapes,
/// representing UTF-16 surrogates; the pair is combined here.
fn parse_unicode_escape(buf: &[u8], idx: &mut usize) -> Result<u32, Error> {
    let start = *idx;
    let n1 = decode_hex_escape(buf, idx)?;
    match n1 {
        HIGH_SURROGATE_MIN..=HIGH_SURROGATE_MAX => {
            if byte_at(buf, *idx) != b'\\' || byte_at(buf, *idx + 1) != b'u' {
                return Err(Error::Syntax(
                    ParseErrorCode::InvalidUnicodeSurrogate,
                    *idx,
                ));
            }
            *idx += 2;
            let lower_start = *idx;
            let n2 = decode_hex_escape(buf, idx)?;
            if !(LOW_SURROGATE_MIN..=LOW_SURROGATE_MAX).contains(&n2) {
                return Err(Error::Syntax(
                    ParseErrorCode::InvalidUnicodeSurrogate,
                    lower_start,
                ));
            }

            #[allow(clippy::precedence)]
            let n = (((n1 - HIGH_SURROGATE_MIN) as u32) << 10 | (n2 - LOW_SURROGATE_MIN) as u32)
                + 0x1_0000;
            Ok(n)
        }
        // Low surrogate without preceding high surrogate
        LOW_SURROGATE_MIN..=LOW_SURROGATE_MAX => Err(Error::Syntax(
            ParseErrorCode::InvalidUnicodeSurrogate,
            start,
        )),
        n => Ok(n as u32),
    }
}

#[inline]
fn encode_utf8(code_point: u32, idx: usize, out: &mut Vec<u8>) -> Result<(), Error> {
    match char::from_u32(code_point) {
        Some(c) => {
            let mut utf8 = [0u8; 4];
            out.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
            Ok(())
        }
        None => Err(Error::Syntax(
            ParseErrorCode::InvalidUnicodeSurrogate,
            idx,
        )),
    }
}

#[inline]
fn decode_hex_val(val: u8) -> Option<u16> {
    let n = HEX[val as usize] as u16;
    if n == 255 {
        None
    } else {
        Some(n)
    }
}

#[inline]
fn decode_hex_escape(buf: &[u8], idx: &mut usize) -> Result<u16, Error> {
    let mut n = 0;
    for _ in 0..UNICODE_LEN {
        match decode_hex_val(byte_at(buf, *idx)) {
            Some(hex) => {
                n = (n << 4) + hex;
                *idx += 1;
            }
            None => {
                return Err(Error::Syntax(ParseErrorCode::InvalidUnicodeHex, *idx));
            }
        }
    }
    Ok(n)
}
