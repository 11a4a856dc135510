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

use std::borrow::Cow;

use log::debug;
use log::trace;

use super::constants::*;
use super::error::Error;
use super::error::ParseErrorCode;
use super::error::Result;
use super::options::ParseOptions;
use super::util::byte_at;
use super::util::parse_escaped;
use super::value::Object;
use super::value::Value;

/// Parse JSON text to a `Value` with the default [`ParseOptions`].
///
/// The input ends at the end of `buf` or at the first NUL byte, whichever
/// comes first, so NUL-terminated buffers can be passed unchanged. Exactly
/// one value, optionally surrounded by whitespace, must be present.
///
/// Strings without escape sequences borrow from `buf`.
pub fn parse_value(buf: &[u8]) -> Result<Value<'_>> {
    parse_value_with_options(buf, &ParseOptions::default())
}

/// Parse JSON text to a `Value` with explicit limits.
pub fn parse_value_with_options<'a>(buf: &'a [u8], options: &ParseOptions) -> Result<Value<'a>> {
    let len = buf.iter().position(|c| *c == b'\0').unwrap_or(buf.len());
    if len > options.max_input_size {
        debug!(
            "reject JSON text of {} bytes, limit is {}",
            len, options.max_input_size
        );
        return Err(Error::Syntax(
            ParseErrorCode::InputTooLarge,
            options.max_input_size,
        ));
    }

    let mut parser = Parser::new(&buf[..len], options.max_depth);
    match parser.parse() {
        Ok(value) => {
            trace!("parsed JSON {} from {} bytes", value.json_type(), len);
            Ok(value)
        }
        Err(err) => {
            debug!("failed to parse JSON text: {}", err);
            Err(err)
        }
    }
}

struct Parser<'a> {
    buf: &'a [u8],
    idx: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn new(buf: &'a [u8], max_depth: usize) -> Parser<'a> {
        Self {
            buf,
            idx: 0,
            depth: 0,
            max_depth,
        }
    }

    fn parse(&mut self) -> Result<Value<'a>> {
        self.skip_whitespace();
        let val = self.parse_json_value()?;
        self.skip_whitespace();
        if self.idx < self.buf.len() {
            return Err(self.error(ParseErrorCode::RootNotSingular));
        }
        Ok(val)
    }

    fn parse_json_value(&mut self) -> Result<Value<'a>> {
        match self.peek() {
            b'n' => self.parse_json_literal(NULL, Value::Null),
            b't' => self.parse_json_literal(TRUE, Value::Bool(true)),
            b'f' => self.parse_json_literal(FALSE, Value::Bool(false)),
            b'"' => self.parse_json_string().map(Value::String),
            b'[' => self.parse_json_array(),
            b'{' => self.parse_json_object(),
            b'\0' => Err(self.error(ParseErrorCode::ExpectValue)),
            _ => self.parse_json_number(),
        }
    }

    /// Returns the current byte, or `\0` at the end of input.
    #[inline]
    fn peek(&self) -> u8 {
        byte_at(self.buf, self.idx)
    }

    #[inline]
    fn check_next(&self, c: u8) -> bool {
        self.peek() == c
    }

    #[inline]
    fn check_next_either(&self, c1: u8, c2: u8) -> bool {
        let v = self.peek();
        v == c1 || v == c2
    }

    #[inline]
    fn step_digits(&mut self) -> usize {
        let mut len = 0;
        while self.peek().is_ascii_digit() {
            len += 1;
            self.step();
        }
        len
    }

    #[inline]
    fn step(&mut self) {
        self.idx += 1;
    }

    #[inline]
    fn step_by(&mut self, n: usize) {
        self.idx += n;
    }

    fn error(&self, code: ParseErrorCode) -> Error {
        let pos = self.idx;
        Error::Syntax(code, pos)
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), b' ' | b'\t' | b'\n' | b'\r') {
            self.step();
        }
    }

    fn enter_container(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            debug!("JSON nesting exceeds depth limit {}", self.max_depth);
            return Err(self.error(ParseErrorCode::NestingTooDeep));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_json_literal(&mut self, literal: &[u8], value: Value<'a>) -> Result<Value<'a>> {
        if !self.buf[self.idx..].starts_with(literal) {
            return Err(self.error(ParseErrorCode::InvalidValue));
        }
        self.step_by(literal.len());
        Ok(value)
    }

    /// Parse a JSON number.
    ///
    /// The lexical span is validated against the RFC 8259 grammar before it
    /// is converted, so the converter never sees a leading `+`, a bare `.`,
    /// or spellings such as `inf` and `nan`. A leading `0` ends the integer
    /// part: in `0123` only `0` is consumed.
    fn parse_json_number(&mut self) -> Result<Value<'a>> {
        let start_idx = self.idx;

        if self.check_next(b'-') {
            self.step();
        }

        if self.check_next(b'0') {
            self.step();
        } else {
            if !matches!(self.peek(), b'1'..=b'9') {
                return Err(self.error(ParseErrorCode::InvalidValue));
            }
            self.step_digits();
        }

        if self.check_next(b'.') {
            self.step();
            if self.step_digits() == 0 {
                return Err(self.error(ParseErrorCode::InvalidValue));
            }
        }

        if self.check_next_either(b'E', b'e') {
            self.step();
            if self.check_next_either(b'+', b'-') {
                self.step();
            }
            if self.step_digits() == 0 {
                return Err(self.error(ParseErrorCode::InvalidValue));
            }
        }

        let s = &self.buf[start_idx..self.idx];
        let n: f64 = fast_float2::parse(s)
            .map_err(|_| Error::Syntax(ParseErrorCode::InvalidValue, start_idx))?;
        // Underflow rounds to zero and is accepted, overflow is not.
        if n.is_infinite() {
            return Err(Error::Syntax(ParseErrorCode::NumberTooBig, start_idx));
        }
        Ok(Value::Number(n))
    }

    /// Parse a JSON string literal into its decoded bytes.
    ///
    /// Runs of plain bytes are copied lazily: as long as no escape sequence
    /// has been seen the result borrows from the input.
    fn parse_json_string(&mut self) -> Result<Cow<'a, [u8]>> {
        let buf = self.buf;
        // Skip the opening quote
        self.step();

        let mut run_start = self.idx;
        let mut decoded: Option<Vec<u8>> = None;
        loop {
            match self.peek() {
                b'"' => {
                    let tail = &buf[run_start..self.idx];
                    self.step();
                    let val = match decoded {
                        Some(mut data) => {
                            data.extend_from_slice(tail);
                            Cow::Owned(data)
                        }
                        None => Cow::Borrowed(tail),
                    };
                    return Ok(val);
                }
                b'\\' => {
                    let data = decoded.get_or_insert_with(Vec::new);
                    data.extend_from_slice(&buf[run_start..self.idx]);
                    self.step();
                    parse_escaped(buf, &mut self.idx, data)?;
                    run_start = self.idx;
                }
                b'\0' => return Err(self.error(ParseErrorCode::MissQuotationMark)),
                c if c < 0x20 => return Err(self.error(ParseErrorCode::InvalidStringChar)),
                _ => self.step(),
            }
        }
    }

    /// Parse a JSON array. Trailing commas are rejected by the element
    /// parser, which finds `]` where a value is expected.
    fn parse_json_array(&mut self) -> Result<Value<'a>> {
        self.enter_container()?;
        // Skip the opening bracket
        self.step();
        self.skip_whitespace();

        let mut values = Vec::new();
        if self.check_next(b']') {
            self.step();
        } else {
            loop {
                self.skip_whitespace();
                let value = self.parse_json_value()?;
                values.push(value);

                self.skip_whitespace();
                match self.peek() {
                    b',' => self.step(),
                    b']' => {
                        self.step();
                        break;
                    }
                    _ => return Err(self.error(ParseErrorCode::MissCommaOrSquareBracket)),
                }
            }
        }
        self.depth -= 1;
        Ok(Value::Array(values))
    }

    /// Parse a JSON object. Members keep their source order and duplicate
    /// keys are kept as separate members.
    fn parse_json_object(&mut self) -> Result<Value<'a>> {
        self.enter_container()?;
        // Skip the opening brace
        self.step();
        self.skip_whitespace();

        let mut obj = Object::new();
        if self.check_next(b'}') {
            self.step();
        } else {
            loop {
                self.skip_whitespace();
                if !self.check_next(b'"') {
                    return Err(self.error(ParseErrorCode::MissKey));
                }
                let key = self.parse_json_string()?;

                self.skip_whitespace();
                if !self.check_next(b':') {
                    return Err(self.error(ParseErrorCode::MissColon));
                }
                self.step();

                self.skip_whitespace();
                let value = self.parse_json_value()?;
                obj.push((Value::String(key), value));

                self.skip_whitespace();
                match self.peek() {
                    b',' => self.step(),
                    b'}' => {
                        self.step();
                        break;
                    }
                    _ => return Err(self.error(ParseErrorCode::MissCommaOrCurlyBracket)),
                }
            }
        }
        self.depth -= 1;
        Ok(Value::Object(obj))
    }
}
