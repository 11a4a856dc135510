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

use std::fmt::Display;
use std::fmt::Formatter;

/// The kind of syntax failure reported by the parser.
///
/// Exactly one code is reported per failed parse: the first violation
/// met while scanning the input from left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseErrorCode {
    /// The input holds only whitespace where a value was required.
    ExpectValue,
    /// A literal or number does not follow the JSON grammar.
    InvalidValue,
    /// Something other than whitespace follows the root value.
    RootNotSingular,
    /// A number overflows the range of `f64`.
    NumberTooBig,
    /// A string is not closed before the end of input.
    MissQuotationMark,
    /// A backslash is followed by a character that is not a valid escape.
    InvalidStringEscape,
    /// A string contains an unescaped control character.
    InvalidStringChar,
    /// A `\u` escape forms an unpaired or mismatched UTF-16 surrogate.
    InvalidUnicodeSurrogate,
    /// A `\u` escape is not followed by four hex digits.
    InvalidUnicodeHex,
    /// An array element is followed by neither `,` nor `]`.
    MissCommaOrSquareBracket,
    /// An object member does not start with a string key.
    MissKey,
    /// An object key is not followed by `:`.
    MissColon,
    /// An object member is followed by neither `,` nor `}`.
    MissCommaOrCurlyBracket,
    /// Arrays and objects are nested deeper than the configured limit.
    NestingTooDeep,
    /// The input is longer than the configured limit.
    InputTooLarge,
}

impl Display for ParseErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            ParseErrorCode::ExpectValue => f.write_str("expected value"),
            ParseErrorCode::InvalidValue => f.write_str("invalid value"),
            ParseErrorCode::RootNotSingular => f.write_str("trailing characters after root value"),
            ParseErrorCode::NumberTooBig => f.write_str("number too big"),
            ParseErrorCode::MissQuotationMark => f.write_str("missing closing quotation mark"),
            ParseErrorCode::InvalidStringEscape => f.write_str("invalid escape"),
            ParseErrorCode::InvalidStringChar => f.write_str("control character in string"),
            ParseErrorCode::InvalidUnicodeSurrogate => {
                f.write_str("invalid unicode surrogate pair")
            }
            ParseErrorCode::InvalidUnicodeHex => f.write_str("invalid unicode hex escape"),
            ParseErrorCode::MissCommaOrSquareBracket => f.write_str("expected `,` or `]`"),
            ParseErrorCode::MissKey => f.write_str("expected string key"),
            ParseErrorCode::MissColon => f.write_str("expected `:`"),
            ParseErrorCode::MissCommaOrCurlyBracket => f.write_str("expected `,` or `}`"),
            ParseErrorCode::NestingTooDeep => f.write_str("nesting too deep"),
            ParseErrorCode::InputTooLarge => f.write_str("input too large"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// An error that occurred while parsing JSON text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A syntax error with the byte offset at which it was detected.
    Syntax(ParseErrorCode, usize),
}

impl Error {
    pub fn code(&self) -> ParseErrorCode {
        match self {
            Error::Syntax(code, _) => *code,
        }
    }

    /// Byte offset into the input where the failure was detected.
    pub fn position(&self) -> usize {
        match self {
            Error::Syntax(_, pos) => *pos,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Syntax(code, pos) => write!(f, "{}, pos {}", code, pos),
        }
    }
}

impl std::error::Error for Error {}
