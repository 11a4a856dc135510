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

//! `strict-json` parses JSON text into an in-memory value tree, following
//! the [RFC 8259](https://www.rfc-editor.org/rfc/rfc8259) grammar exactly and
//! reporting the precise reason an invalid input was rejected.
//!
//! ## Features
//!
//! - Strict grammar: no leading `+`, no leading zeros, no trailing commas, no
//!   unquoted or non-string keys, no unescaped control characters.
//! - Precise errors: every failure carries a [`ParseErrorCode`] and the byte
//!   offset at which it was detected.
//! - UTF-16 surrogate pairs in `\u` escapes are combined and re-encoded as
//!   UTF-8; unpaired surrogates are rejected.
//! - Bounded recursion: nesting depth is capped by [`ParseOptions`].
//! - Order preserving objects: members keep their source order and
//!   duplicate keys are kept.
//!
//! ## Example
//!
//! ```rust
//! use strict_json::parse_value;
//! use strict_json::ParseErrorCode;
//!
//! let value = parse_value(br#"{"name": "strict-json", "tags": [1, 2.5, null]}"#).unwrap();
//! assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("strict-json"));
//! assert_eq!(value.get("tags").and_then(|v| v.array_length()), Some(3));
//!
//! let err = parse_value(b"[1, 2").unwrap_err();
//! assert_eq!(err.code(), ParseErrorCode::MissCommaOrSquareBracket);
//! ```

#![allow(clippy::uninlined_format_args)]

mod constants;
mod error;
mod from;
mod options;
mod parser;
mod util;
mod value;

pub use error::Error;
pub use error::ParseErrorCode;
pub use error::Result;
pub use options::ParseOptions;
pub use parser::parse_value;
pub use parser::parse_value_with_options;
pub use value::*;
