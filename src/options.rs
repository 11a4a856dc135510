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

use crate::constants::DEFAULT_MAX_DEPTH;
use crate::constants::DEFAULT_MAX_INPUT_SIZE;

/// Limits applied while parsing JSON text.
///
/// The parser walks nested arrays and objects with native recursion, so
/// `max_depth` bounds the stack usage of a single parse. `max_input_size`
/// lets callers reject oversized documents before any work is done.
///
/// # Default
///
/// `max_depth` is 128 and `max_input_size` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of nested arrays and objects. `[[]]` has depth 2.
    pub max_depth: usize,
    /// Maximum input length in bytes, counted up to the terminator.
    pub max_input_size: usize,
}

impl ParseOptions {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_max_input_size(mut self, max_input_size: usize) -> Self {
        self.max_input_size = max_input_size;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
