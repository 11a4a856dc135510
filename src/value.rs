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
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::constants::*;

/// Object members in source order. Keys are `Value::String` when produced
/// by the parser; duplicate keys are kept.
pub type Object<'a> = Vec<(Value<'a>, Value<'a>)>;

/// Represents a parsed JSON value.
///
/// Strings hold the decoded bytes of the literal. A string without escape
/// sequences borrows its bytes from the input buffer; any other string owns
/// a decoded copy.
#[derive(Clone, Default, PartialEq)]
pub enum Value<'a> {
    /// Represents a JSON null value
    #[default]
    Null,
    /// Represents a JSON boolean value (true or false)
    Bool(bool),
    /// Represents a JSON number value
    Number(f64),
    /// Represents a JSON string value as decoded UTF-8 bytes
    String(Cow<'a, [u8]>),
    /// Represents a JSON array of values
    Array(Vec<Value<'a>>),
    /// Represents a JSON object as key-value pairs
    Object(Object<'a>),
}

/// The type tag of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JsonType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Display for JsonType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JsonType::Null => TYPE_NULL,
            JsonType::Boolean => TYPE_BOOLEAN,
            JsonType::Number => TYPE_NUMBER,
            JsonType::String => TYPE_STRING,
            JsonType::Array => TYPE_ARRAY,
            JsonType::Object => TYPE_OBJECT,
        };
        f.write_str(name)
    }
}

impl Debug for Value<'_> {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        match *self {
            Value::Null => formatter.debug_tuple("Null").finish(),
            Value::Bool(v) => formatter.debug_tuple("Bool").field(&v).finish(),
            Value::Number(v) => formatter.debug_tuple("Number").field(&v).finish(),
            Value::String(ref v) => formatter
                .debug_tuple("String")
                .field(&String::from_utf8_lossy(v))
                .finish(),
            Value::Array(ref v) => {
                formatter.write_str("Array(")?;
                Debug::fmt(v, formatter)?;
                formatter.write_str(")")
            }
            Value::Object(ref v) => {
                formatter.write_str("Object(")?;
                Debug::fmt(v, formatter)?;
                formatter.write_str(")")
            }
        }
    }
}

impl<'a> Value<'a> {
    pub fn json_type(&self) -> JsonType {
        match self {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Boolean,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    pub fn is_scalar(&self) -> bool {
        !self.is_array() && !self.is_object()
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_v))
    }

    pub fn as_object(&self) -> Option<&Object<'a>> {
        match self {
            Value::Object(ref obj) => Some(obj),
            _ => None,
        }
    }

    pub fn object_length(&self) -> Option<usize> {
        self.as_object().map(|obj| obj.len())
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_v))
    }

    pub fn as_array(&self) -> Option<&Vec<Value<'a>>> {
        match self {
            Value::Array(ref array) => Some(array),
            _ => None,
        }
    }

    pub fn array_length(&self) -> Option<usize> {
        self.as_array().map(|arr| arr.len())
    }

    /// Returns the array element at `index`, in source order.
    pub fn get_index(&self, index: usize) -> Option<&Value<'a>> {
        self.as_array().and_then(|arr| arr.get(index))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_v))
    }

    /// Returns the decoded bytes of a string value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Returns a string value as `&str` if its bytes are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|s| std::str::from_utf8(s).ok())
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Bool(_v))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    pub fn set_bool(&mut self, v: bool) {
        *self = Value::Bool(v);
    }

    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    pub fn set_string<S: Into<Cow<'a, [u8]>>>(&mut self, s: S) {
        *self = Value::String(s.into());
    }

    /// Looks up an object member by key bytes.
    ///
    /// Keys are compared byte for byte against their decoded form. When a
    /// key occurs more than once, the first member in source order wins.
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Option<&Value<'a>> {
        let key = key.as_ref();
        self.as_object()?
            .iter()
            .find(|(k, _)| k.as_bytes() == Some(key))
            .map(|(_, v)| v)
    }

    /// Looks up an object member by a string `Value` key.
    pub fn get_by_key(&self, key: &Value) -> Option<&Value<'a>> {
        key.as_bytes().and_then(|k| self.get(k))
    }

    /// Detaches the value from the input buffer, copying borrowed strings.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Null => Value::Null,
            Value::Bool(v) => Value::Bool(v),
            Value::Number(n) => Value::Number(n),
            Value::String(s) => Value::String(Cow::Owned(s.into_owned())),
            Value::Array(arr) => Value::Array(arr.into_iter().map(Value::into_owned).collect()),
            Value::Object(obj) => Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect(),
            ),
        }
    }
}
