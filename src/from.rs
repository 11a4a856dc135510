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

use core::iter::FromIterator;
use std::borrow::Cow;

use serde_json::Map as JsonMap;
use serde_json::Number as JsonNumber;
use serde_json::Value as JsonValue;

use crate::value::Object;
use crate::value::Value;

macro_rules! from_number {
    ($($ty:ident)*) => {
        $(
            impl<'a> From<$ty> for Value<'a> {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

from_number! {
    i8 i16 i32 i64 isize
    u8 u16 u32 u64 usize
    f32 f64
}

impl From<bool> for Value<'_> {
    fn from(f: bool) -> Self {
        Value::Bool(f)
    }
}

impl From<String> for Value<'_> {
    fn from(f: String) -> Self {
        Value::String(Cow::Owned(f.into_bytes()))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(f: &'a str) -> Self {
        Value::String(Cow::Borrowed(f.as_bytes()))
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(f: &'a [u8]) -> Self {
        Value::String(Cow::Borrowed(f))
    }
}

impl<'a> From<Cow<'a, [u8]>> for Value<'a> {
    fn from(f: Cow<'a, [u8]>) -> Self {
        Value::String(f)
    }
}

impl<'a> From<Object<'a>> for Value<'a> {
    fn from(o: Object<'a>) -> Self {
        Value::Object(o)
    }
}

impl<'a, T: Into<Value<'a>>> From<Vec<T>> for Value<'a> {
    fn from(f: Vec<T>) -> Self {
        Value::Array(f.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Into<Value<'a>>> FromIterator<T> for Value<'a> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a, K: Into<Value<'a>>, V: Into<Value<'a>>> FromIterator<(K, V)> for Value<'a> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<()> for Value<'_> {
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl From<&JsonValue> for Value<'_> {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(v) => Value::Bool(*v),
            JsonValue::Number(v) => match v.as_f64() {
                Some(n) => Value::Number(n),
                None => Value::Null,
            },
            JsonValue::String(v) => Value::String(Cow::Owned(v.clone().into_bytes())),
            JsonValue::Array(arr) => {
                let mut vals: Vec<Value> = Vec::with_capacity(arr.len());
                for val in arr {
                    vals.push(val.into());
                }
                Value::Array(vals)
            }
            JsonValue::Object(obj) => {
                let mut members = Object::with_capacity(obj.len());
                for (k, v) in obj.iter() {
                    members.push((k.clone().into(), v.into()));
                }
                Value::Object(members)
            }
        }
    }
}

impl From<JsonValue> for Value<'_> {
    fn from(value: JsonValue) -> Self {
        (&value).into()
    }
}

/// Strings are converted lossily from UTF-8. Of duplicate object keys, the
/// last member wins.
impl<'a> From<Value<'a>> for JsonValue {
    fn from(value: Value<'a>) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(v) => JsonValue::Bool(v),
            Value::Number(n) => match JsonNumber::from_f64(n) {
                Some(n) => JsonValue::Number(n),
                None => JsonValue::Null,
            },
            Value::String(s) => JsonValue::String(String::from_utf8_lossy(&s).into_owned()),
            Value::Array(arr) => JsonValue::Array(arr.into_iter().map(Into::into).collect()),
            Value::Object(obj) => {
                let mut map = JsonMap::with_capacity(obj.len());
                for (k, v) in obj {
                    let key = match k {
                        Value::String(s) => String::from_utf8_lossy(&s).into_owned(),
                        other => JsonValue::from(other).to_string(),
                    };
                    map.insert(key, v.into());
                }
                JsonValue::Object(map)
            }
        }
    }
}
