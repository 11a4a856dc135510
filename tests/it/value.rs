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

use serde_json::json;
use serde_json::Value as JsonValue;
use strict_json::parse_value;
use strict_json::JsonType;
use strict_json::Value;

#[test]
fn test_access_after_parse() {
    let val = parse_value(br#"{"n": null, "f": false, "t": true, "i": 123, "s": "abc", "a": [1, 2, 3], "o": {"x": 1}}"#)
        .unwrap();
    assert_eq!(val.object_length(), Some(7));

    let types: Vec<_> = val
        .as_object()
        .unwrap()
        .iter()
        .map(|(_, v)| v.json_type())
        .collect();
    assert_eq!(
        types,
        vec![
            JsonType::Null,
            JsonType::Boolean,
            JsonType::Boolean,
            JsonType::Number,
            JsonType::String,
            JsonType::Array,
            JsonType::Object,
        ]
    );

    assert!(val.get("n").unwrap().is_null());
    assert_eq!(val.get("f").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(val.get("t").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(val.get("i").and_then(|v| v.as_f64()), Some(123.0));
    assert_eq!(val.get("s").and_then(|v| v.as_str()), Some("abc"));
    assert_eq!(val.get("a").and_then(|v| v.array_length()), Some(3));
    assert_eq!(
        val.get("o").and_then(|v| v.get("x")).and_then(|v| v.as_f64()),
        Some(1.0)
    );

    // Wrong-variant access yields nothing.
    assert_eq!(val.get("s").and_then(|v| v.as_f64()), None);
    assert_eq!(val.get("i").and_then(|v| v.as_bytes()), None);
    assert_eq!(val.get("a").and_then(|v| v.get("x")), None);
    assert_eq!(val.get("o").and_then(|v| v.get_index(0)), None);
    assert_eq!(val.get("missing"), None);
}

#[test]
fn test_access_number() {
    let val = parse_value(br#"{"price": 12.788, "qty": -3}"#).unwrap();
    let price = val.get("price").unwrap();
    assert!(price.is_number());
    assert_eq!(price.as_f64(), Some(12.788));
    assert_eq!(val.get(b"qty").and_then(|v| v.as_f64()), Some(-3.0));
}

#[test]
fn test_lookup_key_bytes() {
    let val = parse_value(br#"{"a": 1, "ab": 2, "a\u0000b": 3, "": 4}"#).unwrap();
    assert_eq!(val.get("a").and_then(|v| v.as_f64()), Some(1.0));
    assert_eq!(val.get("ab").and_then(|v| v.as_f64()), Some(2.0));
    assert_eq!(val.get(b"a\0b").and_then(|v| v.as_f64()), Some(3.0));
    assert_eq!(val.get("").and_then(|v| v.as_f64()), Some(4.0));
    // A prefix is not a match.
    assert_eq!(val.get("a\0"), None);
    assert_eq!(val.get("abc"), None);
}

#[test]
fn test_lookup_first_duplicate() {
    let val = parse_value(br#"{"k": "first", "x": null, "k": "second"}"#).unwrap();
    assert_eq!(val.object_length(), Some(3));
    assert_eq!(val.get("k").and_then(|v| v.as_str()), Some("first"));
    assert_eq!(
        val.get_by_key(&Value::from("k")).and_then(|v| v.as_str()),
        Some("first")
    );
    assert_eq!(val.get_by_key(&Value::Null), None);
}

#[test]
fn test_setters() {
    let mut val = parse_value(br#"[0, "text", null]"#).unwrap();
    if let Value::Array(ref mut arr) = val {
        arr[0].set_string(b"now a string".as_slice());
        arr[1].set_number(2.5);
        arr[2].set_bool(true);
    }
    assert_eq!(val.get_index(0).and_then(|v| v.as_str()), Some("now a string"));
    assert_eq!(val.get_index(1).and_then(|v| v.as_f64()), Some(2.5));
    assert_eq!(val.get_index(2).and_then(|v| v.as_bool()), Some(true));

    val.set_null();
    assert!(val.is_null());
    assert_eq!(val.array_length(), None);
}

#[test]
fn test_into_owned_outlives_input() {
    let owned: Value<'static> = {
        let buf = String::from(r#"{"key": ["plain", "tab\t"]}"#);
        let val = parse_value(buf.as_bytes()).unwrap();
        val.into_owned()
    };
    let arr = owned.get("key").unwrap();
    assert!(matches!(arr.get_index(0), Some(Value::String(Cow::Owned(_)))));
    assert_eq!(arr.get_index(1).and_then(|v| v.as_str()), Some("tab\t"));
}

#[test]
fn test_to_serde_json() {
    let text = r#"{"a": [1, 2.5, "xé"], "b": {"c": null}, "d": true}"#;
    let val = parse_value(text.as_bytes()).unwrap();
    let json = JsonValue::from(val);
    assert_eq!(
        json,
        json!({"a": [1.0, 2.5, "x\u{e9}"], "b": {"c": null}, "d": true})
    );

    // Invalid UTF-8 is replaced, the last duplicate key wins.
    let val = parse_value(b"{\"k\": \"\xFF\", \"k\": 2}").unwrap();
    let json = JsonValue::from(val);
    assert_eq!(json, json!({"k": 2.0}));

    let val = parse_value(b"\"\xFF\"").unwrap();
    assert_eq!(JsonValue::from(val), json!("\u{FFFD}"));
}

#[test]
fn test_from_serde_json() {
    let json = json!({"z": [true, null], "a": "s", "n": -4});
    let val = Value::from(&json);
    assert_eq!(val.get("n").and_then(|v| v.as_f64()), Some(-4.0));
    assert_eq!(val.get("a").and_then(|v| v.as_str()), Some("s"));

    // With `preserve_order` the member order of the source map is kept.
    #[cfg(feature = "preserve_order")]
    {
        let keys: Vec<_> = val
            .as_object()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["z", "a", "n"]);
    }

    let text = serde_json::to_string(&json).unwrap();
    assert_eq!(parse_value(text.as_bytes()).unwrap(), val);
}

#[test]
fn test_escape_sequences() {
    let val = parse_value(br#"["\"", "\\", "\/", "\b", "\f", "\n", "\r", "\t"]"#).unwrap();
    let decoded: Vec<_> = val
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_bytes().unwrap().to_vec())
        .collect();
    assert_eq!(
        decoded,
        vec![
            b"\"".to_vec(),
            b"\\".to_vec(),
            b"/".to_vec(),
            vec![0x08],
            vec![0x0C],
            b"\n".to_vec(),
            b"\r".to_vec(),
            b"\t".to_vec(),
        ]
    );
}

#[test]
fn test_type_names() {
    let names: Vec<_> = ["null", "true", "1", "\"s\"", "[]", "{}"]
        .iter()
        .map(|s| parse_value(s.as_bytes()).unwrap().json_type().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["null", "boolean", "number", "string", "array", "object"]
    );
}
