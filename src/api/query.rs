//! Query-string handling for endpoint parameters.
//!
//! Values flatten to key-value pairs before percent-encoding: lists repeat
//! the key, nested objects use `outer[inner]` keys, and dates serialize as
//! RFC 3339 with millisecond precision.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Date(DateTime<Utc>),
    List(Vec<QueryValue>),
    Object(BTreeMap<String, QueryValue>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for QueryValue {
    fn from(value: DateTime<Utc>) -> Self {
        QueryValue::Date(value)
    }
}

/// Flattens structured values into the key-value pairs that go on the wire.
pub fn flatten_query(pairs: &[(String, QueryValue)]) -> Vec<(String, String)> {
    let mut flat = Vec::new();
    for (key, value) in pairs {
        flatten_into(key, value, &mut flat);
    }
    flat
}

fn flatten_into(key: &str, value: &QueryValue, out: &mut Vec<(String, String)>) {
    match value {
        QueryValue::Str(s) => out.push((key.to_string(), s.clone())),
        QueryValue::Int(i) => out.push((key.to_string(), i.to_string())),
        QueryValue::Bool(b) => out.push((key.to_string(), b.to_string())),
        QueryValue::Date(d) => out.push((
            key.to_string(),
            d.to_rfc3339_opts(SecondsFormat::Millis, true),
        )),
        QueryValue::List(items) => {
            for item in items {
                flatten_into(key, item, out);
            }
        }
        QueryValue::Object(fields) => {
            for (name, field) in fields {
                flatten_into(&format!("{}[{}]", key, name), field, out);
            }
        }
    }
}

pub fn encode_query(pairs: &[(String, QueryValue)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in flatten_query(pairs) {
        serializer.append_pair(&key, &value);
    }
    serializer.finish()
}

pub fn decode_query(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}
