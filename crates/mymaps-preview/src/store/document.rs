//! Firestore REST wire types and typed field access.
//!
//! Firestore wraps every field in a typed envelope (`{"stringValue": "..."}`,
//! `{"integerValue": "4"}`, ...). The accessors here flatten those envelopes
//! with fixed defaults so callers never touch the raw shape.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single Firestore document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full resource name (`projects/.../documents/{collection}/{id}`).
    #[serde(default)]
    pub name: String,
    /// Field values keyed by field name.
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

/// A typed Firestore value. Exactly one member is set on the wire; members
/// this gateway never reads (timestamps, geo points, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    /// 64-bit integers travel as decimal strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integer_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean_value: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_value: Option<ArrayValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_value: Option<MapValue>,
}

/// Firestore array envelope. An empty array omits `values` entirely.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<Value>,
}

/// Firestore map envelope.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MapValue {
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

impl Value {
    /// A string value, as used in query filters.
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            string_value: Some(value.into()),
            ..Self::default()
        }
    }
}

impl Document {
    /// Trailing path segment of the resource name.
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }

    /// String field, or `""` when absent or not a string.
    pub fn string(&self, key: &str) -> &str {
        self.fields
            .get(key)
            .and_then(|v| v.string_value.as_deref())
            .unwrap_or_default()
    }

    /// Integer field parsed from its decimal string, or `0` when absent or
    /// unparseable.
    pub fn integer(&self, key: &str) -> i64 {
        self.fields
            .get(key)
            .and_then(|v| v.integer_value.as_deref())
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// String entries of an array field, skipping empty and non-string entries.
    pub fn string_list(&self, key: &str) -> Vec<String> {
        self.fields
            .get(key)
            .and_then(|v| v.array_value.as_ref())
            .map(|array| {
                array
                    .values
                    .iter()
                    .filter_map(|v| v.string_value.as_deref())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}
