//! Purpose: The dynamic JSON wrapper: owned documents and borrowed views.
//! Exports: `Json` (owned), `JsonRef` (borrowed navigation view).
//! Role: The whole accessor surface; construction, navigation, coercion, encoding.
//! Invariants: Navigation never fails; misses collapse to the null-ish placeholder.
//! Invariants: Coercion accessors always propagate type mismatches to the caller.
//! Invariants: Mutation exists only on `Json`; views are read-only by construction.

use crate::core::error::{Error, ErrorKind, Target};
use crate::core::loader;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::path::Path;

/// An owned JSON document with schema-free navigation and coercion.
///
/// Holds one generic `serde_json::Value` of any shape. Reading goes through
/// [`JsonRef`] views produced by `get`/`get_index`/`get_path`, which chain
/// without intermediate error checks:
///
/// ```
/// use loosejson::Json;
///
/// let doc = Json::from_bytes(br#"{"a": {"b": [1, 2, 3]}}"#).unwrap();
/// assert_eq!(doc.get_path(&["a", "b"]).get_index(1).int64().unwrap(), 2);
/// assert!(doc.get("missing").get("deeper").is_null());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Json {
    data: Value,
}

/// A borrowed view of one sub-value inside a [`Json`] tree.
///
/// `None` inside is the null-ish placeholder a failed lookup collapses to.
/// Views share the underlying value; nothing is copied during navigation.
#[derive(Clone, Copy, Debug)]
pub struct JsonRef<'a> {
    data: Option<&'a Value>,
}

impl Json {
    /// Decodes `bytes` as JSON. The codec error is preserved as the source.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let data: Value = serde_json::from_slice(bytes)
            .map_err(|err| Error::new(ErrorKind::Decode).with_source(err))?;
        Ok(Self { data })
    }

    /// Reads `path`, strips full-line `#` comments and blank lines, and
    /// decodes the surviving content as JSON. See
    /// [`read_commented_json`](crate::api::read_commented_json) for the exact
    /// line handling and its limitations.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let content = loader::read_commented_json(path.as_ref())?;
        Self::from_bytes(content.as_bytes())
            .map_err(|err| err.with_path(path.as_ref()))
    }

    /// Wraps an already-held generic value. No validation is performed.
    pub fn from_value(data: Value) -> Self {
        Self { data }
    }

    /// Replaces the held value, keeping the wrapper.
    pub fn set_data(&mut self, data: Value) -> &mut Self {
        self.data = data;
        self
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn into_value(self) -> Value {
        self.data
    }

    /// A borrowed view of the whole document, for chaining reads.
    pub fn view(&self) -> JsonRef<'_> {
        JsonRef {
            data: Some(&self.data),
        }
    }

    /// Inserts or overwrites `key` in the held mapping. A `Json` argument is
    /// unwrapped to its raw value first, so wrappers never nest inside the
    /// tree. Silent no-op when the held value is not a mapping.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        if let Value::Object(map) = &mut self.data {
            map.insert(key.into(), value.into());
        }
    }

    /// Removes `key` from the held mapping if present; no-op otherwise.
    /// Returns the receiver for chaining.
    pub fn delete(&mut self, key: &str) -> &mut Self {
        if let Value::Object(map) = &mut self.data {
            map.remove(key);
        }
        self
    }

    pub fn get(&self, key: &str) -> JsonRef<'_> {
        self.view().get(key)
    }

    pub fn get_index(&self, index: usize) -> JsonRef<'_> {
        self.view().get_index(index)
    }

    pub fn get_path(&self, path: &[&str]) -> JsonRef<'_> {
        self.view().get_path(path)
    }

    pub fn check_get(&self, key: &str) -> Option<JsonRef<'_>> {
        self.view().check_get(key)
    }

    pub fn is_null(&self) -> bool {
        self.view().is_null()
    }

    pub fn count(&self) -> Result<usize, Error> {
        self.view().count()
    }

    /// Encodes the held value back to JSON bytes with the decoding codec.
    /// Round-trips structurally with [`Json::from_bytes`], not byte-for-byte.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        self.view().encode()
    }

    /// Encodes to a JSON string; fails with [`ErrorKind::NullData`] when the
    /// held value is null-ish.
    pub fn stringify(&self) -> Result<String, Error> {
        self.view().stringify()
    }

    pub fn as_map(&self) -> Result<&Map<String, Value>, Error> {
        self.view().as_map()
    }

    pub fn as_array(&self) -> Result<&Vec<Value>, Error> {
        self.view().as_array()
    }

    pub fn as_bool(&self) -> Result<bool, Error> {
        self.view().as_bool()
    }

    pub fn as_str(&self) -> Result<&str, Error> {
        self.view().as_str()
    }

    pub fn as_bytes(&self) -> Result<&[u8], Error> {
        self.view().as_bytes()
    }

    pub fn float64(&self) -> Result<f64, Error> {
        self.view().float64()
    }

    pub fn int(&self) -> Result<isize, Error> {
        self.view().int()
    }

    pub fn int64(&self) -> Result<i64, Error> {
        self.view().int64()
    }

    pub fn string_array(&self) -> Result<Vec<String>, Error> {
        self.view().string_array()
    }

    pub fn int_array(&self) -> Result<Vec<isize>, Error> {
        self.view().int_array()
    }

    pub fn int64_array(&self) -> Result<Vec<i64>, Error> {
        self.view().int64_array()
    }

    pub fn must_map(&self) -> Map<String, Value> {
        self.view().must_map()
    }

    pub fn must_map_or(&self, default: Map<String, Value>) -> Map<String, Value> {
        self.view().must_map_or(default)
    }

    pub fn must_array(&self) -> Vec<Value> {
        self.view().must_array()
    }

    pub fn must_array_or(&self, default: Vec<Value>) -> Vec<Value> {
        self.view().must_array_or(default)
    }

    pub fn must_string(&self) -> String {
        self.view().must_string()
    }

    pub fn must_string_or(&self, default: impl Into<String>) -> String {
        self.view().must_string_or(default)
    }

    pub fn must_int(&self) -> isize {
        self.view().must_int()
    }

    pub fn must_int_or(&self, default: isize) -> isize {
        self.view().must_int_or(default)
    }

    pub fn must_int64(&self) -> i64 {
        self.view().must_int64()
    }

    pub fn must_int64_or(&self, default: i64) -> i64 {
        self.view().must_int64_or(default)
    }

    pub fn must_float64(&self) -> f64 {
        self.view().must_float64()
    }

    pub fn must_float64_or(&self, default: f64) -> f64 {
        self.view().must_float64_or(default)
    }
}

impl From<Value> for Json {
    fn from(data: Value) -> Self {
        Self::from_value(data)
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        json.data
    }
}

impl Serialize for Json {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Json {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

impl<'a> JsonRef<'a> {
    fn wrap(data: Option<&'a Value>) -> Self {
        Self { data }
    }

    /// The underlying sub-value, or `None` for the null-ish placeholder.
    pub fn value(&self) -> Option<&'a Value> {
        self.data
    }

    /// True for JSON null, for the placeholder a failed lookup produced, and
    /// for a present mapping with zero entries. Empty arrays and empty
    /// strings are not null-ish.
    pub fn is_null(&self) -> bool {
        match self.data {
            None | Some(Value::Null) => true,
            Some(Value::Object(map)) => map.is_empty(),
            Some(_) => false,
        }
    }

    /// Mapping lookup. An absent key, a non-mapping receiver, and a null-ish
    /// receiver all collapse to the placeholder, so chains never need
    /// per-step checks.
    pub fn get(&self, key: &str) -> JsonRef<'a> {
        Self::wrap(
            self.data
                .and_then(Value::as_object)
                .and_then(|map| map.get(key)),
        )
    }

    /// Sequence lookup. Out-of-range indices are absent, not errors.
    pub fn get_index(&self, index: usize) -> JsonRef<'a> {
        Self::wrap(
            self.data
                .and_then(Value::as_array)
                .and_then(|items| items.get(index)),
        )
    }

    /// Applies `get` for each key in order, stopping at the first miss.
    /// An empty path returns the receiver unchanged.
    pub fn get_path(&self, path: &[&str]) -> JsonRef<'a> {
        let mut current = self.data;
        for key in path {
            current = current
                .and_then(Value::as_object)
                .and_then(|map| map.get(*key));
            if current.is_none() {
                break;
            }
        }
        Self::wrap(current)
    }

    /// Same lookup as [`JsonRef::get`] but with explicit presence reporting:
    /// a key holding JSON null yields `Some` (present), a missing key or
    /// non-mapping receiver yields `None`. This is the one way to tell a
    /// null-valued key apart from an absent one.
    pub fn check_get(&self, key: &str) -> Option<JsonRef<'a>> {
        self.data
            .and_then(Value::as_object)
            .and_then(|map| map.get(key))
            .map(|value| Self::wrap(Some(value)))
    }

    /// Number of entries in the held mapping. Propagates the mapping
    /// coercion error for anything else; does not count array elements.
    pub fn count(&self) -> Result<usize, Error> {
        Ok(self.as_map()?.len())
    }

    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self.data.unwrap_or(&Value::Null))
            .map_err(|err| Error::new(ErrorKind::Decode).with_message("encode").with_source(err))
    }

    pub fn stringify(&self) -> Result<String, Error> {
        if self.is_null() {
            return Err(Error::new(ErrorKind::NullData).with_message("data is null"));
        }
        serde_json::to_string(self.data.unwrap_or(&Value::Null))
            .map_err(|err| Error::new(ErrorKind::Decode).with_message("encode").with_source(err))
    }

    pub fn as_map(&self) -> Result<&'a Map<String, Value>, Error> {
        match self.data {
            Some(Value::Object(map)) => Ok(map),
            _ => Err(Error::type_mismatch(Target::Map)),
        }
    }

    pub fn as_array(&self) -> Result<&'a Vec<Value>, Error> {
        match self.data {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(Error::type_mismatch(Target::Array)),
        }
    }

    pub fn as_bool(&self) -> Result<bool, Error> {
        match self.data {
            Some(Value::Bool(value)) => Ok(*value),
            _ => Err(Error::type_mismatch(Target::Bool)),
        }
    }

    pub fn as_str(&self) -> Result<&'a str, Error> {
        match self.data {
            Some(Value::String(text)) => Ok(text),
            _ => Err(Error::type_mismatch(Target::String)),
        }
    }

    /// The UTF-8 bytes of a held string.
    pub fn as_bytes(&self) -> Result<&'a [u8], Error> {
        match self.data {
            Some(Value::String(text)) => Ok(text.as_bytes()),
            _ => Err(Error::type_mismatch(Target::Bytes)),
        }
    }

    pub fn float64(&self) -> Result<f64, Error> {
        self.number()
            .and_then(Number::as_f64)
            .ok_or_else(|| Error::type_mismatch(Target::Float64))
    }

    /// Bridges any JSON number back to a platform-width integer; floats are
    /// truncated toward zero.
    pub fn int(&self) -> Result<isize, Error> {
        self.number()
            .and_then(number_as_i64)
            .map(|value| value as isize)
            .ok_or_else(|| Error::type_mismatch(Target::Int))
    }

    /// Same bridging as [`JsonRef::int`], widened to 64-bit.
    pub fn int64(&self) -> Result<i64, Error> {
        self.number()
            .and_then(number_as_i64)
            .ok_or_else(|| Error::type_mismatch(Target::Int64))
    }

    /// A held array of strings. Any non-string element fails the whole
    /// conversion; partial results are discarded.
    pub fn string_array(&self) -> Result<Vec<String>, Error> {
        let items = self
            .as_array()
            .map_err(|_| Error::type_mismatch(Target::StringArray))?;
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::String(text) => out.push(text.clone()),
                _ => return Err(Error::type_mismatch(Target::String)),
            }
        }
        Ok(out)
    }

    pub fn int64_array(&self) -> Result<Vec<i64>, Error> {
        let items = self
            .as_array()
            .map_err(|_| Error::type_mismatch(Target::Int64Array))?;
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            match item.as_number().and_then(number_as_i64) {
                Some(value) => out.push(value),
                None => return Err(Error::type_mismatch(Target::Float64)),
            }
        }
        Ok(out)
    }

    pub fn int_array(&self) -> Result<Vec<isize>, Error> {
        let items = self
            .as_array()
            .map_err(|_| Error::type_mismatch(Target::IntArray))?;
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            match item.as_number().and_then(number_as_i64) {
                Some(value) => out.push(value as isize),
                None => return Err(Error::type_mismatch(Target::Float64)),
            }
        }
        Ok(out)
    }

    /// The held mapping, or an empty one on mismatch. The `must_` family is
    /// the one sanctioned error-swallowing path; everything else propagates.
    pub fn must_map(&self) -> Map<String, Value> {
        self.must_map_or(Map::new())
    }

    pub fn must_map_or(&self, default: Map<String, Value>) -> Map<String, Value> {
        match self.as_map() {
            Ok(map) => map.clone(),
            Err(_) => default,
        }
    }

    pub fn must_array(&self) -> Vec<Value> {
        self.must_array_or(Vec::new())
    }

    pub fn must_array_or(&self, default: Vec<Value>) -> Vec<Value> {
        match self.as_array() {
            Ok(items) => items.clone(),
            Err(_) => default,
        }
    }

    pub fn must_string(&self) -> String {
        self.must_string_or("")
    }

    pub fn must_string_or(&self, default: impl Into<String>) -> String {
        match self.as_str() {
            Ok(text) => text.to_string(),
            Err(_) => default.into(),
        }
    }

    pub fn must_int(&self) -> isize {
        self.must_int_or(0)
    }

    pub fn must_int_or(&self, default: isize) -> isize {
        self.int().unwrap_or(default)
    }

    pub fn must_int64(&self) -> i64 {
        self.must_int64_or(0)
    }

    pub fn must_int64_or(&self, default: i64) -> i64 {
        self.int64().unwrap_or(default)
    }

    pub fn must_float64(&self) -> f64 {
        self.must_float64_or(0.0)
    }

    pub fn must_float64_or(&self, default: f64) -> f64 {
        self.float64().unwrap_or(default)
    }

    /// Materializes the view into an owned document (clones the sub-value).
    pub fn to_json(&self) -> Json {
        Json::from_value(self.data.cloned().unwrap_or(Value::Null))
    }

    /// Deserializes the viewed sub-value into `T` via serde.
    pub fn decode_into<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let value = self.data.cloned().unwrap_or(Value::Null);
        serde_json::from_value(value)
            .map_err(|err| Error::new(ErrorKind::Decode).with_source(err))
    }

    fn number(&self) -> Option<&'a Number> {
        match self.data {
            Some(Value::Number(number)) => Some(number),
            _ => None,
        }
    }
}

impl<'a> From<&'a Json> for JsonRef<'a> {
    fn from(json: &'a Json) -> Self {
        json.view()
    }
}

// Truncates toward zero for floats; u64 values above i64::MAX wrap as a cast.
fn number_as_i64(number: &Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }
    if let Some(value) = number.as_u64() {
        return Some(value as i64);
    }
    number.as_f64().map(|value| value as i64)
}
