//! One-shot marshaling and unmarshaling through a pipeline
//!
//! Encoding serializes first and then runs the pipeline for
//! [`Direction::Marshal`]. Decoding runs the pipeline for
//! [`Direction::Unmarshal`] and then deserializes. A serialization error
//! short-circuits: the pipeline never sees a partial document.

use crate::error::Result;
use conjson_transform::{Direction, Pipeline};
use serde::de::{DeserializeOwned, DeserializeSeed, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;
use tracing::debug;

/// Serialize `value` and rewrite its keys for marshaling
pub fn to_vec<T>(value: &T, pipeline: &Pipeline) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let encoded = serde_json::to_vec(value)?;
    Ok(marshal_bytes(&encoded, pipeline))
}

/// Like [`to_vec`], pretty-printed with two-space indentation
pub fn to_vec_pretty<T>(value: &T, pipeline: &Pipeline) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let encoded = serde_json::to_vec_pretty(value)?;
    Ok(marshal_bytes(&encoded, pipeline))
}

/// Like [`to_vec`], returning a `String`
pub fn to_string<T>(value: &T, pipeline: &Pipeline) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(String::from_utf8(to_vec(value, pipeline)?)?)
}

/// Like [`to_vec_pretty`], returning a `String`
pub fn to_string_pretty<T>(value: &T, pipeline: &Pipeline) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(String::from_utf8(to_vec_pretty(value, pipeline)?)?)
}

/// Rewrite the keys of `data` for unmarshaling and deserialize it
pub fn from_slice<T>(data: &[u8], pipeline: &Pipeline) -> Result<T>
where
    T: DeserializeOwned,
{
    let decoded = unmarshal_bytes(data, pipeline);
    Ok(serde_json::from_slice(&decoded)?)
}

/// Like [`from_slice`], reading from a string
pub fn from_str<T>(data: &str, pipeline: &Pipeline) -> Result<T>
where
    T: DeserializeOwned,
{
    from_slice(data.as_bytes(), pipeline)
}

pub(crate) fn marshal_bytes(encoded: &[u8], pipeline: &Pipeline) -> Vec<u8> {
    debug!(
        len = encoded.len(),
        transforms = pipeline.len(),
        "marshaling document"
    );
    pipeline.run(encoded, Direction::Marshal)
}

pub(crate) fn unmarshal_bytes(data: &[u8], pipeline: &Pipeline) -> Vec<u8> {
    debug!(
        len = data.len(),
        transforms = pipeline.len(),
        "unmarshaling document"
    );
    pipeline.run(data, Direction::Unmarshal)
}

/// Pairs a value with a pipeline so it marshals with rewritten keys
///
/// A `Marshaler` is itself [`Serialize`], so it can sit inside a larger
/// structure handed to `serde_json`; only the wrapped value's keys are
/// rewritten.
///
/// ```rust
/// use conjson::{ConventionalKeys, Marshaler, Pipeline};
/// use serde_json::json;
///
/// let pipeline = Pipeline::new().with(ConventionalKeys::new());
/// let inner = json!({"createdAt": 1});
/// let outer = json!({"someKey": Marshaler::new(&inner, pipeline)});
///
/// assert_eq!(outer.to_string(), r#"{"someKey":{"created_at":1}}"#);
/// ```
pub struct Marshaler<'a, T: ?Sized> {
    value: &'a T,
    pipeline: Pipeline,
}

impl<'a, T: ?Sized + Serialize> Marshaler<'a, T> {
    /// Wrap `value`
    pub fn new(value: &'a T, pipeline: Pipeline) -> Self {
        Self { value, pipeline }
    }

    /// Serialize the value and rewrite its keys
    pub fn marshal_json(&self) -> Result<Vec<u8>> {
        to_vec(self.value, &self.pipeline)
    }
}

impl<T: ?Sized + Serialize> Serialize for Marshaler<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::Error;

        let encoded = self.marshal_json().map_err(S::Error::custom)?;
        let text = String::from_utf8(encoded).map_err(S::Error::custom)?;
        let raw = RawValue::from_string(text).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<T: ?Sized> fmt::Debug for Marshaler<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Marshaler")
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}

/// Pairs a target with a pipeline so it unmarshals from rewritten keys
///
/// As a [`DeserializeSeed`] it reads one raw JSON value, which works with
/// `serde_json` deserializers only.
pub struct Unmarshaler<'a, T> {
    target: &'a mut T,
    pipeline: Pipeline,
}

impl<'a, T: DeserializeOwned> Unmarshaler<'a, T> {
    /// Wrap `target`
    pub fn new(target: &'a mut T, pipeline: Pipeline) -> Self {
        Self { target, pipeline }
    }

    /// Rewrite the keys of `data` and deserialize it into the target
    ///
    /// The target is left untouched when deserialization fails.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
        *self.target = from_slice(data, &self.pipeline)?;
        Ok(())
    }
}

impl<'de, T: DeserializeOwned> DeserializeSeed<'de> for Unmarshaler<'_, T> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(
        mut self,
        deserializer: D,
    ) -> std::result::Result<Self::Value, D::Error> {
        use serde::de::{Deserialize, Error};

        let raw = Box::<RawValue>::deserialize(deserializer)?;
        self.unmarshal_json(raw.get().as_bytes())
            .map_err(D::Error::custom)
    }
}

impl<T> fmt::Debug for Unmarshaler<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unmarshaler")
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}
