//! conjson - serde_json adapters with key-name rewriting
//!
//! Rust types keep their own field naming while the JSON on the wire follows
//! a different convention. Values are serialized with `serde_json` and the
//! resulting document runs through a [`Pipeline`] of key transforms for
//! [`Direction::Marshal`]; incoming documents run through the same pipeline
//! for [`Direction::Unmarshal`] before they are deserialized.
//!
//! - One-shot helpers: [`to_vec`], [`to_string`], [`from_slice`], [`from_str`]
//! - Wrappers: [`Marshaler`] (also [`serde::Serialize`]) and [`Unmarshaler`]
//!   (also [`serde::de::DeserializeSeed`])
//! - Streams: [`Encoder`] and [`Decoder`]
//! - Runtime-described pipelines: [`config::PipelineConfig`]
//!
//! ```rust
//! use conjson::{CamelCaseKeys, ConventionalKeys, Direction, Pipeline, TransformExt};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Resource {
//!     image_url: String,
//!     is_active: bool,
//! }
//!
//! let pipeline = Pipeline::new()
//!     .with(CamelCaseKeys::new(true).only_for(Direction::Unmarshal))
//!     .with(ConventionalKeys::new());
//!
//! let resource = Resource { image_url: "u".into(), is_active: true };
//! let json = conjson::to_string(&resource, &pipeline)?;
//! assert_eq!(json, r#"{"image_url":"u","is_active":true}"#);
//!
//! let back: Resource = conjson::from_str(r#"{"imageURL":"u","is_active":true}"#, &pipeline)?;
//! assert_eq!(back, resource);
//! # Ok::<(), conjson::ConjsonError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod marshal;

pub use conjson_transform as transform;

// Re-export commonly used types
pub use config::{EncoderOptions, PipelineConfig, TransformSpec};
pub use conjson_transform::{
    apply_transforms, from_fn, CamelCaseKeys, ConventionalKeys, Direction, Pipeline,
    SharedTransform, Transform, TransformExt, ValidIdentifierKeys,
};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{ConjsonError, Result};
pub use marshal::{
    from_slice, from_str, to_string, to_string_pretty, to_vec, to_vec_pretty, Marshaler,
    Unmarshaler,
};
