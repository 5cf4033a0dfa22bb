//! Serializable pipeline and encoder configuration
//!
//! A pipeline can be described in JSON and built at runtime:
//!
//! ```rust
//! use conjson::config::PipelineConfig;
//! use conjson::Direction;
//!
//! let config = PipelineConfig::from_json_str(
//!     r#"{"transforms": [
//!         {"type": "only_for_direction", "direction": "unmarshal",
//!          "transform": {"type": "camel_case_keys", "lower_repeated_caps": true}},
//!         {"type": "conventional_keys"}
//!     ]}"#,
//! )?;
//! let pipeline = config.build()?;
//!
//! assert_eq!(pipeline.len(), 2);
//! assert_eq!(pipeline.run(br#"{"userID":1}"#, Direction::Unmarshal), br#"{"userId":1}"#);
//! # Ok::<(), conjson::ConjsonError>(())
//! ```

use crate::error::{ConjsonError, Result};
use conjson_transform::{
    AlwaysAsDirection, CamelCaseKeys, ConventionalKeys, Direction, OnlyForDirection, Pipeline,
    ReverseDirection, SharedTransform, TransformExt, ValidIdentifierKeys,
};
use serde::{Deserialize, Serialize};

/// Deepest allowed nesting of combinator specs
pub const MAX_NESTING_DEPTH: usize = 16;

/// Description of one transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformSpec {
    /// [`ConventionalKeys`]
    ConventionalKeys,
    /// [`CamelCaseKeys`]
    CamelCaseKeys {
        /// Title-case runs of capitals
        #[serde(default)]
        lower_repeated_caps: bool,
    },
    /// [`ValidIdentifierKeys`]
    ValidIdentifierKeys,
    /// [`OnlyForDirection`] around `transform`
    OnlyForDirection {
        /// Direction the inner transform runs for
        direction: Direction,
        /// Inner transform
        transform: Box<TransformSpec>,
    },
    /// [`AlwaysAsDirection`] around `transform`
    AlwaysAsDirection {
        /// Direction the inner transform always sees
        direction: Direction,
        /// Inner transform
        transform: Box<TransformSpec>,
    },
    /// [`ReverseDirection`] around `transform`
    ReverseDirection {
        /// Inner transform
        transform: Box<TransformSpec>,
    },
}

impl TransformSpec {
    /// Build the described transform
    pub fn build(&self) -> Result<SharedTransform> {
        self.build_at(0)
    }

    fn build_at(&self, depth: usize) -> Result<SharedTransform> {
        if depth >= MAX_NESTING_DEPTH {
            return Err(ConjsonError::InvalidConfig(format!(
                "transform nesting exceeds {MAX_NESTING_DEPTH} levels"
            )));
        }

        let built = match self {
            Self::ConventionalKeys => ConventionalKeys::new().shared(),
            Self::CamelCaseKeys {
                lower_repeated_caps,
            } => CamelCaseKeys::new(*lower_repeated_caps).shared(),
            Self::ValidIdentifierKeys => ValidIdentifierKeys::new().shared(),
            Self::OnlyForDirection {
                direction,
                transform,
            } => OnlyForDirection::new(*direction, transform.build_at(depth + 1)?).shared(),
            Self::AlwaysAsDirection {
                direction,
                transform,
            } => AlwaysAsDirection::new(*direction, transform.build_at(depth + 1)?).shared(),
            Self::ReverseDirection { transform } => {
                ReverseDirection::new(transform.build_at(depth + 1)?).shared()
            }
        };
        Ok(built)
    }
}

/// Ordered list of transform descriptions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Transforms in application order
    #[serde(default)]
    pub transforms: Vec<TransformSpec>,
}

impl PipelineConfig {
    /// Parse a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the described pipeline
    pub fn build(&self) -> Result<Pipeline> {
        self.transforms.iter().map(TransformSpec::build).collect()
    }
}

/// Output options for [`crate::Encoder`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncoderOptions {
    /// Indent per nesting level; compact output when `None`
    #[serde(default)]
    pub indent: Option<String>,
}

impl EncoderOptions {
    /// Options for indented output
    pub fn indented(indent: impl Into<String>) -> Self {
        Self {
            indent: Some(indent.into()),
        }
    }

    /// Check that the options produce valid JSON
    pub fn validate(&self) -> Result<()> {
        match &self.indent {
            Some(indent) if !indent.bytes().all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r')) => {
                Err(ConjsonError::InvalidConfig(format!(
                    "indent {indent:?} contains non-whitespace characters"
                )))
            }
            _ => Ok(()),
        }
    }
}
