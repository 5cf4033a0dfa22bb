//! conjson transform engine - Direction-aware JSON key rewriting
//!
//! This crate rewrites object member names inside serialized JSON without
//! parsing the document, and with no I/O dependencies. It includes:
//!
//! - The marshal/unmarshal [`Direction`] flag
//! - The key matcher and replace engine ([`replace_keys`], [`find_keys`])
//! - The [`Transform`] trait and closure adapter ([`from_fn`])
//! - Naming-convention transforms ([`ConventionalKeys`], [`CamelCaseKeys`],
//!   [`ValidIdentifierKeys`])
//! - Direction combinators ([`OnlyForDirection`], [`AlwaysAsDirection`],
//!   [`ReverseDirection`])
//! - The pipeline runner ([`apply_transforms`], [`Pipeline`])
//!
//! Every byte outside a member name is preserved, including whitespace, so a
//! pretty-printed document stays pretty-printed.
//!
//! ```rust
//! use conjson_transform::{apply_transforms, ConventionalKeys, Direction};
//!
//! let encoded = apply_transforms(
//!     br#"{"createdAt": "2015-11-17"}"#,
//!     Direction::Marshal,
//!     &[ConventionalKeys::new()],
//! );
//! assert_eq!(encoded, br#"{"created_at": "2015-11-17"}"#);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod combinators;
pub mod conventions;
pub mod direction;
pub mod keys;
pub mod pipeline;
pub mod transform;

// Re-export commonly used types
pub use combinators::{
    always_as_direction, only_for_direction, reverse_direction, AlwaysAsDirection,
    OnlyForDirection, ReverseDirection,
};
pub use conventions::{CamelCaseKeys, ConventionalKeys, ValidIdentifierKeys};
pub use direction::Direction;
pub use keys::{find_keys, replace_keys, KeySpan};
pub use pipeline::{apply_transforms, Pipeline};
pub use transform::{from_fn, FnTransform, SharedTransform, Transform, TransformExt};
