//! The transform trait and its adapters
//!
//! A [`Transform`] maps a document buffer to a new document buffer for a given
//! [`Direction`]. Transforms are stateless, so one instance may be shared by
//! any number of pipelines and threads.
//!
//! # Example
//!
//! ```rust
//! use conjson_transform::{from_fn, Direction, Transform, TransformExt};
//!
//! let shout = from_fn(|data: Vec<u8>, _direction: Direction| data.to_ascii_uppercase());
//! let on_encode = shout.only_for(Direction::Marshal);
//!
//! assert_eq!(on_encode.apply(b"abc".to_vec(), Direction::Marshal), b"ABC");
//! assert_eq!(on_encode.apply(b"abc".to_vec(), Direction::Unmarshal), b"abc");
//! ```

use crate::combinators::{AlwaysAsDirection, OnlyForDirection, ReverseDirection};
use crate::Direction;
use std::fmt;
use std::sync::Arc;

/// A direction-aware rewrite of a document buffer
pub trait Transform: Send + Sync {
    /// Transform `data` for `direction`
    ///
    /// The buffer is owned by the running pipeline, never by the caller, so
    /// implementations are free to modify it in place and return it.
    fn apply(&self, data: Vec<u8>, direction: Direction) -> Vec<u8>;

    /// Short name used in diagnostics
    fn name(&self) -> &str {
        "transform"
    }
}

/// A transform shared behind an `Arc`, as stored by pipelines
pub type SharedTransform = Arc<dyn Transform>;

impl<T: Transform + ?Sized> Transform for &T {
    fn apply(&self, data: Vec<u8>, direction: Direction) -> Vec<u8> {
        (**self).apply(data, direction)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Transform + ?Sized> Transform for Box<T> {
    fn apply(&self, data: Vec<u8>, direction: Direction) -> Vec<u8> {
        (**self).apply(data, direction)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Transform + ?Sized> Transform for Arc<T> {
    fn apply(&self, data: Vec<u8>, direction: Direction) -> Vec<u8> {
        (**self).apply(data, direction)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Transform backed by a closure, see [`from_fn`]
#[derive(Clone)]
pub struct FnTransform<F> {
    f: F,
}

impl<F> Transform for FnTransform<F>
where
    F: Fn(Vec<u8>, Direction) -> Vec<u8> + Send + Sync,
{
    fn apply(&self, data: Vec<u8>, direction: Direction) -> Vec<u8> {
        (self.f)(data, direction)
    }

    fn name(&self) -> &str {
        "fn"
    }
}

impl<F> fmt::Debug for FnTransform<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTransform").finish_non_exhaustive()
    }
}

/// Create a transform from a closure
pub fn from_fn<F>(f: F) -> FnTransform<F>
where
    F: Fn(Vec<u8>, Direction) -> Vec<u8> + Send + Sync,
{
    FnTransform { f }
}

/// Combinator methods available on every transform
pub trait TransformExt: Transform + Sized {
    /// Run only when the invocation direction is `direction`
    fn only_for(self, direction: Direction) -> OnlyForDirection<Self> {
        OnlyForDirection::new(direction, self)
    }

    /// Always run as though the direction were `direction`
    fn always_as(self, direction: Direction) -> AlwaysAsDirection<Self> {
        AlwaysAsDirection::new(direction, self)
    }

    /// Run with the opposite of the invocation direction
    fn reversed(self) -> ReverseDirection<Self> {
        ReverseDirection::new(self)
    }

    /// Move into a [`SharedTransform`]
    fn shared(self) -> SharedTransform
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<T: Transform> TransformExt for T {}
