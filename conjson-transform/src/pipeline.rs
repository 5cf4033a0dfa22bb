//! Ordered transform pipelines

use crate::transform::SharedTransform;
use crate::{Direction, Transform};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Run `transforms` over a copy of `data`, left to right, for `direction`
///
/// The caller's buffer is never modified. An empty transform list returns
/// an unmodified copy.
pub fn apply_transforms<T: Transform>(
    data: &[u8],
    direction: Direction,
    transforms: &[T],
) -> Vec<u8> {
    trace!(
        %direction,
        transforms = transforms.len(),
        input_len = data.len(),
        "applying transforms"
    );

    let mut transformed = data.to_vec();
    for transform in transforms {
        transformed = transform.apply(transformed, direction);
    }
    transformed
}

/// An ordered, shareable sequence of transforms
///
/// Cloning a pipeline is cheap: the transforms themselves are shared.
#[derive(Clone, Default)]
pub struct Pipeline {
    transforms: Vec<SharedTransform>,
}

impl Pipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transform, builder style
    pub fn with<T: Transform + 'static>(mut self, transform: T) -> Self {
        self.push(transform);
        self
    }

    /// Append a transform
    pub fn push<T: Transform + 'static>(&mut self, transform: T) {
        self.transforms.push(Arc::new(transform));
    }

    /// Append an already shared transform
    pub fn push_shared(&mut self, transform: SharedTransform) {
        self.transforms.push(transform);
    }

    /// Number of transforms
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Whether the pipeline has no transforms
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// The transforms, in application order
    pub fn transforms(&self) -> &[SharedTransform] {
        &self.transforms
    }

    /// Run the pipeline over a copy of `data`
    pub fn run(&self, data: &[u8], direction: Direction) -> Vec<u8> {
        apply_transforms(data, direction, &self.transforms)
    }
}

impl Transform for Pipeline {
    fn apply(&self, data: Vec<u8>, direction: Direction) -> Vec<u8> {
        self.transforms
            .iter()
            .fold(data, |data, transform| transform.apply(data, direction))
    }

    fn name(&self) -> &str {
        "pipeline"
    }
}

impl FromIterator<SharedTransform> for Pipeline {
    fn from_iter<I: IntoIterator<Item = SharedTransform>>(iter: I) -> Self {
        Self {
            transforms: iter.into_iter().collect(),
        }
    }
}

impl Extend<SharedTransform> for Pipeline {
    fn extend<I: IntoIterator<Item = SharedTransform>>(&mut self, iter: I) {
        self.transforms.extend(iter);
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.transforms.iter().map(|t| t.name()))
            .finish()
    }
}
