//! Direction combinators
//!
//! Decorators that change how an inner transform sees the invocation
//! direction, without touching the inner transform itself.

use crate::{Direction, Transform};

/// Runs the inner transform only for one direction
#[derive(Debug, Clone)]
pub struct OnlyForDirection<T> {
    only: Direction,
    inner: T,
}

impl<T> OnlyForDirection<T> {
    /// Wrap `inner` so it only runs for `only`
    pub fn new(only: Direction, inner: T) -> Self {
        Self { only, inner }
    }
}

impl<T: Transform> Transform for OnlyForDirection<T> {
    fn apply(&self, data: Vec<u8>, direction: Direction) -> Vec<u8> {
        if direction == self.only {
            self.inner.apply(data, direction)
        } else {
            data
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Runs the inner transform as though the direction were fixed
#[derive(Debug, Clone)]
pub struct AlwaysAsDirection<T> {
    always: Direction,
    inner: T,
}

impl<T> AlwaysAsDirection<T> {
    /// Wrap `inner` so it always sees `always`
    pub fn new(always: Direction, inner: T) -> Self {
        Self { always, inner }
    }
}

impl<T: Transform> Transform for AlwaysAsDirection<T> {
    fn apply(&self, data: Vec<u8>, _direction: Direction) -> Vec<u8> {
        self.inner.apply(data, self.always)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Runs the inner transform with the opposite direction
#[derive(Debug, Clone)]
pub struct ReverseDirection<T> {
    inner: T,
}

impl<T> ReverseDirection<T> {
    /// Wrap `inner` so it sees the reversed direction
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: Transform> Transform for ReverseDirection<T> {
    fn apply(&self, data: Vec<u8>, direction: Direction) -> Vec<u8> {
        self.inner.apply(data, !direction)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Run `transform` only when the direction is `only`
pub fn only_for_direction<T: Transform>(only: Direction, transform: T) -> OnlyForDirection<T> {
    OnlyForDirection::new(only, transform)
}

/// Run `transform` as though the direction were always `always`
pub fn always_as_direction<T: Transform>(always: Direction, transform: T) -> AlwaysAsDirection<T> {
    AlwaysAsDirection::new(always, transform)
}

/// Run `transform` with the opposite of the invocation direction
pub fn reverse_direction<T: Transform>(transform: T) -> ReverseDirection<T> {
    ReverseDirection::new(transform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_fn;

    const MOCK_OUTPUT: &[u8] = b"mock data";

    fn direction_name() -> impl Transform {
        from_fn(|_data: Vec<u8>, direction: Direction| direction.as_str().as_bytes().to_vec())
    }

    #[test]
    fn test_only_for_direction() {
        let mock = || from_fn(|_data: Vec<u8>, _direction: Direction| MOCK_OUTPUT.to_vec());
        let marshal = only_for_direction(Direction::Marshal, mock());
        let unmarshal = only_for_direction(Direction::Unmarshal, mock());

        let cases: [(&dyn Transform, Direction, bool); 4] = [
            (&marshal, Direction::Marshal, true),
            (&marshal, Direction::Unmarshal, false),
            (&unmarshal, Direction::Marshal, false),
            (&unmarshal, Direction::Unmarshal, true),
        ];

        for (transform, direction, call_expected) in cases {
            let output = transform.apply(b"input".to_vec(), direction);
            if call_expected {
                assert_eq!(output, MOCK_OUTPUT, "{direction} should run the inner transform");
            } else {
                assert_eq!(output, b"input", "{direction} should pass the input through");
            }
        }
    }

    #[test]
    fn test_always_as_direction() {
        let marshal = always_as_direction(Direction::Marshal, direction_name());
        let unmarshal = always_as_direction(Direction::Unmarshal, direction_name());

        for direction in [Direction::Marshal, Direction::Unmarshal] {
            assert_eq!(marshal.apply(Vec::new(), direction), b"Marshal");
            assert_eq!(unmarshal.apply(Vec::new(), direction), b"Unmarshal");
        }
    }

    #[test]
    fn test_reverse_direction() {
        let reversed = reverse_direction(direction_name());
        assert_eq!(reversed.apply(Vec::new(), Direction::Marshal), b"Unmarshal");
        assert_eq!(reversed.apply(Vec::new(), Direction::Unmarshal), b"Marshal");
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        let twice = reverse_direction(reverse_direction(direction_name()));
        assert_eq!(twice.apply(Vec::new(), Direction::Marshal), b"Marshal");
    }
}
