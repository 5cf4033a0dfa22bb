//! Naming-convention transforms for object member names
//!
//! - [`ConventionalKeys`]: `snake_case` on marshal, `camelCase` on unmarshal
//! - [`CamelCaseKeys`]: `camelCase` in both directions
//! - [`ValidIdentifierKeys`]: strips everything that can't appear in a bare identifier
//!
//! Word barriers are found with patterns compiled once per process. Leading
//! underscores are never treated as barriers, so prefixes such as the
//! `__metadata` convention survive every transform except
//! [`ValidIdentifierKeys`].

use crate::keys::replace_keys;
use crate::{Direction, Transform};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A non-uppercase character followed by an uppercase one
static CAMEL_CASE_WORD_BARRIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("([^A-Z])([A-Z])").expect("camel case barrier pattern is valid")
});

/// A run of two or more capitals and the character that ends it
static REPEATED_UPPER_CASE_WORD_BARRIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("([A-Z])([A-Z]+?)([^A-Z]|$)").expect("repeated capitals pattern is valid")
});

/// Everything before the first letter
static LEADING_NON_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\P{L}+").expect("leading non-letters pattern is valid"));

/// Anything other than a letter or a decimal digit
static NON_IDENTIFIER_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{Nd}]+").expect("non-identifier pattern is valid")
});

/// Converts keys to `snake_case` when marshaling and to `camelCase` when
/// unmarshaling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConventionalKeys;

impl ConventionalKeys {
    /// Create the transform
    pub fn new() -> Self {
        Self
    }
}

impl Transform for ConventionalKeys {
    fn apply(&self, data: Vec<u8>, direction: Direction) -> Vec<u8> {
        replace_keys(&data, |key| match direction {
            Direction::Marshal => camel_to_snake(key),
            Direction::Unmarshal => snake_to_camel(key),
        })
    }

    fn name(&self) -> &str {
        "conventional_keys"
    }
}

/// Converts keys of any style (`snake_case`, `kebab-case`, `PascalCase`) to
/// `camelCase`, regardless of direction
///
/// With `lower_repeated_caps`, acronyms are title-cased: `imageURL` becomes
/// `imageUrl` and `HTTPServer` becomes `httpServer`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CamelCaseKeys {
    lower_repeated_caps: bool,
}

impl CamelCaseKeys {
    /// Create the transform
    pub fn new(lower_repeated_caps: bool) -> Self {
        Self {
            lower_repeated_caps,
        }
    }

    /// Whether runs of capitals are lower-cased
    pub fn lowers_repeated_caps(&self) -> bool {
        self.lower_repeated_caps
    }
}

impl Transform for CamelCaseKeys {
    fn apply(&self, data: Vec<u8>, _direction: Direction) -> Vec<u8> {
        replace_keys(&data, |key| to_camel_case(key, self.lower_repeated_caps))
    }

    fn name(&self) -> &str {
        "camel_case_keys"
    }
}

/// Strips keys down to letters and digits, starting with a letter, regardless
/// of direction
///
/// `$weird_key` becomes `weirdkey`. Separators are dropped rather than
/// translated, so `image_url` becomes `imageurl`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidIdentifierKeys;

impl ValidIdentifierKeys {
    /// Create the transform
    pub fn new() -> Self {
        Self
    }
}

impl Transform for ValidIdentifierKeys {
    fn apply(&self, data: Vec<u8>, _direction: Direction) -> Vec<u8> {
        replace_keys(&data, to_valid_identifier)
    }

    fn name(&self) -> &str {
        "valid_identifier_keys"
    }
}

/// Insert `_` at every lower-to-upper barrier and lower-case the key
pub fn camel_to_snake(key: &str) -> String {
    CAMEL_CASE_WORD_BARRIER
        .replace_all(key, "${1}_${2}")
        .to_lowercase()
}

/// Drop each `_` that follows a non-underscore and upper-case the character
/// after it
///
/// Leading underscores and a trailing underscore are kept. Every barrier is
/// handled, including those between single-letter segments, so `a_b_c`
/// becomes `aBC` rather than `aB_c`.
pub fn snake_to_camel(key: &str) -> String {
    let mut result = String::with_capacity(key.len());
    let mut chars = key.chars();
    let mut previous: Option<char> = None;

    while let Some(ch) = chars.next() {
        if ch == '_' && previous.is_some_and(|p| p != '_') {
            if let Some(next) = chars.next() {
                result.extend(next.to_uppercase());
                previous = Some(next);
                continue;
            }
        }
        result.push(ch);
        previous = Some(ch);
    }

    result
}

/// Normalize a key of any style to `camelCase`
pub fn to_camel_case(key: &str, lower_repeated_caps: bool) -> String {
    let key = snake_to_camel(&key.replace('-', "_"));
    let key = if lower_repeated_caps {
        lower_repeated_capitals(&key)
    } else {
        key
    };
    lower_first(&key)
}

fn lower_repeated_capitals(key: &str) -> String {
    REPEATED_UPPER_CASE_WORD_BARRIER
        .replace_all(key, |caps: &Captures<'_>| {
            let (lead, run, tail) = (&caps[1], &caps[2], &caps[3]);

            if tail.chars().next().is_some_and(char::is_lowercase) {
                // the run's last capital starts the next word
                let split = run.len() - 1;
                format!("{lead}{}{}{tail}", run[..split].to_lowercase(), &run[split..])
            } else {
                format!("{lead}{}", [run, tail].concat().to_lowercase())
            }
        })
        .into_owned()
}

fn lower_first(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Trim leading non-letters, then drop everything but letters and decimal
/// digits
///
/// Other numerals such as `½`, `²` or `Ⅷ` are not digits and are removed.
pub fn to_valid_identifier(key: &str) -> String {
    let trimmed = LEADING_NON_LETTERS.replace(key, "");
    NON_IDENTIFIER_CHARS.replace_all(&trimmed, "").into_owned()
}
