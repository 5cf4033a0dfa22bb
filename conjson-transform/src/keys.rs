//! Object member name matching and in-place replacement
//!
//! Keys are located with a pattern rather than a parser. Every string literal
//! in the document is consumed in order, and a literal counts as a member name
//! when it is followed by optional whitespace and a colon. Consuming value
//! strings too keeps the scan aligned with string boundaries, so text such as
//! `"a \"b\": c"` inside a value is never mistaken for a key.

use regex::bytes::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

/// Matches a string literal (group 1: content) and, when present, the
/// whitespace and colon that make it a member name (group 2).
static STRING_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s-u)"((?:[^"\\]|\\.)*)"(\s*:)?"#).expect("string token pattern is valid")
});

/// Location of one member name inside a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpan {
    /// Whole key token: opening quote through the name separator
    pub token: Range<usize>,
    /// Name content between the quotes, still JSON-escaped
    pub name: Range<usize>,
}

impl KeySpan {
    /// Raw name bytes of this key within `data`
    pub fn name_bytes<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.name.clone()]
    }
}

fn key_span(caps: &Captures<'_>) -> Option<KeySpan> {
    caps.get(2)?;
    Some(KeySpan {
        token: caps.get(0)?.range(),
        name: caps.get(1)?.range(),
    })
}

/// Find every member name in `data`, in document order
pub fn find_keys(data: &[u8]) -> Vec<KeySpan> {
    STRING_TOKEN
        .captures_iter(data)
        .filter_map(|caps| key_span(&caps))
        .collect()
}

/// Rewrite every member name in `data` with `replace`
///
/// Only the name content between the quotes changes; quotes, whitespace,
/// the colon and every byte outside key tokens are copied verbatim. Names
/// that are not valid UTF-8 are left as they are.
pub fn replace_keys<F>(data: &[u8], mut replace: F) -> Vec<u8>
where
    F: FnMut(&str) -> String,
{
    let mut output = Vec::with_capacity(data.len());
    let mut copied_up_to = 0;

    for caps in STRING_TOKEN.captures_iter(data) {
        let Some(span) = key_span(&caps) else {
            continue;
        };
        let Ok(key) = std::str::from_utf8(span.name_bytes(data)) else {
            continue;
        };

        output.extend_from_slice(&data[copied_up_to..span.name.start]);
        output.extend_from_slice(replace(key).as_bytes());
        copied_up_to = span.name.end;
    }

    output.extend_from_slice(&data[copied_up_to..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(data: &[u8]) -> Vec<String> {
        find_keys(data)
            .iter()
            .map(|span| String::from_utf8_lossy(span.name_bytes(data)).into_owned())
            .collect()
    }

    #[test]
    fn test_find_keys_flat_object() {
        let data = br#"{"title":"Example","is_active":true,"count":3}"#;
        assert_eq!(names(data), vec!["title", "is_active", "count"]);
    }

    #[test]
    fn test_find_keys_spans() {
        let data = br#"{"a" : 1}"#;
        let spans = find_keys(data);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].name, 2..3);
        assert_eq!(spans[0].token, 1..6);
        assert_eq!(&data[spans[0].token.clone()], br#""a" :"#);
    }

    #[test]
    fn test_find_keys_nested_and_arrays() {
        let data = br#"{"outer":{"inner_key":[{"deep":null}]},"list":["not_a_key","x"]}"#;
        assert_eq!(names(data), vec!["outer", "inner_key", "deep", "list"]);
    }

    #[test]
    fn test_values_with_quote_colon_text_are_not_keys() {
        let data = br#"{"message":"say \"hi\": twice","url":"http://example.com:8080"}"#;
        assert_eq!(names(data), vec!["message", "url"]);
    }

    #[test]
    fn test_escaped_quote_inside_name() {
        let data = br#"{"a\"b": 1}"#;
        assert_eq!(names(data), vec![r#"a\"b"#]);

        let replaced = replace_keys(data, |key| key.to_uppercase());
        assert_eq!(replaced, br#"{"A\"B": 1}"#.to_vec());
    }

    #[test]
    fn test_replace_preserves_surrounding_bytes() {
        let data = b"{\n\t\"created_at\" \t: \"x\",\n\t\"id\":1\n}";
        let replaced = replace_keys(data, |key| format!("<{key}>"));
        assert_eq!(
            replaced,
            b"{\n\t\"<created_at>\" \t: \"x\",\n\t\"<id>\":1\n}".to_vec()
        );
    }

    #[test]
    fn test_replace_can_change_name_length() {
        let data = br#"{"abc":1,"d":2}"#;
        let replaced = replace_keys(data, |key| key.repeat(2));
        assert_eq!(replaced, br#"{"abcabc":1,"dd":2}"#.to_vec());

        let replaced = replace_keys(data, |_| String::new());
        assert_eq!(replaced, br#"{"":1,"":2}"#.to_vec());
    }

    #[test]
    fn test_empty_and_keyless_documents() {
        assert!(replace_keys(b"", |key| key.to_uppercase()).is_empty());

        let documents: [&[u8]; 4] = [b"[1,2,3]", b"\"just a string\"", b"test-data", b"null"];
        for data in documents {
            assert_eq!(replace_keys(data, |key| key.to_uppercase()), data.to_vec());
        }
    }

    #[test]
    fn test_invalid_utf8_name_left_unchanged() {
        let data = b"{\"\xff\xfe\":1,\"ok\":2}";
        let replaced = replace_keys(data, |key| key.to_uppercase());
        assert_eq!(replaced, b"{\"\xff\xfe\":1,\"OK\":2}".to_vec());
    }

    #[test]
    fn test_unterminated_string_is_total() {
        let data = br#"{"key": "unterminated"#;
        let replaced = replace_keys(data, |key| key.to_uppercase());
        assert_eq!(replaced, br#"{"KEY": "unterminated"#.to_vec());
    }
}
