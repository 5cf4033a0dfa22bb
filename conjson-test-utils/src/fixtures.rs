//! Fixture documents shared by the transform and adapter test-suites
//!
//! Each pair differs only in member names, so a transform applied to one
//! side must reproduce the other byte for byte.

/// `snake_case` document, the marshal output of [`CAMEL_CASE_JSON`]
pub const SNAKE_CASE_JSON: &str = r#"
{
    "title": "Example Title",
    "description": "whatever",
    "created_at": "2015-11-17T20:43:31.0463576-05:00",
    "updated_at": "2018-12-24T13:21:15.7883416-07:00",
    "is_active": true,
    "image_url": "https://example.com/image.png",
    "time_to_live": 600,
    "$weird_key" : "with-colon-spacing-before-value",
    "plan9_key" : "just an example with a numeral",
    "__metadata_key": "You see this in OData 2.0",
    "__metadata": "You see this in OData 2.0"
}
"#;

/// `camelCase` document, the unmarshal output of [`SNAKE_CASE_JSON`]
pub const CAMEL_CASE_JSON: &str = r#"
{
    "title": "Example Title",
    "description": "whatever",
    "createdAt": "2015-11-17T20:43:31.0463576-05:00",
    "updatedAt": "2018-12-24T13:21:15.7883416-07:00",
    "isActive": true,
    "imageUrl": "https://example.com/image.png",
    "timeToLive": 600,
    "$weirdKey" : "with-colon-spacing-before-value",
    "plan9Key" : "just an example with a numeral",
    "__metadataKey": "You see this in OData 2.0",
    "__metadata": "You see this in OData 2.0"
}
"#;

/// Keys in every style at once
pub const MIXED_STYLE_JSON: &str = r#"
{
    "title": "Example Title",
    "description": "whatever",
    "created_at": "2015-11-17T20:43:31.0463576-05:00",
    "updated_at": "2018-12-24T13:21:15.7883416-07:00",
    "is_active": true,
    "image_url": "https://example.com/image.png",
    "time_to_live": 600,
    "$weird_key" : "with-colon-spacing-before-value",
    "plan9_key" : "just an example with a numeral",
    "__metadata_key": "You see this in OData 2.0",
    "__metadata": "You see this in OData 2.0",
    "Capitalized": "a capitalized key",
    "a-hyphenated-key": "a hyphenated key",
    "camelCaseKey": "a camelCase key",
    "UpperCamelCaseKey": "an UpperCamelCase key",
    "a-strange_mixedAndConfused_CaseStyle": "an UpperCamelCase key",
    "aKeyWithRepeatedCapitalLettersLikeURL": "a key with repeated capitals"
}
"#;

/// [`MIXED_STYLE_JSON`] normalized to `camelCase`, with repeated capitals lowered
pub const NORMALIZED_CAMEL_CASE_JSON: &str = r#"
{
    "title": "Example Title",
    "description": "whatever",
    "createdAt": "2015-11-17T20:43:31.0463576-05:00",
    "updatedAt": "2018-12-24T13:21:15.7883416-07:00",
    "isActive": true,
    "imageUrl": "https://example.com/image.png",
    "timeToLive": 600,
    "$weirdKey" : "with-colon-spacing-before-value",
    "plan9Key" : "just an example with a numeral",
    "__metadataKey": "You see this in OData 2.0",
    "__metadata": "You see this in OData 2.0",
    "capitalized": "a capitalized key",
    "aHyphenatedKey": "a hyphenated key",
    "camelCaseKey": "a camelCase key",
    "upperCamelCaseKey": "an UpperCamelCase key",
    "aStrangeMixedAndConfusedCaseStyle": "an UpperCamelCase key",
    "aKeyWithRepeatedCapitalLettersLikeUrl": "a key with repeated capitals"
}
"#;

/// Keys that are not valid bare identifiers
pub const INVALID_IDENTIFIER_JSON: &str = r#"
{
    "title": "Example Title",
    "description": "whatever",
    "created_at": "2015-11-17T20:43:31.0463576-05:00",
    "updated_at": "2018-12-24T13:21:15.7883416-07:00",
    "is_active": true,
    "image_url": "https://example.com/image.png",
    "time_to_live": 600,
    "$weird_key" : "with-colon-spacing-before-value",
    "plan9_key" : "just an example with a numeral",
    "__metadata_key": "You see this in OData 2.0",
    "__metadata": "You see this in OData 2.0",
    "Capitalized": "a capitalized key",
    "a-hyphenated-key": "a hyphenated key",
    "3^%!@#*identifier-pls&": "Weird key that isn't a valid identifier"
}
"#;

/// [`INVALID_IDENTIFIER_JSON`] with every key stripped to an identifier
pub const VALID_IDENTIFIER_JSON: &str = r#"
{
    "title": "Example Title",
    "description": "whatever",
    "createdat": "2015-11-17T20:43:31.0463576-05:00",
    "updatedat": "2018-12-24T13:21:15.7883416-07:00",
    "isactive": true,
    "imageurl": "https://example.com/image.png",
    "timetolive": 600,
    "weirdkey" : "with-colon-spacing-before-value",
    "plan9key" : "just an example with a numeral",
    "metadatakey": "You see this in OData 2.0",
    "metadata": "You see this in OData 2.0",
    "Capitalized": "a capitalized key",
    "ahyphenatedkey": "a hyphenated key",
    "identifierpls": "Weird key that isn't a valid identifier"
}
"#;

/// [`crate::ExampleModel::sample`] marshaled with conventional keys and a
/// four-space indent
pub const EXAMPLE_MODEL_SNAKE_CASE_JSON: &str = r#"{
    "title": "Example Title",
    "description": "This is a description.",
    "image_url": "https://example.com/image.png",
    "referred_by_url": "https://example.com/referrer/index.html",
    "is_active": true,
    "created_at": "2015-11-17T20:43:31-05:00",
    "updated_at": "2018-12-24T13:21:15-07:00"
}"#;
