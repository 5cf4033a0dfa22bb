//! conjson Test Utilities
//!
//! Shared fixture documents, a sample model and document builders for the
//! conjson test-suites.

use serde_json::{Map, Value};

pub mod fixtures;
pub mod model;

pub use model::ExampleModel;

/// Builder for JSON objects whose member order is preserved
pub struct DocumentBuilder {
    fields: Map<String, Value>,
}

impl DocumentBuilder {
    /// Create a new document builder
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Add a member with a string value
    pub fn string(mut self, key: &str, value: &str) -> Self {
        self.fields
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Add a member with an integer value
    pub fn int(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), Value::Number(value.into()));
        self
    }

    /// Add a member with a boolean value
    pub fn bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), Value::Bool(value));
        self
    }

    /// Add a member with a null value
    pub fn null(mut self, key: &str) -> Self {
        self.fields.insert(key.to_string(), Value::Null);
        self
    }

    /// Add a member with an object value
    pub fn object(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Add a member with an array value
    pub fn array(mut self, key: &str, value: Vec<Value>) -> Self {
        self.fields.insert(key.to_string(), Value::Array(value));
        self
    }

    /// Build the document
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate documents with naming-convention edge cases
pub struct TestDocumentGenerator;

impl TestDocumentGenerator {
    /// A document whose keys appear at several nesting depths, with
    /// key-like text inside values
    pub fn nested_camel_case_document() -> Value {
        let inner = DocumentBuilder::new()
            .string("streetName", "Main St")
            .int("houseNumber", 42)
            .build();

        DocumentBuilder::new()
            .string("userName", "jdoe")
            .object("homeAddress", inner)
            .array(
                "pastAddresses",
                vec![DocumentBuilder::new().string("cityName", "Springfield").build()],
            )
            .string("note", r#"text like "fakeKey": stays"#)
            .null("deletedAt")
            .bool("isAdmin", false)
            .build()
    }

    /// The same document as [`Self::nested_camel_case_document`] with
    /// `snake_case` keys
    pub fn nested_snake_case_document() -> Value {
        let inner = DocumentBuilder::new()
            .string("street_name", "Main St")
            .int("house_number", 42)
            .build();

        DocumentBuilder::new()
            .string("user_name", "jdoe")
            .object("home_address", inner)
            .array(
                "past_addresses",
                vec![DocumentBuilder::new().string("city_name", "Springfield").build()],
            )
            .string("note", r#"text like "fakeKey": stays"#)
            .null("deleted_at")
            .bool("is_admin", false)
            .build()
    }

    /// Documents with keys that are single words and so pass through every
    /// casing transform unchanged
    pub fn single_word_key_documents() -> Vec<Value> {
        vec![
            DocumentBuilder::new().string("id", "1").int("count", 3).build(),
            DocumentBuilder::new()
                .string("title", "Hello, 世界! 🌍")
                .array("tags", vec![Value::from("camelCase"), Value::from("snake_case")])
                .build(),
            DocumentBuilder::new().build(),
        ]
    }
}
