//! Sample model used by the adapter tests

use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Serialize};

/// A typical API resource whose fields serialize as `camelCase`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleModel {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub referred_by_url: String,
    pub is_active: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl ExampleModel {
    /// The instance behind [`crate::fixtures::EXAMPLE_MODEL_SNAKE_CASE_JSON`]
    pub fn sample() -> Self {
        Self {
            title: "Example Title".to_string(),
            description: "This is a description.".to_string(),
            image_url: "https://example.com/image.png".to_string(),
            referred_by_url: "https://example.com/referrer/index.html".to_string(),
            is_active: true,
            created_at: at(-5, (2015, 11, 17), (20, 43, 31)),
            updated_at: at(-7, (2018, 12, 24), (13, 21, 15)),
        }
    }
}

fn at(
    offset_hours: i32,
    (year, month, day): (i32, u32, u32),
    (hour, min, sec): (u32, u32, u32),
) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(offset_hours * 3600)
        .and_then(|tz| {
            tz.with_ymd_and_hms(year, month, day, hour, min, sec)
                .single()
        })
        .expect("sample timestamp is valid")
}
