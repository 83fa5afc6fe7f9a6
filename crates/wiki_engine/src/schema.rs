//! Structured-output contract sent with every generation request, and the
//! wire types its replies are decoded into.
//!
//! The schema is the generator's OpenAPI subset (upper-case type names). The
//! reply is decoded strictly into [`RawWikiData`]; a missing required field is
//! a content error, never patched up after the fact.

use serde::Deserialize;
use serde_json::{json, Value};

/// Required fields of each entry, in declaration order.
pub const ENTRY_REQUIRED_FIELDS: [&str; 9] = [
    "videoId",
    "title",
    "publishDate",
    "summary",
    "fullContent",
    "entities",
    "category",
    "sentimentScore",
    "views",
];

/// Required fields of the root object.
pub const ROOT_REQUIRED_FIELDS: [&str; 4] =
    ["channelName", "channelDescription", "subscribers", "entries"];

pub fn entity_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "type": {
                "type": "STRING",
                "description": "Category of entity, e.g., Person, Tool, Concept"
            }
        },
        "required": ["name", "type"]
    })
}

pub fn entry_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "videoId": { "type": "STRING" },
            "title": { "type": "STRING" },
            "publishDate": { "type": "STRING" },
            "summary": {
                "type": "STRING",
                "description": "A concise 80-word encyclopaedia summary."
            },
            "fullContent": {
                "type": "STRING",
                "description": "A longer, multi-paragraph encyclopaedia article about the video topic (approx 300 words)."
            },
            "entities": { "type": "ARRAY", "items": entity_schema() },
            "category": { "type": "STRING" },
            "sentimentScore": {
                "type": "NUMBER",
                "description": "0 is negative, 100 is positive"
            },
            "views": { "type": "NUMBER" }
        },
        "required": ENTRY_REQUIRED_FIELDS
    })
}

/// Full response schema passed as `generationConfig.responseSchema`.
pub fn wiki_data_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "channelName": { "type": "STRING" },
            "channelDescription": { "type": "STRING" },
            "subscribers": { "type": "STRING" },
            "entries": { "type": "ARRAY", "items": entry_schema() }
        },
        "required": ROOT_REQUIRED_FIELDS
    })
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWikiData {
    pub channel_name: String,
    pub channel_description: String,
    pub subscribers: String,
    pub entries: Vec<RawEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub video_id: String,
    pub title: String,
    pub publish_date: String,
    pub summary: String,
    pub full_content: String,
    pub entities: Vec<RawEntity>,
    pub category: String,
    pub sentiment_score: f64,
    pub views: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawEntity {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}
