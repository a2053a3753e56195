use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use utoipa::ToSchema;

/// Body of `POST /api/notes`. Every field is optional at the type level so
/// that a missing one can be reported by name instead of as a parse error.
#[derive(Debug, Default, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_folder_id")]
    #[schema(value_type = Option<i32>)]
    pub folder_id: Option<i32>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Body of `PATCH /api/notes/{id}`: any subset of the note's fields.
#[derive(Debug, Default, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_folder_id")]
    #[schema(value_type = Option<i32>)]
    pub folder_id: Option<i32>,
    #[serde(default)]
    pub content: Option<String>,
}

/// API representation of a note, with `name` and `content` sanitized.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String, format = DateTime)]
    pub modified: DateTime<Utc>,
    pub folder_id: i32,
    pub content: String,
}

pub const FOLDER_ID_NOT_INTEGER: &str = "folderId must be an integer";

// HTML forms post numbers as strings, so "3" is as good as 3.
fn deserialize_folder_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(None),
        Value::Number(number) => number.as_i64().and_then(|v| i32::try_from(v).ok()),
        Value::String(raw) => raw.trim().parse::<i32>().ok(),
        _ => None,
    };

    parsed
        .map(Some)
        .ok_or_else(|| de::Error::custom(FOLDER_ID_NOT_INTEGER))
}
