use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::Error;

/// One failure reported by the service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
}

/// A stored image as described by the service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: String,
    pub uploaded: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

impl ImageRecord {
    pub fn uploaded_at(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.uploaded)
    }
}

pub type UploadResult = ImageRecord;

#[derive(Deserialize, Debug)]
pub(crate) struct ListResult {
    #[serde(deserialize_with = "present")]
    pub continuation_token: Option<String>,
    pub images: Vec<ImageRecord>,
}

/// One page of a listing. `continuation_token` is `None` on the last page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImagePage {
    pub continuation_token: Option<String>,
    pub images: Vec<ImageRecord>,
}

impl ListResult {
    pub fn into_page(self) -> ImagePage {
        ImagePage {
            continuation_token: self.continuation_token,
            images: self.images,
        }
    }
}

// Without `deserialize_with` serde fills a missing Option field with None;
// the field must be present even when its value is null.
fn present<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

/// The `result` payload, either in the expected shape or not.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum Shape<T> {
    Valid(T),
    #[allow(dead_code)]
    Malformed(Value),
}

// A missing `success` counts as a failure.
#[derive(Deserialize, Debug)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "errors_or_empty")]
    pub errors: Vec<ApiError>,
    pub result: Option<Shape<T>>,
}

fn errors_or_empty<'de, D>(deserializer: D) -> Result<Vec<ApiError>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ApiError>>::deserialize(deserializer)?.unwrap_or_default())
}

impl<T> Envelope<T> {
    pub fn into_result(self) -> Result<T, Error> {
        if !self.success {
            return Err(Error::RemoteError(self.errors));
        }
        match self.result {
            Some(Shape::Valid(result)) => Ok(result),
            Some(Shape::Malformed(_)) | None => Err(Error::UnexpectedResponse),
        }
    }
}
