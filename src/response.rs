//! Response types

use http::{header::CONTENT_TYPE, Response, StatusCode};
use serde::Serialize;

/// The payload record a handler passes to
/// [`ResponseBuilder::succeed`](crate::ResponseBuilder::succeed).
///
/// On the wire the content type travels as a field of the record, under the
/// literal key `content-type`, rather than as an HTTP header; the hosting
/// runtime lifts it into a header when it serves the response.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FunctionPayload {
    /// The response body, already serialized.
    pub body: String,
    /// The media type of `body`.
    #[serde(rename = "content-type")]
    pub content_type: String,
}

impl FunctionPayload {
    /// Serialize `value` as JSON into the body and tag the payload
    /// `application/json`.
    pub fn json<T>(value: &T) -> Result<FunctionPayload, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        Ok(FunctionPayload {
            body: serde_json::to_string(value)?,
            content_type: "application/json".to_string(),
        })
    }
}

/// The finalized response handed back to the hosting runtime.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FunctionResponse {
    /// HTTP status code the host will serve.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// The response body, already serialized.
    pub body: String,
    /// The media type of `body`.
    #[serde(rename = "content-type")]
    pub content_type: String,
}

/// Conversion into an `http::Response` for hosts that speak `http` types.
impl From<FunctionResponse> for Response<String> {
    fn from(value: FunctionResponse) -> Self {
        Response::builder()
            .status(StatusCode::from_u16(value.status_code).unwrap_or(StatusCode::OK))
            .header(CONTENT_TYPE, value.content_type)
            .body(value.body)
            .expect("unable to build http::Response")
    }
}
