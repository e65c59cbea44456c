//! Marketing list endpoint.
//!
//! Currently a stub: the real data source for the marketing list has not
//! been wired up yet, so every invocation answers `200` with an empty
//! `users` array.

use crate::context::Context;
use crate::response::{FunctionPayload, FunctionResponse};
use crate::Error;
use serde_json::{json, Value};
use tracing::trace;

/// Respond to any invocation with a successful, empty user list.
///
/// The event is accepted in any shape and ignored; the response is the same
/// on every call:
///
/// ```json
/// {"users":[]}
/// ```
pub async fn list_users(_event: Value, context: Context) -> Result<FunctionResponse, Error> {
    trace!(request_id = %context.request_id, "serving empty marketing list");

    let payload = FunctionPayload::json(&json!({ "users": [] }))?;

    Ok(context.status(200).succeed(payload))
}
