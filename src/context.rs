//! Invocation context types
//!
//! The hosting runtime hands every invocation a [`Context`]. Besides the
//! invocation metadata, the context is the entry point for building the
//! response: [`Context::status`] records the HTTP status code and returns a
//! [`ResponseBuilder`] on which [`ResponseBuilder::succeed`] finalizes the
//! invocation with a payload record.

use crate::response::{FunctionPayload, FunctionResponse};

/// The invocation context passed to a handler by the hosting runtime.
#[derive(Clone, Debug, Default)]
pub struct Context {
    /// The identifier the host assigned to this invocation.
    pub request_id: String,
    /// The name of the function as deployed.
    pub function_name: String,
}

impl Context {
    /// Begin building this invocation's response with the given HTTP status
    /// code.
    pub fn status(&self, code: u16) -> ResponseBuilder {
        ResponseBuilder { status_code: code }
    }
}

/// Response builder returned by [`Context::status`].
///
/// Holds the recorded status code until the handler finalizes the response.
#[derive(Debug)]
pub struct ResponseBuilder {
    status_code: u16,
}

impl ResponseBuilder {
    /// Finalize the invocation successfully, combining the recorded status
    /// code with `payload`.
    pub fn succeed(self, payload: FunctionPayload) -> FunctionResponse {
        let FunctionPayload { body, content_type } = payload;
        FunctionResponse {
            status_code: self.status_code,
            body,
            content_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Context;
    use crate::response::FunctionPayload;

    #[test]
    fn status_is_recorded_on_the_response() {
        let context = Context::default();
        let response = context.status(200).succeed(FunctionPayload {
            body: "{}".to_string(),
            content_type: "application/json".to_string(),
        });
        assert_eq!(response.status_code, 200);
    }

    #[test]
    fn succeed_passes_the_payload_through() {
        let context = Context {
            request_id: "8ed4e3dc".to_string(),
            function_name: "marketing-list".to_string(),
        };
        let response = context.status(200).succeed(FunctionPayload {
            body: r#"{"users":[]}"#.to_string(),
            content_type: "application/json".to_string(),
        });
        assert_eq!(response.body, r#"{"users":[]}"#);
        assert_eq!(response.content_type, "application/json");
    }
}
