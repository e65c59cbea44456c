#![deny(missing_docs)]

//! Marketing list function endpoint.
//!
//! This crate contains the handler for the marketing list endpoint, written
//! against the invocation contract of a hosted serverless runtime: the host
//! supplies an opaque `event` and a [`Context`], and the handler finalizes
//! its response through the context's chained builder.
//!
//! The endpoint is currently a stub. It accepts any event shape and responds
//! with `200` and an empty user list:
//!
//! ```json
//! {"users":[]}
//! ```
//!
//! # Example
//!
//! ```no_run
//! use marketing_list::{list_users, Context, Error};
//! use serde_json::json;
//!
//! # async fn invoke() -> Result<(), Error> {
//! let response = list_users(json!({}), Context::default()).await?;
//! assert_eq!(response.status_code, 200);
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod handler;
pub mod marketing;
pub mod response;

pub use crate::{
    context::{Context, ResponseBuilder},
    handler::{handler_fn, Handler, HandlerFn},
    marketing::list_users,
    response::{FunctionPayload, FunctionResponse},
};

/// Error type that handlers may result in
pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;
