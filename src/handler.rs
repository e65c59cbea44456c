//! The handler seam the hosting runtime drives.
//!
//! A handler is anything implementing [`Handler`]; plain async functions are
//! adapted with [`handler_fn`]. The host calls [`Handler::call`] once per
//! invocation with the inbound event and a fresh [`Context`].

use crate::context::Context;
use std::future::Future;

/// A trait describing an asynchronous function `A` to `B`.
pub trait Handler<A, B> {
    /// Errors returned by this handler.
    type Error;
    /// The future response value of this handler.
    type Fut: Future<Output = Result<B, Self::Error>>;
    /// Process the incoming event and return the response asynchronously.
    fn call(&mut self, event: A, context: Context) -> Self::Fut;
}

/// Returns a new [`HandlerFn`] with the given closure.
pub fn handler_fn<F>(f: F) -> HandlerFn<F> {
    HandlerFn { f }
}

/// A [`Handler`] implemented by a closure.
#[derive(Clone, Debug)]
pub struct HandlerFn<F> {
    f: F,
}

impl<F, A, B, Error, Fut> Handler<A, B> for HandlerFn<F>
where
    F: Fn(A, Context) -> Fut,
    Fut: Future<Output = Result<B, Error>> + Send,
{
    type Error = Error;
    type Fut = Fut;

    fn call(&mut self, event: A, context: Context) -> Self::Fut {
        (self.f)(event, context)
    }
}
