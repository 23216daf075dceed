//! Request/response middleware chain.
//!
//! Interceptors run in registration order. Request and response hooks are
//! pass-through: each receives the value and hands it on. The error hook
//! either passes the error to the next interceptor ([`ErrorFlow::Next`]) or
//! recovers it ([`ErrorFlow::Recovered`]), which stops the chain and resolves
//! the call without a value. An error that passes every interceptor reaches
//! the caller unchanged.
//!
//! Hooks run inline on every request and must not block.

use std::sync::Arc;

use crate::descriptor::{RequestDescriptor, ResponseDescriptor};
use crate::errors::RequestError;

/// Outcome of an interceptor's error hook.
#[derive(Debug, PartialEq)]
pub enum ErrorFlow {
    /// Hand the error to the next interceptor, or to the caller at the end of the chain.
    Next(RequestError),
    /// The error was handled; the caller receives no value and no error.
    Recovered,
}

/// A hook into every request made through a [`crate::Client`].
pub trait Interceptor: Send + Sync {
    fn on_request(&self, request: RequestDescriptor) -> RequestDescriptor {
        request
    }

    fn on_response(&self, response: ResponseDescriptor) -> ResponseDescriptor {
        response
    }

    fn on_error(&self, error: RequestError) -> ErrorFlow {
        ErrorFlow::Next(error)
    }
}

/// Ordered list of interceptors shared by a client.
#[derive(Clone, Default)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interceptor; it runs after the ones already registered.
    pub fn with<I>(mut self, interceptor: I) -> Self
    where
        I: Interceptor + 'static,
    {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn push(&mut self, interceptor: Arc<dyn Interceptor>) {
        self.interceptors.push(interceptor);
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    pub fn request(&self, request: RequestDescriptor) -> RequestDescriptor {
        self.interceptors
            .iter()
            .fold(request, |req, interceptor| interceptor.on_request(req))
    }

    pub fn response(&self, response: ResponseDescriptor) -> ResponseDescriptor {
        self.interceptors
            .iter()
            .fold(response, |resp, interceptor| interceptor.on_response(resp))
    }

    pub fn error(&self, error: RequestError) -> ErrorFlow {
        let mut current = error;
        for interceptor in &self.interceptors {
            match interceptor.on_error(current) {
                ErrorFlow::Next(next) => current = next,
                ErrorFlow::Recovered => return ErrorFlow::Recovered,
            }
        }
        ErrorFlow::Next(current)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::errors::FailureCode;

    #[derive(Default)]
    struct Counting {
        errors: AtomicUsize,
        recover: bool,
    }

    impl Interceptor for Arc<Counting> {
        fn on_error(&self, error: RequestError) -> ErrorFlow {
            self.errors.fetch_add(1, Ordering::SeqCst);
            if self.recover {
                ErrorFlow::Recovered
            } else {
                ErrorFlow::Next(error)
            }
        }
    }

    fn network_error() -> RequestError {
        RequestError::Failure {
            code: FailureCode::Network,
            message: "connection refused".to_string(),
        }
    }

    #[test]
    fn empty_chain_propagates_error() {
        let chain = InterceptorChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.error(network_error()), ErrorFlow::Next(network_error()));
    }

    #[test]
    fn recovery_short_circuits_later_interceptors() {
        let first = Arc::new(Counting {
            recover: true,
            ..Default::default()
        });
        let second = Arc::new(Counting::default());
        let chain = InterceptorChain::new()
            .with(first.clone())
            .with(second.clone());

        assert_eq!(chain.error(network_error()), ErrorFlow::Recovered);
        assert_eq!(first.errors.load(Ordering::SeqCst), 1);
        assert_eq!(second.errors.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn pass_through_reaches_every_interceptor() {
        let first = Arc::new(Counting::default());
        let second = Arc::new(Counting::default());
        let chain = InterceptorChain::new()
            .with(first.clone())
            .with(second.clone());

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.error(network_error()), ErrorFlow::Next(network_error()));
        assert_eq!(first.errors.load(Ordering::SeqCst), 1);
        assert_eq!(second.errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn request_passes_through_unmodified() {
        let chain = InterceptorChain::new().with(Arc::new(Counting::default()));
        let req = RequestDescriptor::get("/api/setting");
        assert_eq!(chain.request(req.clone()), req);
    }
}
