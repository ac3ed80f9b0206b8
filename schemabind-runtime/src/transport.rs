//! The transport seam between generated operations and the network.

use std::{sync::Arc, time::Duration};

use crate::{Error, Params, Parts};

/// Per-call transport options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOpts {
    pub timeout: Option<Duration>,
}

/// One operation invocation as handed to a [`Transport`].
#[derive(Debug, Clone)]
pub struct Request<'a> {
    pub method: &'a str,
    pub params: Params,
    /// Present only when the operation can carry uploads.
    pub parts: Option<Parts>,
    pub opts: Option<&'a RequestOpts>,
}

impl<'a> Request<'a> {
    pub fn new(method: &'a str, params: Params) -> Self {
        Self {
            method,
            params,
            parts: None,
            opts: None,
        }
    }

    pub fn with_parts(mut self, parts: Parts) -> Self {
        self.parts = Some(parts);
        self
    }

    pub fn with_opts(mut self, opts: Option<&'a RequestOpts>) -> Self {
        self.opts = opts;
        self
    }

    /// Whether the request has uploads and must be sent as multipart.
    pub fn is_multipart(&self) -> bool {
        self.parts.as_ref().is_some_and(|parts| !parts.is_empty())
    }
}

/// Performs requests and returns the raw result payload.
///
/// Implementations strip any response envelope; the returned bytes are the
/// JSON result the generated operation decodes.
pub trait Transport {
    fn request(&self, request: Request<'_>) -> Result<Vec<u8>, Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn request(&self, request: Request<'_>) -> Result<Vec<u8>, Error> {
        (**self).request(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn request(&self, request: Request<'_>) -> Result<Vec<u8>, Error> {
        (**self).request(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn request(&self, request: Request<'_>) -> Result<Vec<u8>, Error> {
        (**self).request(request)
    }
}
