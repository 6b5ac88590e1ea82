//! HTTP adapter for the backend REST API.
//!
//! DESIGN
//! ======
//! Verb helpers wrap `gloo-net` and consult the credential slot on every
//! request, so authorization follows the current credential with no shared
//! mutable default-header state. The session store owns the slot; this
//! adapter only reads it.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use crate::session::credentials::Credentials;

#[cfg(feature = "csr")]
use gloo_net::http::{Method, RequestBuilder, Response};
#[cfg(feature = "csr")]
use serde::Serialize;

/// All backend routes hang off one prefix.
#[cfg(any(test, feature = "csr"))]
fn endpoint(path: &str) -> String {
    format!("/api{path}")
}

/// Handle to the HTTP adapter. Cheap to copy.
#[derive(Clone, Copy)]
pub struct Http {
    credentials: Credentials,
}

impl Http {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> Credentials {
        self.credentials
    }

    /// `Authorization` header value for the current credential, if any.
    pub fn authorization(&self) -> Option<String> {
        self.credentials.current().map(|token| format!("Token {token}"))
    }
}

#[cfg(feature = "csr")]
impl Http {
    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = RequestBuilder::new(&endpoint(path)).method(method);
        match self.authorization() {
            Some(auth) => builder.header("Authorization", &auth),
            None => builder,
        }
    }

    /// # Errors
    ///
    /// Returns the transport error if the request could not be sent.
    pub async fn get(&self, path: &str) -> Result<Response, gloo_net::Error> {
        self.builder(Method::GET, path).send().await
    }

    /// # Errors
    ///
    /// Returns the transport error if the request could not be sent.
    pub async fn delete(&self, path: &str) -> Result<Response, gloo_net::Error> {
        self.builder(Method::DELETE, path).send().await
    }

    /// # Errors
    ///
    /// Returns the transport error if the body could not be serialized or the
    /// request could not be sent.
    pub async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, gloo_net::Error> {
        self.builder(Method::POST, path).json(body)?.send().await
    }

    /// # Errors
    ///
    /// Returns the transport error if the body could not be serialized or the
    /// request could not be sent.
    pub async fn patch_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, gloo_net::Error> {
        self.builder(Method::PATCH, path).json(body)?.send().await
    }
}
