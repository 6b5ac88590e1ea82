//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the credential-aware transport adapter, `api` holds one
//! function per endpoint, and `types` defines the shared payload schema.

pub mod api;
pub mod http;
pub mod types;
