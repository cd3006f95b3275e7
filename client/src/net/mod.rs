//! Networking: the HTTP transport, the backend DTOs, and one thin resource
//! client module per backend resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resource clients are pure request mapping — static method, path, and
//! parameter shape, no retries, no caching, no error translation. Failures
//! surface as the transport's [`api::ApiError`].

pub mod api;
pub mod attendance;
pub mod auth;
pub mod coach;
pub mod course;
pub mod membership;
pub mod payment;
pub mod types;
