//! HTTP client for the FarmLink marketplace REST API.
//!
//! Exposes the authenticated request client plus the auth operations
//! (login / register / me) built on top of it. The bearer token lives in a
//! shared [`BearerToken`] slot written by the session layer and read here
//! on every outbound call.

pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod message;
pub(crate) mod token;


pub use client::ApiClient;
pub use error::{ApiError, Result as ApiResult};
pub use token::BearerToken;
