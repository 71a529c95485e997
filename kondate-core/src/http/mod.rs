//! HTTP plumbing for the recipe search collaborator.
//!
//! Outgoing GET requests go through [`HttpClient`] so tests can swap in
//! [`MockClient`] and production calls share one rate limiter.

mod client;
mod rate_limiter;

pub use client::{HttpClient, MockClient, MockResponse, ReqwestClient, ReqwestClientBuilder};
pub use rate_limiter::RateLimiter;
