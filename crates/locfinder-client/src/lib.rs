//! Async HTTP client for the service-point location finder API.
//!
//! Wraps `reqwest` with the API key header, query transmission and the
//! success/failure [`Envelope`](locfinder_core::Envelope) construction.

pub mod client;
pub mod error;

pub use client::{LocationFinderClient, API_KEY_HEADER};
pub use error::ClientError;
