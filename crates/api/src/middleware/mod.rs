//! Request middleware.
//!
//! - [`timeout::enforce_request_timeout`] -- Answers a stalled request with the 500 envelope.

pub mod timeout;
