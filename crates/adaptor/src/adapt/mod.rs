//! Conversions between `http::Request` and the internal [`Request`](crate::protocol::Request).
//!
//! # Inbound
//!
//! [`adapt`] and [`adapt_with_engine`] build an internal request in two steps:
//!
//! 1. the framing of the body is resolved from the headers, in arrival order,
//!    while every header is copied across
//! 2. the body is materialized from that framing and the engine policy, as an
//!    in-memory buffer, the still-open source, or no body at all
//!
//! # Outbound
//!
//! [`to_compat`] is the reverse direction and only covers the basics: the
//! body is always buffered and headers are grouped by name.

mod body;
mod compat;
mod framing;
mod inbound;

pub use compat::to_compat;
pub use inbound::adapt;
pub use inbound::adapt_with_engine;
