//! Request adaptation between `http::Request` and an engine-internal request
//!
//! This crate turns an inbound `http::Request` whose body is a raw byte source
//! into an internal request with a single, authoritative framing decision and a
//! body materialized accordingly. It also offers a basic conversion back.
//!
//! # Features
//!
//! - Framing resolved from `Content-Length` and `Transfer-Encoding` in arrival order
//! - A streaming transfer encoding always takes precedence over a declared length
//! - Headers copied in order, duplicates included
//! - Bounded reads of fixed-length bodies, never reading past the declared length
//! - Streamed bodies handed over unread
//! - A distinguished, unrecoverable error for body read failures
//!
//! # Example
//!
//! ```no_run
//! use std::io::Cursor;
//!
//! use micro_adaptor::protocol::FramingState;
//! use micro_adaptor::{adapt_with_engine, to_compat, EngineConfig};
//! use tracing::{info, Level};
//! use tracing_subscriber::FmtSubscriber;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
//!     tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
//!
//!     let mut external = http::Request::post("/upload")
//!         .header("Host", "127.0.0.1:8080")
//!         .header("Content-Length", "5")
//!         .body(Some(Cursor::new(b"hello world".to_vec())))?;
//!
//!     let engine = EngineConfig::builder().always_stream(false).build();
//!     let request = adapt_with_engine(&engine, &mut external).await?;
//!     assert_eq!(request.header().framing(), FramingState::Fixed(5));
//!     info!(length = ?request.content_length(), "adapted request");
//!
//!     let compat = to_compat(request).await?;
//!     info!(uri = %compat.uri(), "converted back");
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: the internal request, its body and framing state, and errors
//! - [`adapt`](mod@adapt): the inbound adaptor and the outbound compatibility builder
//! - [`config`]: the engine policy consulted while adapting
//!
//! # Error Handling
//!
//! - [`protocol::AdaptError::MalformedLength`]: recoverable, report it to the client
//! - [`protocol::AdaptError::BodyReadFailure`]: unrecoverable, drop the request and
//!   close the connection
//! - [`protocol::CompatError`]: failures of the outbound conversion

pub mod adapt;
pub mod config;
pub mod protocol;

pub use adapt::{adapt, adapt_with_engine, to_compat};
pub use config::EngineConfig;
