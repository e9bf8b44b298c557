//! Types shared by the inbound and outbound adaptors.
//!
//! - **Framing** (`framing`): [`FramingState`], the length decision taken from
//!   `Content-Length` and `Transfer-Encoding`
//! - **Headers** ([`header`]): [`HeaderList`], order-preserving header storage
//! - **Request** (`request`): [`RequestHeader`] and [`Request`], the internal
//!   request representation
//! - **Body** (`body`): [`ReqBody`], the materialized body
//! - **Errors** (`error`): [`AdaptError`] and [`CompatError`]

mod framing;
pub use framing::FramingState;

pub mod header;
pub use header::HeaderList;

mod request;
pub use request::Request;
pub use request::RequestHeader;

mod body;
pub use body::ReqBody;

mod error;
pub use error::AdaptError;
pub use error::CompatError;
