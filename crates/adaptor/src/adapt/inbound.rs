use http::header::HOST;
use http::HeaderValue;
use tokio::io::AsyncRead;
use tracing::trace;

use crate::adapt::body::materialize_body;
use crate::adapt::framing::resolve_framing;
use crate::config::EngineConfig;
use crate::protocol::{AdaptError, Request, RequestHeader};

/// Adapts `req` with the default [`EngineConfig`].
///
/// See [`adapt_with_engine`].
pub async fn adapt<S>(req: &mut http::Request<Option<S>>) -> Result<Request<S>, AdaptError>
where
    S: AsyncRead + Unpin,
{
    adapt_with_engine(&EngineConfig::default(), req).await
}

/// Builds an internal [`Request`] from an external `http::Request`.
///
/// The request line is copied as is, every header is copied in iteration
/// order while the framing is resolved from `Content-Length` and
/// `Transfer-Encoding`, and the body is then materialized from that framing
/// and `engine`:
///
/// - a streamed body moves the source out of `req`
/// - a fixed-length body reads at most the declared number of bytes from it
/// - a suppressed body leaves it in `req`, unread
///
/// Iteration order is `http::HeaderMap`'s: all values of one name are visited
/// together, in the order the name was first inserted. Headers that arrived as
/// `Content-Length: 10`, `Transfer-Encoding: chunked`, `Content-Length: abc`
/// are therefore resolved as both lengths first, and the malformed second one
/// is an error even though it came after the streaming encoding.
///
/// # Errors
///
/// - [`AdaptError::MalformedLength`] if an honored `Content-Length` is not a
///   non-negative integer. The body source has not been touched.
/// - [`AdaptError::BodyReadFailure`] if the source fails while a fixed-length
///   body is read. This is unrecoverable: the caller must drop the request and
///   close the connection it came from.
pub async fn adapt_with_engine<S>(engine: &EngineConfig, req: &mut http::Request<Option<S>>) -> Result<Request<S>, AdaptError>
where
    S: AsyncRead + Unpin,
{
    let mut header = RequestHeader::new(req.method().clone(), req.uri().clone(), req.version());
    header.set_host(request_host(req));

    resolve_framing(&mut header, req.headers())?;
    trace!(method = %header.method(), uri = %header.uri(), framing = %header.framing(), "resolved request framing");

    let body = materialize_body(header.framing(), engine.always_stream(), req.body_mut()).await?;
    Ok(header.body(body))
}

/// The `Host` header if present, otherwise the authority of the target.
fn request_host<B>(req: &http::Request<B>) -> Option<HeaderValue> {
    if let Some(host) = req.headers().get(HOST) {
        return Some(host.clone());
    }
    req.uri().authority().and_then(|authority| HeaderValue::from_str(authority.as_str()).ok())
}
