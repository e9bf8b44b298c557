//! Best-effort conversion of an adapted request back into an `http::Request`.
//!
//! Only the basics survive the trip: method, target, headers and a fully
//! buffered body. Trailers, streaming and version specific details are not
//! preserved.

use bytes::Bytes;
use http::uri::{PathAndQuery, Scheme};
use http::Uri;
use http_body_util::{BodyExt, Full};
use tokio::io::AsyncRead;
use tracing::trace;

use crate::protocol::{CompatError, Request, RequestHeader};

/// Converts `req` into an `http::Request` with an in-memory body.
///
/// A streamed body is read to the end before the request is returned. Headers
/// are grouped by name: values of one name keep their order, the interleaving
/// of different names does not.
///
/// # Errors
///
/// - [`CompatError::InvalidRequest`] if the method or target is rejected by `http`
/// - [`CompatError::Body`] if buffering a streamed body fails
pub async fn to_compat<S>(req: Request<S>) -> Result<http::Request<Full<Bytes>>, CompatError>
where
    S: AsyncRead + Unpin,
{
    let (header, body) = req.into_parts();

    let mut builder = http::Request::builder().method(header.method().clone()).uri(compat_uri(&header)?);
    if let Some(headers) = builder.headers_mut() {
        *headers = header.to_header_map();
    }

    let bytes = body.collect().await.map_err(CompatError::body)?.to_bytes();
    trace!(method = %header.method(), body_size = bytes.len(), "built compat request");

    Ok(builder.body(Full::new(bytes))?)
}

/// Makes an origin-form target absolute when the host is known.
fn compat_uri(header: &RequestHeader) -> Result<Uri, CompatError> {
    let uri = header.uri();
    match (uri.authority(), header.host()) {
        (None, Some(host)) if uri.path().starts_with('/') => {
            let path_and_query = uri.path_and_query().map_or("/", PathAndQuery::as_str);
            Uri::builder()
                .scheme(Scheme::HTTP)
                .authority(host.as_bytes())
                .path_and_query(path_and_query)
                .build()
                .map_err(CompatError::invalid_request)
        }
        _ => Ok(uri.clone()),
    }
}
