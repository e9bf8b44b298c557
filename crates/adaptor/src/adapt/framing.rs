//! Resolves the framing of a request from its headers.
//!
//! Headers are processed strictly in arrival order. Every entry is copied into
//! the destination [`RequestHeader`] whatever its effect on framing, and the
//! [`FramingState`] is driven by two rules:
//!
//! - `Content-Length` sets `Fixed(n)` unless the state is already `Streamed`
//! - `Transfer-Encoding` with any value other than `trailer` sets `Streamed`,
//!   overriding an earlier length
//!
//! so a streaming transfer encoding always wins over a declared length
//! (refer: <https://www.rfc-editor.org/rfc/rfc9112.html#section-6.3>) and can
//! not be undone by a later `Content-Length`.

use http::header::{CONTENT_LENGTH, TRANSFER_ENCODING};
use http::{HeaderName, HeaderValue};
use tracing::{trace, warn};

use crate::protocol::{AdaptError, FramingState, RequestHeader};

/// Copies `entries` into `header` and updates its framing state.
///
/// # Errors
///
/// Returns [`AdaptError::MalformedLength`] for a `Content-Length` that is not a
/// non-negative integer and would have been honored.
pub(crate) fn resolve_framing<'a, I>(header: &mut RequestHeader, entries: I) -> Result<(), AdaptError>
where
    I: IntoIterator<Item = (&'a HeaderName, &'a HeaderValue)>,
{
    let entries = entries.into_iter();
    header.headers_mut().reserve(entries.size_hint().0);

    for (name, value) in entries {
        header.headers_mut().append(name.clone(), value.clone());

        if *name == CONTENT_LENGTH {
            if header.framing().is_streamed() {
                warn!(value = ?value, "content-length ignored, body framing already streamed");
                continue;
            }

            let length = parse_content_length(value)?;
            trace!(from = %header.framing(), length, "framing fixed by content-length");
            header.set_framing(FramingState::Fixed(length));
            header.set_content_length_value(Some(value.clone()));
        } else if *name == TRANSFER_ENCODING && !is_trailer(value) {
            trace!(from = %header.framing(), value = ?value, "framing streamed by transfer-encoding");
            header.set_framing(FramingState::Streamed);
            header.set_content_length_value(None);
        }
    }

    Ok(())
}

fn parse_content_length(value: &HeaderValue) -> Result<u64, AdaptError> {
    let text = value.to_str().map_err(|e| AdaptError::malformed_length(value, e))?;
    text.trim().parse::<u64>().map_err(|e| AdaptError::malformed_length(value, e))
}

fn is_trailer(value: &HeaderValue) -> bool {
    const TRAILER: &[u8] = b"trailer";
    value.as_bytes().trim_ascii().eq_ignore_ascii_case(TRAILER)
}

#[cfg(test)]
mod tests {
    use http::header::{ACCEPT, HOST};
    use http::{Method, Uri, Version};

    use super::*;

    fn header() -> RequestHeader {
        RequestHeader::new(Method::POST, Uri::from_static("/"), Version::HTTP_11)
    }

    fn entries(pairs: &[(&'static str, &'static str)]) -> Vec<(HeaderName, HeaderValue)> {
        pairs.iter().map(|(n, v)| (HeaderName::from_static(n), HeaderValue::from_static(v))).collect()
    }

    fn resolve(pairs: &[(&'static str, &'static str)]) -> Result<RequestHeader, AdaptError> {
        let entries = entries(pairs);
        let mut header = header();
        resolve_framing(&mut header, entries.iter().map(|(n, v)| (n, v)))?;
        Ok(header)
    }

    #[test]
    fn no_length_headers() {
        let header = resolve(&[("host", "127.0.0.1:8080"), ("accept", "*/*")]).unwrap();
        assert_eq!(header.framing(), FramingState::Undetermined);
        assert_eq!(header.content_length_value(), None);
    }

    #[test]
    fn content_length_fixes_length() {
        let header = resolve(&[("content-length", "10")]).unwrap();
        assert_eq!(header.framing(), FramingState::Fixed(10));
        assert_eq!(header.content_length_value(), Some(&HeaderValue::from_static("10")));
    }

    #[test]
    fn content_length_keeps_raw_value() {
        let header = resolve(&[("content-length", " 0042 ")]).unwrap();
        assert_eq!(header.framing(), FramingState::Fixed(42));
        assert_eq!(header.content_length_value(), Some(&HeaderValue::from_static(" 0042 ")));
    }

    #[test]
    fn later_content_length_overwrites() {
        let header = resolve(&[("content-length", "10"), ("content-length", "3")]).unwrap();
        assert_eq!(header.framing(), FramingState::Fixed(3));
        assert_eq!(header.content_length_value(), Some(&HeaderValue::from_static("3")));
    }

    #[test]
    fn transfer_encoding_overrides_length() {
        let header = resolve(&[("content-length", "10"), ("transfer-encoding", "chunked")]).unwrap();
        assert_eq!(header.framing(), FramingState::Streamed);
        assert_eq!(header.content_length_value(), None);
    }

    #[test]
    fn trailer_encoding_keeps_length_value() {
        let header = resolve(&[("content-length", "10"), ("transfer-encoding", "trailer")]).unwrap();
        assert_eq!(header.framing(), FramingState::Fixed(10));
        assert_eq!(header.content_length_value(), Some(&HeaderValue::from_static("10")));
    }

    #[test]
    fn malformed_length_after_streamed_in_arrival_order() {
        let header = resolve(&[("content-length", "10"), ("transfer-encoding", "chunked"), ("content-length", "abc")]).unwrap();
        assert_eq!(header.framing(), FramingState::Streamed);
        assert_eq!(header.content_length_value(), None);
        assert_eq!(header.headers().len(), 3);
    }

    #[test]
    fn length_after_transfer_encoding_is_ignored() {
        let header = resolve(&[("transfer-encoding", "chunked"), ("content-length", "10")]).unwrap();
        assert_eq!(header.framing(), FramingState::Streamed);
        assert_eq!(header.content_length_value(), None);
    }

    #[test]
    fn malformed_length_ignored_after_streamed() {
        let header = resolve(&[("transfer-encoding", "gzip"), ("content-length", "notanumber")]).unwrap();
        assert_eq!(header.framing(), FramingState::Streamed);
    }

    #[test]
    fn any_non_trailer_encoding_streams() {
        for value in ["chunked", "gzip", "gzip, chunked", "identity"] {
            let pairs = [("transfer-encoding", value)];
            let header = resolve(&pairs).unwrap();
            assert_eq!(header.framing(), FramingState::Streamed, "transfer-encoding: {value}");
        }
    }

    #[test]
    fn trailer_encoding_is_ignored() {
        let header = resolve(&[("content-length", "5"), ("transfer-encoding", "trailer")]).unwrap();
        assert_eq!(header.framing(), FramingState::Fixed(5));

        let header = resolve(&[("transfer-encoding", "Trailer")]).unwrap();
        assert_eq!(header.framing(), FramingState::Undetermined);
    }

    #[test]
    fn malformed_length() {
        for value in ["notanumber", "-1", "1.5", "", "10 10"] {
            let pairs = [("content-length", value)];
            let result = resolve(&pairs);
            assert!(matches!(result, Err(AdaptError::MalformedLength { .. })), "content-length: {value:?}");
        }
    }

    #[test]
    fn copies_every_entry_in_order() {
        let pairs = [
            ("host", "127.0.0.1:8080"),
            ("transfer-encoding", "chunked"),
            ("accept", "text/html"),
            ("content-length", "10"),
            ("accept", "*/*"),
            ("content-length", "12"),
        ];
        let header = resolve(&pairs).unwrap();

        let copied: Vec<_> = header.headers().iter().map(|(n, v)| (n.as_str(), v.to_str().unwrap())).collect();
        assert_eq!(copied, pairs.to_vec());
        assert_eq!(header.headers().get(&HOST), Some(&HeaderValue::from_static("127.0.0.1:8080")));
        assert_eq!(header.headers().get(&ACCEPT), Some(&HeaderValue::from_static("*/*")));
    }
}
