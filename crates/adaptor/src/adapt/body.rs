//! Materializes a request body from its resolved framing.
//!
//! | source  | policy / framing              | result                          |
//! |---------|-------------------------------|---------------------------------|
//! | absent  | any                           | [`ReqBody::Suppressed`]         |
//! | present | always stream, or `Streamed`  | [`ReqBody::Stream`], unread     |
//! | present | `Undetermined`                | [`ReqBody::Suppressed`], unread |
//! | present | `Fixed(n)`                    | [`ReqBody::InMemory`], ≤ n bytes |
//!
//! A message with neither a length nor a streaming transfer encoding gets no
//! body unless the engine streams everything; an unbounded source is never
//! buffered.

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, error, warn};

use crate::protocol::{AdaptError, FramingState, ReqBody};

/// Upper bound of the buffer allocated before a fixed-length body is read.
///
/// The buffer still grows up to the declared length as bytes arrive, this only
/// keeps a large `Content-Length` from allocating before any data is seen.
pub(crate) const MAX_PREALLOCATED_BODY_BYTES: usize = 64 * 1024;

/// Produces the body for `framing`.
///
/// A streamed body takes the source out of `source`; a suppressed body leaves
/// it where it is, unread. A fixed-length body reads at most `n` bytes from it.
///
/// # Errors
///
/// Returns [`AdaptError::BodyReadFailure`] if the source fails while a
/// fixed-length body is read. A clean end of input before `n` bytes is not an
/// error, the shorter body is returned.
pub(crate) async fn materialize_body<S>(
    framing: FramingState,
    always_stream: bool,
    source: &mut Option<S>,
) -> Result<ReqBody<S>, AdaptError>
where
    S: AsyncRead + Unpin,
{
    if always_stream || framing.is_streamed() {
        if let Some(stream) = source.take() {
            debug!(always_stream, framing = %framing, "request body handed over as stream");
            return Ok(ReqBody::Stream(stream));
        }
    }

    let Some(reader) = source.as_mut() else {
        debug!("request has no entity body, body suppressed");
        return Ok(ReqBody::Suppressed);
    };

    let length = match framing {
        FramingState::Fixed(length) => length,
        FramingState::Undetermined => {
            debug!("request has no framing signal, body suppressed and source left unread");
            return Ok(ReqBody::Suppressed);
        }
        FramingState::Streamed => unreachable!("streamed framing always hands the source over"),
    };

    let capacity = usize::try_from(length).map_or(MAX_PREALLOCATED_BODY_BYTES, |length| length.min(MAX_PREALLOCATED_BODY_BYTES));
    let mut buf = Vec::with_capacity(capacity);

    match reader.take(length).read_to_end(&mut buf).await {
        Ok(read) => {
            if (read as u64) < length {
                warn!(expected = length, actual = read, "request body ended before content-length");
            }
            debug!(length = read, "request body read into memory");
            Ok(ReqBody::InMemory(Bytes::from(buf)))
        }
        Err(e) => {
            error!(cause = %e, expected = length, read = buf.len(), "request body read failed, aborting request");
            Err(AdaptError::body_read_failure(e))
        }
    }
}
