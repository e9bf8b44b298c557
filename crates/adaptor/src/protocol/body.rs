//! Request body representations produced by the adaptor.
//!
//! A request body ends up in exactly one of three shapes, chosen from the
//! resolved [`FramingState`](crate::protocol::FramingState) and the engine policy:
//!
//! - [`ReqBody::InMemory`]: the declared number of bytes were read up front
//! - [`ReqBody::Stream`]: the original source, handed over unread
//! - [`ReqBody::Suppressed`]: no body, zero length
//!
//! [`ReqBody`] implements [`http_body::Body`], so it can be consumed with the
//! usual `http-body-util` helpers whichever shape it has.

use std::io;
use std::mem;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

use bytes::{Bytes, BytesMut};
use http_body::{Body, Frame, SizeHint};
use tokio::io::AsyncRead;
use tokio_util::io::poll_read_buf;

/// Read size used when pulling frames out of a streamed body.
const STREAM_CHUNK_SIZE: usize = 8 * 1024;

/// The body of an adapted request.
#[derive(Debug)]
pub enum ReqBody<S> {
    /// Fully read body, length is exactly the buffer length
    InMemory(Bytes),
    /// Still-open source, length unknown
    Stream(S),
    /// No body, explicit zero length
    Suppressed,
}

impl<S> ReqBody<S> {
    #[inline]
    pub fn is_in_memory(&self) -> bool {
        matches!(self, ReqBody::InMemory(_))
    }

    #[inline]
    pub fn is_stream(&self) -> bool {
        matches!(self, ReqBody::Stream(_))
    }

    #[inline]
    pub fn is_suppressed(&self) -> bool {
        matches!(self, ReqBody::Suppressed)
    }

    /// Returns the body length, or `None` when the body is a stream.
    pub fn content_length(&self) -> Option<u64> {
        match self {
            ReqBody::InMemory(bytes) => Some(bytes.len() as u64),
            ReqBody::Stream(_) => None,
            ReqBody::Suppressed => Some(0),
        }
    }

    /// Returns the buffered bytes if the body was read into memory
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            ReqBody::InMemory(bytes) => Some(bytes),
            ReqBody::Stream(_) | ReqBody::Suppressed => None,
        }
    }

    /// Consumes the body and returns the original source if it was streamed
    pub fn into_stream(self) -> Option<S> {
        match self {
            ReqBody::Stream(source) => Some(source),
            ReqBody::InMemory(_) | ReqBody::Suppressed => None,
        }
    }
}

impl<S> Body for ReqBody<S>
where
    S: AsyncRead + Unpin,
{
    type Data = Bytes;
    type Error = io::Error;

    fn poll_frame(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        match self.get_mut() {
            ReqBody::InMemory(bytes) => {
                if bytes.is_empty() {
                    return Poll::Ready(None);
                }
                Poll::Ready(Some(Ok(Frame::data(mem::take(bytes)))))
            }

            ReqBody::Stream(source) => {
                let mut buf = BytesMut::with_capacity(STREAM_CHUNK_SIZE);
                match ready!(poll_read_buf(Pin::new(source), cx, &mut buf)) {
                    Ok(0) => Poll::Ready(None),
                    Ok(_) => Poll::Ready(Some(Ok(Frame::data(buf.freeze())))),
                    Err(e) => Poll::Ready(Some(Err(e))),
                }
            }

            ReqBody::Suppressed => Poll::Ready(None),
        }
    }

    fn is_end_stream(&self) -> bool {
        match self {
            ReqBody::InMemory(bytes) => bytes.is_empty(),
            ReqBody::Stream(_) => false,
            ReqBody::Suppressed => true,
        }
    }

    fn size_hint(&self) -> SizeHint {
        match self.content_length() {
            Some(length) => SizeHint::with_exact(length),
            None => SizeHint::default(),
        }
    }
}
