use std::fmt;

/// The framing decision reached for a request body.
///
/// The state starts as [`FramingState::Undetermined`] and is driven by the
/// `Content-Length` and `Transfer-Encoding` headers in the order they arrive:
/// - Known length: read exactly that many bytes
/// - Streamed: chunked or otherwise unbounded, length unknown
/// - Undetermined: no framing signal was seen at all
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FramingState {
    /// No `Content-Length` or streaming `Transfer-Encoding` seen yet
    #[default]
    Undetermined,
    /// Body length is unknown, the body is consumed as a stream
    Streamed,
    /// Body length declared by `Content-Length`
    Fixed(u64),
}

impl FramingState {
    /// Returns true if a streaming transfer encoding has been seen
    #[inline]
    pub fn is_streamed(&self) -> bool {
        matches!(self, FramingState::Streamed)
    }

    /// Returns true if no framing signal has been seen
    #[inline]
    pub fn is_undetermined(&self) -> bool {
        matches!(self, FramingState::Undetermined)
    }

    /// Returns true if the body length is declared
    #[inline]
    pub fn is_fixed(&self) -> bool {
        matches!(self, FramingState::Fixed(_))
    }

    /// Returns the declared length, if any
    pub fn content_length(&self) -> Option<u64> {
        match self {
            FramingState::Fixed(length) => Some(*length),
            FramingState::Undetermined | FramingState::Streamed => None,
        }
    }
}

impl fmt::Display for FramingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramingState::Undetermined => f.write_str("undetermined"),
            FramingState::Streamed => f.write_str("streamed"),
            FramingState::Fixed(length) => write!(f, "fixed({length})"),
        }
    }
}
