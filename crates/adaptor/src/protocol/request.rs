//! Internal request representation.
//!
//! An adapted request is split into a [`RequestHeader`], holding the request
//! line, the ordered header entries and the framing decision, and a
//! [`ReqBody`] holding the body in whichever shape the framing produced.

use http::{HeaderMap, HeaderValue, Method, Uri, Version};

use crate::protocol::{FramingState, HeaderList, ReqBody};

/// The head of an adapted request.
///
/// Besides the request line this tracks the [`FramingState`] resolved from
/// the headers and, when a `Content-Length` was honored, its raw value so the
/// header can be re-emitted exactly as it was received.
#[derive(Debug, Clone)]
pub struct RequestHeader {
    method: Method,
    uri: Uri,
    host: Option<HeaderValue>,
    version: Version,
    headers: HeaderList,
    framing: FramingState,
    content_length_value: Option<HeaderValue>,
}

impl RequestHeader {
    /// Creates a header with no entries and an undetermined framing state.
    pub fn new(method: Method, uri: Uri, version: Version) -> Self {
        Self {
            method,
            uri,
            host: None,
            version,
            headers: HeaderList::new(),
            framing: FramingState::Undetermined,
            content_length_value: None,
        }
    }

    /// Returns a reference to the request's HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns a reference to the request target.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the host the request was addressed to.
    pub fn host(&self) -> Option<&HeaderValue> {
        self.host.as_ref()
    }

    pub fn set_host(&mut self, host: Option<HeaderValue>) {
        self.host = host;
    }

    /// Returns the request's HTTP version.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns the header entries in arrival order.
    pub fn headers(&self) -> &HeaderList {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderList {
        &mut self.headers
    }

    /// Returns the framing decision resolved so far.
    pub fn framing(&self) -> FramingState {
        self.framing
    }

    pub fn set_framing(&mut self, framing: FramingState) {
        self.framing = framing;
    }

    /// Returns the raw `Content-Length` value that set the current length.
    ///
    /// `None` unless the framing is `Fixed`.
    pub fn content_length_value(&self) -> Option<&HeaderValue> {
        self.content_length_value.as_ref()
    }

    pub fn set_content_length_value(&mut self, value: Option<HeaderValue>) {
        self.content_length_value = value;
    }

    /// Groups the ordered entries by name, keeping per-name order.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            map.append(name.clone(), value.clone());
        }
        map
    }

    /// Attaches a body, producing a full [`Request`].
    pub fn body<S>(self, body: ReqBody<S>) -> Request<S> {
        Request { header: self, body }
    }
}

/// An adapted request: header plus body.
#[derive(Debug)]
pub struct Request<S> {
    header: RequestHeader,
    body: ReqBody<S>,
}

impl<S> Request<S> {
    pub fn header(&self) -> &RequestHeader {
        &self.header
    }

    pub fn body(&self) -> &ReqBody<S> {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut ReqBody<S> {
        &mut self.body
    }

    pub fn method(&self) -> &Method {
        self.header.method()
    }

    pub fn uri(&self) -> &Uri {
        self.header.uri()
    }

    pub fn version(&self) -> Version {
        self.header.version()
    }

    pub fn headers(&self) -> &HeaderList {
        self.header.headers()
    }

    /// Length of the body as materialized, `None` for a streamed body.
    pub fn content_length(&self) -> Option<u64> {
        self.body.content_length()
    }

    pub fn into_parts(self) -> (RequestHeader, ReqBody<S>) {
        (self.header, self.body)
    }
}
