//! Message body streams.
//!
//! A [`Stream`] is the body of a message. It is **immutable**: the bytes are
//! held in a reference-counted [`Bytes`] buffer, so cloning a message (which
//! every `with_*` mutator does) shares the body instead of copying it.
//!
//! Reading happens through [`Stream::reader`], which hands out an independent
//! `Read + Seek` cursor. Two readers over the same body never disturb each
//! other's position.
//!
//! Arbitrary sources (strings, byte buffers, anything implementing
//! [`std::io::Read`]) are turned into a stream with [`stream_for`].
//!
//! ```rust
//! use std::io::Read;
//! use http_message::{stream_for, Stream};
//!
//! # fn main() -> Result<(), http_message::MessageError> {
//! let body = stream_for("hello")?;
//! let mut out = String::new();
//! body.reader().read_to_string(&mut out)?;
//! assert_eq!(out, "hello");
//!
//! assert!(Stream::empty().is_empty());
//! # Ok(()) }
//! ```
use std::fmt;
use std::io::{Cursor, Read};

use bytes::Bytes;

use crate::errors::MessageError;

/// Immutable, cheaply clonable message body.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stream {
    data: Bytes,
}

impl Stream {
    /// Returns a zero-length stream.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of bytes in the body.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns a new handle to the underlying buffer (no copy).
    pub fn bytes(&self) -> Bytes {
        self.data.clone()
    }

    /// Returns a readable and seekable view positioned at the start of the body.
    pub fn reader(&self) -> Cursor<Bytes> {
        Cursor::new(self.data.clone())
    }

    /// Body decoded as UTF-8, invalid sequences replaced.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream").field("len", &self.data.len()).finish()
    }
}

impl From<Bytes> for Stream {
    fn from(data: Bytes) -> Self {
        Self { data }
    }
}

/// Anything that can become a body through [`stream_for`].
pub enum StreamSource {
    Bytes(Bytes),
    Stream(Stream),
    Reader(Box<dyn Read + Send>),
}

impl StreamSource {
    /// Wraps a reader. It is drained when the stream is created.
    pub fn reader<R: Read + Send + 'static>(reader: R) -> Self {
        StreamSource::Reader(Box::new(reader))
    }

    /// `true` when the source carries no bytes and needs no draining.
    pub(crate) fn is_trivially_empty(&self) -> bool {
        match self {
            StreamSource::Bytes(b) => b.is_empty(),
            StreamSource::Stream(s) => s.is_empty(),
            StreamSource::Reader(_) => false,
        }
    }
}

impl fmt::Debug for StreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamSource::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            StreamSource::Stream(s) => f.debug_tuple("Stream").field(s).finish(),
            StreamSource::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

impl From<&str> for StreamSource {
    fn from(s: &str) -> Self {
        StreamSource::Bytes(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for StreamSource {
    fn from(s: String) -> Self {
        StreamSource::Bytes(Bytes::from(s))
    }
}

impl From<&[u8]> for StreamSource {
    fn from(b: &[u8]) -> Self {
        StreamSource::Bytes(Bytes::copy_from_slice(b))
    }
}

impl From<Vec<u8>> for StreamSource {
    fn from(b: Vec<u8>) -> Self {
        StreamSource::Bytes(Bytes::from(b))
    }
}

impl From<Bytes> for StreamSource {
    fn from(b: Bytes) -> Self {
        StreamSource::Bytes(b)
    }
}

impl From<Stream> for StreamSource {
    fn from(s: Stream) -> Self {
        StreamSource::Stream(s)
    }
}

impl<T: Into<StreamSource>> From<Option<T>> for StreamSource {
    fn from(source: Option<T>) -> Self {
        source
            .map(Into::into)
            .unwrap_or_else(|| StreamSource::Bytes(Bytes::new()))
    }
}

/// Creates a [`Stream`] from the given source.
///
/// Strings and buffers are wrapped without copying where possible, an
/// existing stream is returned as-is, and readers are read to the end. Errors
/// from the reader are returned unchanged as [`MessageError::Io`].
pub fn stream_for(source: impl Into<StreamSource>) -> Result<Stream, MessageError> {
    match source.into() {
        StreamSource::Bytes(data) => Ok(Stream { data }),
        StreamSource::Stream(stream) => Ok(stream),
        StreamSource::Reader(mut reader) => {
            let mut buf = Vec::new();
            let n = reader.read_to_end(&mut buf)?;
            log::debug!("stream_for: drained {} bytes from reader", n);
            Ok(Stream { data: Bytes::from(buf) })
        }
    }
}
