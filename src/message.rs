//! Shared message state.
//!
//! Every HTTP message kind carries the same three things next to its
//! start-line: a protocol version, a header map and a body. [`MessageParts`]
//! bundles them, and message types embed it rather than re-implementing the
//! storage. The [`Message`] trait exposes the read API and the copy-on-write
//! mutators on top of that embedded part.
//!
//! All `with_*` methods take `&self` and return a **new** message. The
//! receiver is never touched, so a message can be handed to any number of
//! readers (or threads) without locking.
//!
//! ```rust
//! use http_message::{HttpResponse, Message};
//!
//! # fn main() -> Result<(), http_message::MessageError> {
//! let base = HttpResponse::new();
//! let tagged = base.with_header("X-Trace", "abc")?;
//!
//! assert!(!base.has_header("x-trace"));
//! assert_eq!(tagged.header_line("X-TRACE"), "abc");
//! # Ok(()) }
//! ```

pub mod headers;
pub mod stream;

use std::borrow::Cow;

use http::HeaderMap;

use crate::errors::MessageError;
use headers::HeaderValues;
use stream::Stream;

/// Default protocol version for new messages.
pub const DEFAULT_PROTOCOL_VERSION: &str = "1.1";

/// Version, headers and body of a message.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageParts {
    /// Protocol version without the `HTTP/` prefix (e.g. `"1.1"`). Not validated.
    pub protocol_version: String,
    /// Case-insensitive header map.
    pub headers: HeaderMap,
    /// Message body; an empty stream when there is none.
    pub body: Stream,
}

impl Default for MessageParts {
    fn default() -> Self {
        Self {
            protocol_version: DEFAULT_PROTOCOL_VERSION.to_string(),
            headers: HeaderMap::new(),
            body: Stream::empty(),
        }
    }
}

/// Read access and copy-on-write mutators shared by all message kinds.
///
/// Implementors only provide access to their embedded [`MessageParts`]; all
/// other methods have default implementations.
pub trait Message: Clone {
    /// Returns the embedded message parts.
    fn parts(&self) -> &MessageParts;

    /// Returns the embedded message parts for mutation. Only used on fresh
    /// copies inside the `with_*` methods.
    fn parts_mut(&mut self) -> &mut MessageParts;

    fn protocol_version(&self) -> &str {
        &self.parts().protocol_version
    }

    fn headers(&self) -> &HeaderMap {
        &self.parts().headers
    }

    fn body(&self) -> &Stream {
        &self.parts().body
    }

    /// Case-insensitive header presence check.
    fn has_header(&self, name: &str) -> bool {
        headers::contains(self.headers(), name)
    }

    /// All values for `name`, in the order they were added. Empty if absent.
    ///
    /// Bytes that are not valid UTF-8 are replaced, never dropped.
    fn header(&self, name: &str) -> Vec<Cow<'_, str>> {
        headers::values(self.headers(), name)
    }

    /// All values for `name` joined by `", "`. Empty if absent.
    fn header_line(&self, name: &str) -> String {
        self.header(name).join(", ")
    }

    fn with_protocol_version(&self, version: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.parts_mut().protocol_version = version.into();
        new
    }

    /// Returns a copy where `name` holds exactly `values`.
    fn with_header(
        &self,
        name: &str,
        values: impl Into<HeaderValues>,
    ) -> Result<Self, MessageError> {
        let mut new = self.clone();
        headers::set(&mut new.parts_mut().headers, name, &values.into())?;
        Ok(new)
    }

    /// Returns a copy with `values` appended to `name`.
    fn with_added_header(
        &self,
        name: &str,
        values: impl Into<HeaderValues>,
    ) -> Result<Self, MessageError> {
        let mut new = self.clone();
        headers::append(&mut new.parts_mut().headers, name, &values.into())?;
        Ok(new)
    }

    /// Returns a copy without `name`. Unknown or invalid names yield an unchanged copy.
    fn without_header(&self, name: &str) -> Self {
        let mut new = self.clone();
        if let Ok(n) = headers::parse_name(name) {
            new.parts_mut().headers.remove(n);
        }
        new
    }

    fn with_body(&self, body: Stream) -> Self {
        let mut new = self.clone();
        new.parts_mut().body = body;
        new
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default)]
    struct Plain {
        parts: MessageParts,
    }

    impl Message for Plain {
        fn parts(&self) -> &MessageParts {
            &self.parts
        }
        fn parts_mut(&mut self) -> &mut MessageParts {
            &mut self.parts
        }
    }

    #[test]
    fn defaults() {
        let m = Plain::default();
        assert_eq!(m.protocol_version(), "1.1");
        assert!(m.headers().is_empty());
        assert!(m.body().is_empty());
    }

    #[test]
    fn with_header_leaves_receiver_alone() {
        let m = Plain::default();
        let m2 = m.with_header("Content-Type", "text/plain").unwrap();

        assert!(!m.has_header("content-type"));
        assert!(m2.has_header("CONTENT-TYPE"));
        assert_eq!(m2.header("content-type"), vec!["text/plain"]);
    }

    #[test]
    fn added_headers_join_into_line() {
        let m = Plain::default()
            .with_header("Accept", "text/html")
            .unwrap()
            .with_added_header("accept", vec!["application/json", "*/*"])
            .unwrap();

        assert_eq!(m.header_line("Accept"), "text/html, application/json, */*");
    }

    #[test]
    fn without_header_removes_all_values() {
        let m = Plain::default()
            .with_header("X-A", ["1", "2"])
            .unwrap()
            .with_header("X-B", "3")
            .unwrap();
        let m2 = m.without_header("x-a");

        assert!(m.has_header("X-A"));
        assert!(!m2.has_header("X-A"));
        assert!(m2.has_header("X-B"));

        // invalid name is a no-op
        let m3 = m2.without_header("not a header");
        assert_eq!(m3.headers(), m2.headers());
    }

    #[test]
    fn header_errors_propagate() {
        let m = Plain::default();
        assert!(matches!(
            m.with_header("bad name", "v"),
            Err(MessageError::InvalidHeaderName(_))
        ));
        assert!(matches!(
            m.with_added_header("X-Ok", "line\nbreak"),
            Err(MessageError::InvalidHeaderValue { .. })
        ));
    }

    #[test]
    fn version_and_body_are_copy_on_write() {
        let m = Plain::default();
        let m2 = m
            .with_protocol_version("2")
            .with_body(stream::stream_for("payload").unwrap());

        assert_eq!(m.protocol_version(), "1.1");
        assert!(m.body().is_empty());
        assert_eq!(m2.protocol_version(), "2");
        assert_eq!(m2.body().to_string_lossy(), "payload");
    }

    #[test]
    fn non_ascii_header_reads_back() {
        let m = Plain::default()
            .with_header("Content-Disposition", "attachment; filename=niño.txt")
            .unwrap();

        assert!(m.has_header("content-disposition"));
        assert_eq!(m.header("Content-Disposition"), vec!["attachment; filename=niño.txt"]);
        assert_eq!(m.header_line("CONTENT-DISPOSITION"), "attachment; filename=niño.txt");

        let m2 = m.with_added_header("content-disposition", "größe=1").unwrap();
        assert_eq!(
            m2.header_line("content-disposition"),
            "attachment; filename=niño.txt, größe=1"
        );
    }

    #[test]
    fn missing_header_line_is_empty() {
        assert_eq!(Plain::default().header_line("X-None"), "");
    }
}
