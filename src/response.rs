//! Immutable HTTP response.
//!
//! [`HttpResponse`] is a value object: status code, reason phrase, protocol
//! version, headers and body are fixed once it is built. Every "change" goes
//! through a `with_*` method that returns a new response and leaves the
//! receiver as it was.
//!
//! ## Status and reason phrase
//! The two always change together. When no reason is given (or an empty one),
//! the phrase comes from the [status table](status::default_reason_phrase) if
//! the code is in it; otherwise the reason stays exactly as given, which
//! means empty for an unknown code without a reason.
//!
//! ```rust
//! use http_message::{HttpResponse, Message};
//!
//! # fn main() -> Result<(), http_message::MessageError> {
//! let ok = HttpResponse::new();
//! assert_eq!(ok.status_code(), 200);
//! assert_eq!(ok.reason_phrase(), "OK");
//!
//! let custom = HttpResponse::builder()
//!     .status(299)
//!     .header("Content-Type", "text/plain")
//!     .body("hello")
//!     .build()?;
//! assert_eq!(custom.reason_phrase(), "");
//! assert_eq!(custom.body().to_string_lossy(), "hello");
//!
//! let teapot = custom.with_status(418, "");
//! assert_eq!(custom.status_code(), 299);
//! assert_eq!(teapot.reason_phrase(), "Yo'soy una tetera");
//! # Ok(()) }
//! ```
//!
//! ## Handing off to a transport
//! A serializer only needs the getters, but two shortcuts exist:
//! [`Display`](std::fmt::Display) renders the full HTTP/1.x message, and
//! [`HttpResponse::into_http`] converts into an [`http::Response`].

mod builder;
pub mod status;

use std::fmt;

use bytes::Bytes;
use http::Version;

use crate::errors::MessageError;
use crate::message::stream::Stream;
use crate::message::{Message, MessageParts};

pub use builder::ResponseBuilder;
pub use status::{default_reason_phrase, IntoStatusCode, DEFAULT_STATUS};

/// An immutable HTTP response message.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    status: u16,
    reason: String,
    message: MessageParts,
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpResponse {
    /// `200` with the default reason, version `1.1`, no headers and an empty body.
    pub fn new() -> Self {
        Self {
            status: DEFAULT_STATUS,
            reason: status::resolve_reason(DEFAULT_STATUS, ""),
            message: MessageParts::default(),
        }
    }

    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }

    /// Reason phrase; may be empty for status codes outside the table.
    pub fn reason_phrase(&self) -> &str {
        &self.reason
    }

    /// Returns a copy with a new status code and reason phrase.
    ///
    /// An empty `reason` is replaced by the table phrase when `code` is known,
    /// so a custom reason does not survive `with_status(same_code, "")`.
    pub fn with_status(&self, code: u16, reason: &str) -> Self {
        let mut new = self.clone();
        new.status = code;
        new.reason = status::resolve_reason(code, reason);
        log::trace!(
            "with_status: {} {:?} -> {} {:?}",
            self.status,
            self.reason,
            new.status,
            new.reason
        );
        new
    }

    /// Like [`with_status`](Self::with_status), for codes that still need converting.
    pub fn try_with_status(
        &self,
        code: impl IntoStatusCode,
        reason: &str,
    ) -> Result<Self, MessageError> {
        Ok(self.with_status(code.into_status_code()?, reason))
    }

    /// `HTTP/<version> <code> <reason>`, without line terminator.
    ///
    /// CR and LF are dropped from the version and reason here so the line
    /// stays a single line. [`reason_phrase`](Self::reason_phrase) still
    /// returns the reason as stored.
    pub fn status_line(&self) -> String {
        format!(
            "HTTP/{} {} {}",
            strip_line_breaks(&self.message.protocol_version),
            self.status,
            strip_line_breaks(&self.reason)
        )
    }

    /// Converts into an [`http::Response`].
    ///
    /// Fails when the version is not one `http` knows (`0.9`, `1.0`, `1.1`,
    /// `2`/`2.0`, `3`/`3.0`) or when the status is outside `100..=999`. The
    /// reason phrase is not carried over.
    pub fn into_http(self) -> Result<http::Response<Bytes>, MessageError> {
        let version = parse_version(&self.message.protocol_version)?;
        let status = http::StatusCode::from_u16(self.status)
            .map_err(|_| MessageError::InvalidStatusCode(self.status.to_string()))?;

        let mut response = http::Response::new(self.message.body.bytes());
        *response.status_mut() = status;
        *response.version_mut() = version;
        *response.headers_mut() = self.message.headers;
        Ok(response)
    }
}

impl Message for HttpResponse {
    fn parts(&self) -> &MessageParts {
        &self.message
    }

    fn parts_mut(&mut self) -> &mut MessageParts {
        &mut self.message
    }
}

impl From<http::Response<Bytes>> for HttpResponse {
    fn from(response: http::Response<Bytes>) -> Self {
        let (parts, body) = response.into_parts();
        let status = parts.status.as_u16();
        Self {
            status,
            reason: status::resolve_reason(status, ""),
            message: MessageParts {
                protocol_version: version_str(parts.version).to_string(),
                headers: parts.headers,
                body: Stream::from(body),
            },
        }
    }
}

/// Renders the response as an HTTP/1.x message: status line, headers, blank
/// line, body (lossy UTF-8).
impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\r\n", self.status_line())?;
        for (name, value) in self.message.headers.iter() {
            write!(f, "{}: {}\r\n", name, String::from_utf8_lossy(value.as_bytes()))?;
        }
        write!(f, "\r\n{}", self.message.body.to_string_lossy())
    }
}

fn strip_line_breaks(s: &str) -> String {
    s.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

fn parse_version(version: &str) -> Result<Version, MessageError> {
    match version {
        "0.9" => Ok(Version::HTTP_09),
        "1.0" => Ok(Version::HTTP_10),
        "1.1" => Ok(Version::HTTP_11),
        "2" | "2.0" => Ok(Version::HTTP_2),
        "3" | "3.0" => Ok(Version::HTTP_3),
        other => Err(MessageError::UnsupportedVersion(other.to_string())),
    }
}

fn version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
