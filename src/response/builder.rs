use http::HeaderMap;

use super::status::{resolve_reason, IntoStatusCode, DEFAULT_STATUS};
use super::HttpResponse;
use crate::errors::MessageError;
use crate::message::headers::{self, HeaderValues};
use crate::message::stream::{stream_for, Stream, StreamSource};
use crate::message::{MessageParts, DEFAULT_PROTOCOL_VERSION};

/// Everything a response is built from, before defaults are applied.
#[derive(Debug)]
struct Draft {
    status: u16,
    headers: HeaderMap,
    body: Option<StreamSource>,
    version: String,
    reason: Option<String>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            status: DEFAULT_STATUS,
            headers: HeaderMap::new(),
            body: None,
            version: DEFAULT_PROTOCOL_VERSION.to_string(),
            reason: None,
        }
    }
}

/// Builder for [`HttpResponse`].
///
/// Every setter is optional. The first invalid input (status, header name or
/// value) is kept and returned by [`build`](Self::build); later setters are
/// then ignored.
#[derive(Debug)]
pub struct ResponseBuilder {
    inner: Result<Draft, MessageError>,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self { inner: Ok(Draft::default()) }
    }
}

impl ResponseBuilder {
    #[inline]
    fn map(self, f: impl FnOnce(Draft) -> Result<Draft, MessageError>) -> Self {
        Self { inner: self.inner.and_then(f) }
    }

    pub fn status(self, status: impl IntoStatusCode) -> Self {
        self.map(|mut d| {
            d.status = status.into_status_code()?;
            Ok(d)
        })
    }

    /// Appends one or more values for `name`.
    pub fn header(self, name: &str, values: impl Into<HeaderValues>) -> Self {
        let values = values.into();
        self.map(|mut d| {
            headers::append(&mut d.headers, name, &values)?;
            Ok(d)
        })
    }

    /// Appends every `(name, values)` pair of a header mapping.
    pub fn headers<I, K, V>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<HeaderValues>,
    {
        self.map(|mut d| {
            for (name, values) in pairs {
                headers::append(&mut d.headers, name.as_ref(), &values.into())?;
            }
            Ok(d)
        })
    }

    /// Sets the body source. `None` and empty sources give an empty body.
    pub fn body(self, body: impl Into<StreamSource>) -> Self {
        let body = body.into();
        self.map(|mut d| {
            d.body = Some(body);
            Ok(d)
        })
    }

    /// Protocol version without the `HTTP/` prefix. Stored verbatim.
    pub fn version(self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.map(|mut d| {
            d.version = version;
            Ok(d)
        })
    }

    /// Explicit reason phrase. An empty one still falls back to the table.
    pub fn reason(self, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        self.map(|mut d| {
            d.reason = Some(reason);
            Ok(d)
        })
    }

    /// Applies defaults and builds the response.
    pub fn build(self) -> Result<HttpResponse, MessageError> {
        let d = self.inner?;

        let body = match d.body {
            Some(source) if !source.is_trivially_empty() => stream_for(source)?,
            _ => Stream::empty(),
        };
        let reason = resolve_reason(d.status, d.reason.as_deref().unwrap_or(""));

        Ok(HttpResponse {
            status: d.status,
            reason,
            message: MessageParts {
                protocol_version: d.version,
                headers: d.headers,
                body,
            },
        })
    }
}
