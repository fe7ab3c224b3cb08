pub mod errors;
pub mod message;
pub mod response;

pub use errors::MessageError;
pub use message::headers::HeaderValues;
pub use message::stream::{stream_for, Stream, StreamSource};
pub use message::{Message, MessageParts};
pub use response::{HttpResponse, IntoStatusCode, ResponseBuilder};
