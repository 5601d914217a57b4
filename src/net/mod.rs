//! Backend API transport.

pub mod http;
pub mod transport;

pub use http::HttpTransport;
pub use transport::{AuthTransport, Endpoint, TransportError, TransportResponse};
