//! HTTP layer: the [`Transport`] seam, its reqwest implementation, and
//! interpretation of the service's response envelopes.

mod envelope;
#[cfg(test)]
pub mod mock;
mod transport;

pub(crate) use envelope::parse_envelope;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
