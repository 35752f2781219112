//! SOAP-style movie service: the ad-hoc envelope protocol layer.
//!
//! This is the one place in the repository doing protocol-level parsing
//! and serialization with fallback logic. Incoming bodies are classified
//! by marker substrings ([`operation`]), parameters are extracted with a
//! strict-decode-then-text-scan pipeline, and responses are rendered as
//! hand-framed SOAP envelopes ([`envelope`]).

pub mod envelope;
pub mod handler;
pub mod message;
pub mod operation;

pub use handler::{router, MovieStore};
pub use operation::{classify, dispatch, SoapOperation};
