//! Envelope codec: renders operation results as SOAP wire bytes.
//!
//! The outer wrapper is a fixed literal header/footer pair; only the
//! body payload goes through the XML serializer. Every fault is rendered
//! with HTTP 500 regardless of whether the root cause was client-side —
//! that is the fixed-status convention of the emulated protocol and is
//! preserved for wire compatibility.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};

use catalog_core::CatalogError;

use super::message::SoapFault;
use super::operation::SoapResponseBody;

/// Declared MIME type of every envelope response.
pub const SOAP_CONTENT_TYPE: &str = "application/soap+xml; charset=utf-8";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

const ENVELOPE_OPEN: &str = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:mov="http://example.com/movieservice">
   <soapenv:Header/>
   <soapenv:Body>
"#;

const ENVELOPE_CLOSE: &str = r"
   </soapenv:Body>
</soapenv:Envelope>";

/// Renders a successful operation result as a 200 envelope response.
///
/// A serialization failure here degrades to the fault path, so the
/// caller still receives an envelope.
#[must_use]
pub fn render_success(body: &SoapResponseBody) -> Response {
    let serialized = match body {
        SoapResponseBody::List(payload) => serialize_body(payload),
        SoapResponseBody::Details(payload) => serialize_body(payload),
        SoapResponseBody::Added(payload) => serialize_body(payload),
    };

    match serialized {
        Ok(xml) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, SOAP_CONTENT_TYPE)],
            wrap(&xml),
        )
            .into_response(),
        Err(err) => {
            warn!(%err, "failed to serialize response body");
            render_fault(&err)
        }
    }
}

/// Renders a failure as a fault envelope with a 500 status.
///
/// If fault serialization itself fails, falls back to an unstructured
/// plain-text 500 so the caller always receives a byte response.
#[must_use]
pub fn render_fault(err: &CatalogError) -> Response {
    let fault = SoapFault::from_error(err);
    match serialize_body(&fault) {
        Ok(xml) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, SOAP_CONTENT_TYPE)],
            wrap(&xml),
        )
            .into_response(),
        Err(ser_err) => {
            error!(%ser_err, "failed to serialize SOAP fault");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error during fault generation",
            )
                .into_response()
        }
    }
}

/// Serializes one body payload as indented XML.
fn serialize_body<T: Serialize>(payload: &T) -> Result<String, CatalogError> {
    let mut xml = String::new();
    let mut serializer = quick_xml::se::Serializer::new(&mut xml);
    serializer.indent(' ', 2);
    payload
        .serialize(serializer)
        .map_err(|e| CatalogError::Serialization(e.to_string()))?;
    Ok(xml)
}

/// Wraps serialized body XML in the fixed envelope literals.
fn wrap(body_xml: &str) -> String {
    format!("{XML_DECLARATION}{ENVELOPE_OPEN}{body_xml}{ENVELOPE_CLOSE}")
}
