//! HTTP response building module
//!
//! One builder per response shape the gateway emits. Builders never panic:
//! a failed build is logged and degraded to a bare response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD")
        .body(Full::new(Bytes::from("Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("Method Not Allowed")))
        })
}

/// Build 500 response for a failed file read
///
/// The message lands in the body newline-terminated, matching what the
/// landing page surfaces to a curious operator with curl.
pub fn build_500_response(message: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(format!("{message}\n"))))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 502 response for a failed upstream relay
pub fn build_502_response(message: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(502)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(format!("{message}\n"))))
        .unwrap_or_else(|e| {
            log_build_error("502", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 response for one of the fixed files
///
/// `Content-Length` is set explicitly so HEAD responses still advertise the
/// file size while carrying no body. Served with `no-store`: the files may
/// be swapped on disk at any time and are re-read per request.
pub fn build_file_response(
    data: Bytes,
    content_type: &'static str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Cache-Control", "no-store")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the pass-through response for an upstream relay
///
/// Only the upstream status and content type survive; the CORS header is
/// added so the landing page can call the relay from the browser.
pub fn build_relay_response(
    status: StatusCode,
    content_type: &str,
    body: Bytes,
) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("relay", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
