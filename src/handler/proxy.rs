//! Upstream relay module
//!
//! Forwards one request to the fixed explorer backend over HTTPS and relays
//! the response. Bodies are buffered whole in both directions; a single
//! best-effort exchange with no retry and no timeout.

use crate::config::{AppState, ProxyConfig};
use crate::http::response;
use crate::logger;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{header, Request, Response};

const DEFAULT_UPSTREAM_CONTENT_TYPE: &str = "application/json";

/// Relay a request to the upstream explorer API
///
/// `sub_path` is the request path with the local prefix already stripped.
/// Any transport failure, including a failed read of the inbound body,
/// answers 502; upstream error statuses pass through untouched.
pub async fn relay<B>(req: Request<B>, sub_path: &str, state: &AppState) -> Response<Full<Bytes>>
where
    B: hyper::body::Body,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let query = req.uri().query().map(ToString::to_string);
    let url = upstream_url(&state.config.proxy, sub_path, query.as_deref());

    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_error(&format!("Failed to buffer proxy request body: {e}"));
            return proxy_error_response(&e);
        }
    };

    let mut outbound = state.http_client.request(method, &url);
    if !body.is_empty() {
        // reqwest derives content-length from the buffered body
        outbound = outbound
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .body(body);
    }

    match outbound.send().await {
        Ok(upstream) => {
            let status = upstream.status();
            let content_type = upstream
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or(DEFAULT_UPSTREAM_CONTENT_TYPE)
                .to_string();

            match upstream.bytes().await {
                Ok(bytes) => response::build_relay_response(status, &content_type, bytes),
                Err(e) => {
                    logger::log_error(&format!(
                        "Failed to read upstream response from {url}: {e}"
                    ));
                    proxy_error_response(&e)
                }
            }
        }
        Err(e) => {
            logger::log_error(&format!("Upstream request to {url} failed: {e}"));
            proxy_error_response(&e)
        }
    }
}

/// Upstream URL for a stripped sub-path, keeping the inbound query string
fn upstream_url(cfg: &ProxyConfig, sub_path: &str, query: Option<&str>) -> String {
    let mut url = format!(
        "https://{}{}/{}",
        cfg.upstream_host, cfg.upstream_base_path, sub_path
    );
    if let Some(q) = query {
        url.push('?');
        url.push_str(q);
    }
    url
}

fn proxy_error_response(error: &impl std::fmt::Display) -> Response<Full<Bytes>> {
    response::build_502_response(&format!("Explorer proxy error: {error}"))
}
