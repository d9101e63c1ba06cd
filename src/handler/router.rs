//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: classifies each request by path,
//! then serves a fixed file or delegates to the proxy relay.

use crate::config::AppState;
use crate::handler::{proxy, static_files};
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Uri};
use std::convert::Infallible;
use std::sync::Arc;

/// Fixed route for the dapps list; the file behind it is configurable
pub const DAPPS_ROUTE: &str = "/dapps.json";

/// Request context for the static file backends
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling
///
/// Generic over the request body so tests can drive the dispatch with
/// `Full<Bytes>` while the server hands in `hyper::body::Incoming`.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: hyper::body::Body,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = request_path(req.uri());
    let access_log = state.config.logging.access_log;

    if access_log {
        logger::log_request(&method, req.uri(), req.version());
    }

    // 1. Proxy routes come first and skip method filtering: any method is
    //    forwarded to the upstream as-is
    if let Some(sub_path) = path.strip_prefix(state.config.proxy.local_prefix.as_str()) {
        return Ok(proxy::relay(req, sub_path, &state).await);
    }

    // 2. Everything local is read-only
    if method != Method::GET && method != Method::HEAD {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return Ok(http::build_405_response());
    }

    let ctx = RequestContext {
        path: &path,
        is_head: method == Method::HEAD,
        access_log,
    };

    // 3. The dapps list on its fixed route, the landing page on everything
    //    else (`/` included)
    let response = if ctx.path == DAPPS_ROUTE {
        static_files::serve_fixed_file(
            &ctx,
            &state.config.files.dapps_path,
            static_files::CONTENT_TYPE_JSON,
        )
        .await
    } else {
        static_files::serve_fixed_file(
            &ctx,
            &state.config.files.index_path,
            static_files::CONTENT_TYPE_HTML,
        )
        .await
    };

    Ok(response)
}

/// Path component of the request target
///
/// Authority-form targets parse to an empty path; the raw target string is
/// used instead, so a request is never rejected for its target.
fn request_path(uri: &Uri) -> String {
    let path = uri.path();
    if path.is_empty() {
        uri.to_string()
    } else {
        path.to_string()
    }
}
