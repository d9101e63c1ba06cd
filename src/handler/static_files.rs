//! Fixed-file serving module
//!
//! Reads one of the two configured files fresh on every request and builds
//! the response. No cache and no path mapping: the request path never
//! touches the filesystem.

use crate::handler::router::RequestContext;
use crate::http::{self, response};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Serve one of the fixed files
///
/// A failed read answers 500 with the underlying error text; the process
/// itself is unaffected and the next request retries the read.
pub async fn serve_fixed_file(
    ctx: &RequestContext<'_>,
    file_path: &Path,
    content_type: &'static str,
) -> Response<Full<Bytes>> {
    match fs::read(file_path).await {
        Ok(content) => {
            if ctx.access_log {
                logger::log_response(content.len());
            }
            response::build_file_response(Bytes::from(content), content_type, ctx.is_head)
        }
        Err(e) => {
            let name = display_name(file_path);
            logger::log_error(&format!("Failed to read {name}: {e}"));
            http::build_500_response(&format!("Failed to read {name}: {e}"))
        }
    }
}

/// File name used in error bodies; falls back to the full path display
fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map_or_else(|| path.display().to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn ctx(is_head: bool) -> RequestContext<'static> {
        RequestContext {
            path: "/",
            is_head,
            access_log: false,
        }
    }

    #[tokio::test]
    async fn test_serve_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, "<html>hi</html>").unwrap();

        let resp = serve_fixed_file(&ctx(false), &path, CONTENT_TYPE_HTML).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], CONTENT_TYPE_HTML);
        assert_eq!(resp.headers()["cache-control"], "no-store");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<html>hi</html>");
    }

    #[tokio::test]
    async fn test_head_sends_length_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dapps.json");
        std::fs::write(&path, "[1,2,3]").unwrap();

        let resp = serve_fixed_file(&ctx(true), &path, CONTENT_TYPE_JSON).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-length"], "7");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_yields_500_with_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dapps.json");

        let resp = serve_fixed_file(&ctx(false), &path, CONTENT_TYPE_JSON).await;
        assert_eq!(resp.status(), 500);
        assert_eq!(resp.headers()["content-type"], "text/plain");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("Failed to read dapps.json"));
        assert!(text.ends_with('\n'));
    }

    #[tokio::test]
    async fn test_file_is_reread_on_every_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dapps.json");

        std::fs::write(&path, "[]").unwrap();
        let resp = serve_fixed_file(&ctx(false), &path, CONTENT_TYPE_JSON).await;
        assert_eq!(resp.status(), 200);

        std::fs::remove_file(&path).unwrap();
        let resp = serve_fixed_file(&ctx(false), &path, CONTENT_TYPE_JSON).await;
        assert_eq!(resp.status(), 500);
    }
}
