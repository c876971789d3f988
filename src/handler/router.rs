//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, and access logging.

use crate::config::AppState;
use crate::handler::scoring;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use chrono::Local;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

/// Path prefix of the scoring endpoint; the remainder is the word parameter
const SCORE_PREFIX: &str = "/score/";

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let access_log = state.cached_access_log.load(Ordering::Relaxed);

    let method = req.method().clone();
    let uri = req.uri().clone();
    let version = req.version();
    let is_head = method == Method::HEAD;
    let referer = header_value(&req, "referer");
    let user_agent = header_value(&req, "user-agent");

    // 1. Check HTTP method
    let response = match check_http_method(&method, state.config.http.enable_cors) {
        Some(resp) => resp,
        // 2. Dispatch on path
        None => route_request(uri.path(), &state, access_log),
    };

    // HEAD gets the same status and headers with the body stripped
    let response = if is_head {
        response.map(|_| Full::new(Bytes::new()))
    } else {
        response
    };

    // 3. Emit one access log line per completed request
    if access_log {
        let entry = AccessLogEntry {
            remote_addr: peer_addr.to_string(),
            time: Local::now(),
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(ToString::to_string),
            http_version: version_label(version).to_string(),
            status: response.status().as_u16(),
            body_bytes: response.body().size_hint().exact().unwrap_or(0),
            referer,
            user_agent,
            request_time_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        };
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return an early response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Route request based on path
fn route_request(path: &str, state: &Arc<AppState>, access_log: bool) -> Response<Full<Bytes>> {
    // Health check endpoints (highest priority, always fast)
    let health = &state.config.routes.health;
    if health.enabled && (path == health.liveness_path || path == health.readiness_path) {
        return http::build_health_response("ok");
    }

    if let Some(raw) = path.strip_prefix(SCORE_PREFIX) {
        if raw.is_empty() {
            // Route matched but the word parameter is missing
            return http::build_empty_bad_request();
        }
        if raw.contains('/') {
            // Word is a single path segment
            return http::build_404_response();
        }
        return scoring::score_word(raw, access_log);
    }
    if path == "/score" {
        return http::build_empty_bad_request();
    }

    http::build_404_response()
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    fn test_state() -> Arc<AppState> {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        Arc::new(AppState::new(&cfg))
    }

    async fn body_json(resp: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_score_route_success() {
        let resp = route_request("/score/hello", &test_state(), false);
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["5word"], "HELLO");
        let score = body["score"].as_f64().unwrap();
        assert!((score - 33.56).abs() < 1e-3);
    }

    #[tokio::test]
    async fn test_score_route_illegal_character() {
        let resp = route_request("/score/ab3de", &test_state(), false);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert_eq!(body["error"], "word contains illegal character (3)");
    }

    #[tokio::test]
    async fn test_score_route_bad_length() {
        let resp = route_request("/score/abcd", &test_state(), false);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert_eq!(body["error"], "word length (4) is not 5");
    }

    #[tokio::test]
    async fn test_score_route_missing_word() {
        for path in ["/score", "/score/"] {
            let resp = route_request(path, &test_state(), false);
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let bytes = resp.into_body().collect().await.unwrap().to_bytes();
            assert!(bytes.is_empty(), "{path} should have an empty body");
        }
    }

    #[test]
    fn test_score_route_extra_segment_is_not_found() {
        let resp = route_request("/score/ab/cd", &test_state(), false);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_health_routes() {
        let state = test_state();
        assert_eq!(route_request("/healthz", &state, false).status(), StatusCode::OK);
        assert_eq!(route_request("/readyz", &state, false).status(), StatusCode::OK);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let resp = route_request("/", &test_state(), false);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_method_check() {
        assert!(check_http_method(&Method::GET, false).is_none());
        assert!(check_http_method(&Method::HEAD, false).is_none());

        let options = check_http_method(&Method::OPTIONS, false).unwrap();
        assert_eq!(options.status(), StatusCode::NO_CONTENT);

        let post = check_http_method(&Method::POST, false).unwrap();
        assert_eq!(post.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
