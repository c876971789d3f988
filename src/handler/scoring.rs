//! Scoring endpoint module
//!
//! Handles `GET /score/{word}`: validates the path parameter, scores the
//! word, and maps both outcomes onto HTTP responses.

use crate::http;
use crate::logger;
use crate::score::{self, Word};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Successful scoring response body
#[derive(Debug, Serialize)]
struct ScoreResponse {
    /// The normalized five-letter word
    #[serde(rename = "5word")]
    word: String,
    /// Sum of the five letters' frequency weights
    score: f32,
}

/// Score the raw word taken from the request path.
///
/// Validation and scoring failures both map to 400 with the error message
/// echoed in a JSON body.
pub fn score_word(raw: &str, access_log: bool) -> Response<Full<Bytes>> {
    if access_log {
        logger::log_score_request(raw);
    }

    let word = match Word::parse(raw) {
        Ok(word) => word,
        Err(e) => return http::build_error_response(&e.to_string()),
    };

    let score = match score::score(word) {
        Ok(score) => score,
        Err(e) => return http::build_error_response(&e.to_string()),
    };

    let normalized = word.to_string();
    if access_log {
        logger::log_score_result(&normalized, score);
    }

    http::build_json_response(
        StatusCode::OK,
        &ScoreResponse {
            word: normalized,
            score,
        },
    )
}
