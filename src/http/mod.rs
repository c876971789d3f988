//! HTTP protocol layer module
//!
//! Response construction shared by every endpoint, decoupled from the
//! scoring logic.

pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_empty_bad_request, build_error_response,
    build_health_response, build_json_response, build_options_response,
};
