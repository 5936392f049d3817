//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a one-line diagnostic for stderr.
pub fn map_error(e: &ApiError) -> String {
    format!("Error: {}", e)
}
