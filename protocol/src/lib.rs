//! Wire types for the board-retrieval endpoint (`GET /api`).
//!
//! Field names follow the endpoint's JSON contract, so the serde renames
//! here are load-bearing.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by the endpoint. An explicit `board` is echoed
/// back after validation, `layoutIndex` selects a catalog entry, and with
/// neither set the server picks a random entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,
}

/// Successful response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardResponse {
    pub board: String,
}

/// Error body carried by a 404 response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_message: String,
}
