use serde::{Deserialize, Serialize};

/// Response body of `POST /api/names/extract`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractNamesResponse {
    pub names: Vec<String>,
}

/// Body returned by the API for any rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
