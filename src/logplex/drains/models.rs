//! Drain data models

use serde::{Deserialize, Serialize};

/// Request body for adding a drain
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddDrainRequest {
    pub url: String,
}

impl AddDrainRequest {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

/// Drain as returned by the API after creation
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DrainResponse {
    pub id: i64,
    pub token: String,
    pub url: String,
}
