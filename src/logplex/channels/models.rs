//! Channel data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request body for channel creation
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateChannelRequest {
    pub name: String,
    pub tokens: Vec<String>,
}

impl CreateChannelRequest {
    pub fn new(name: &str, tokens: &[String]) -> Self {
        Self {
            name: name.to_string(),
            tokens: tokens.to_vec(),
        }
    }
}

/// Channel creation response: the new channel id and its token map
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateChannelResponse {
    pub channel_id: i64,
    pub tokens: BTreeMap<String, String>,
}
