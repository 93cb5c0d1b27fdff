//! Drain API operations

use log::debug;
use reqwest::StatusCode;

use crate::config::api;
use crate::error::Result;
use crate::logplex::channels::channel_path;
use crate::logplex::LogplexClient;

use super::models::{AddDrainRequest, DrainResponse};

impl LogplexClient {
    /// Add a drain forwarding a channel's logs to `drain_url`
    pub async fn add_drain(&self, channel_id: &str, drain_url: &str) -> Result<DrainResponse> {
        let url = self.url(&drains_path(channel_id));
        let context = format!("add drain to channel '{}'", channel_id);

        debug!("Adding drain {} to channel {}", drain_url, channel_id);

        let response = self
            .post(&url)
            .json(&AddDrainRequest::new(drain_url))
            .send()
            .await?;
        let response = self
            .expect_status(response, StatusCode::CREATED, &context)
            .await?;
        let drain: DrainResponse = self.parse_json(response, &context).await?;

        debug!("Added drain {} ({})", drain.id, drain.token);
        Ok(drain)
    }

    /// Remove a drain from a channel
    pub async fn remove_drain(&self, channel_id: &str, drain_id: &str) -> Result<()> {
        let url = self.url(&format!(
            "{}/{}",
            drains_path(channel_id),
            urlencoding::encode(drain_id)
        ));
        let context = format!("remove drain '{}' from channel '{}'", drain_id, channel_id);

        debug!("Removing drain {} from channel {}", drain_id, channel_id);

        let response = self.delete(&url).send().await?;
        let response = self.expect_status(response, StatusCode::OK, &context).await?;
        self.discard_body(response).await
    }
}

fn drains_path(channel_id: &str) -> String {
    format!("{}/{}", channel_path(channel_id), api::DRAINS)
}
