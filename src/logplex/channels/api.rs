//! Channel API operations

use log::debug;
use reqwest::StatusCode;

use crate::config::api;
use crate::error::Result;
use crate::logplex::LogplexClient;

use super::models::{CreateChannelRequest, CreateChannelResponse};

impl LogplexClient {
    /// Create a channel with the given name and tokens
    pub async fn create_channel(
        &self,
        request: &CreateChannelRequest,
    ) -> Result<CreateChannelResponse> {
        let url = self.url(api::CHANNELS);
        let context = format!("create channel '{}'", request.name);

        debug!(
            "Creating channel '{}' with {} token(s)",
            request.name,
            request.tokens.len()
        );

        let response = self.post(&url).json(request).send().await?;
        let response = self
            .expect_status(response, StatusCode::CREATED, &context)
            .await?;
        let channel: CreateChannelResponse = self.parse_json(response, &context).await?;

        debug!("Created channel {}", channel.channel_id);
        Ok(channel)
    }

    /// Destroy a channel by id
    pub async fn destroy_channel(&self, channel_id: &str) -> Result<()> {
        let url = self.url(&channel_path(channel_id));
        let context = format!("destroy channel '{}'", channel_id);

        debug!("Destroying channel {}", channel_id);

        let response = self.delete(&url).send().await?;
        let response = self.expect_status(response, StatusCode::OK, &context).await?;
        self.discard_body(response).await
    }
}

/// `/v2/channels/{channel_id}` with the id percent-encoded
pub(crate) fn channel_path(channel_id: &str) -> String {
    format!("{}/{}", api::V2_CHANNELS, urlencoding::encode(channel_id))
}
