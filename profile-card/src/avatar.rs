//! Avatar download
//!
//! One GET per request, no retry. [`AvatarClient::fetch`] never fails: any
//! error is logged and yields empty bytes.

use reqwest::Client;
use tracing::{debug, error, instrument};

use crate::config::AvatarConfig;
use crate::error::ProfileResult;

/// HTTP client for `q4.qlogo.cn` avatars
#[derive(Debug, Clone)]
pub struct AvatarClient {
    client: Client,
    config: AvatarConfig,
}

impl AvatarClient {
    /// Create a new avatar client from configuration
    pub fn new(config: AvatarConfig) -> ProfileResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AvatarConfig {
        &self.config
    }

    /// Download the avatar, reporting failures
    ///
    /// Non-2xx responses are errors.
    #[instrument(skip(self))]
    pub async fn try_fetch(&self, user_id: &str) -> ProfileResult<Vec<u8>> {
        let url = self.config.url_for(user_id);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        debug!(len = bytes.len(), "Avatar downloaded");
        Ok(bytes.to_vec())
    }

    /// Download the avatar, empty on any failure
    pub async fn fetch(&self, user_id: &str) -> Vec<u8> {
        match self.try_fetch(user_id).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(user_id, error = %e, "下载头像失败");
                Vec::new()
            }
        }
    }
}

/// Download an avatar with a freshly built default client
///
/// Returns empty bytes on any failure.
pub async fn get_avatar(user_id: &str) -> Vec<u8> {
    match AvatarClient::new(AvatarConfig::default()) {
        Ok(client) => client.fetch(user_id).await,
        Err(e) => {
            error!(user_id, error = %e, "Failed to build avatar client");
            Vec::new()
        }
    }
}
