//! Renderer and avatar client configuration

use std::time::Duration;

use chrono_tz::Tz;

use crate::error::{ProfileError, ProfileResult};

/// Default avatar endpoint, `{user_id}` is substituted per request
pub const DEFAULT_AVATAR_URL: &str = "https://q4.qlogo.cn/headimg_dl?dst_uin={user_id}&spec=640";

/// Card rendering configuration
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// Timezone for join / registration dates
    pub timezone: Tz,

    /// Characters per signature line
    pub signature_width: usize,
}

impl CardConfig {
    pub fn new() -> Self {
        Self {
            timezone: chrono_tz::Asia::Shanghai,
            signature_width: 15,
        }
    }

    /// Set the timezone used for timestamps
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Set the signature wrap width (at least 1)
    pub fn with_signature_width(mut self, width: usize) -> Self {
        self.signature_width = width.max(1);
        self
    }

    /// Load configuration from environment variables
    ///
    /// - `PROFILE_CARD_TIMEZONE` (IANA name, e.g. `Asia/Shanghai`)
    /// - `PROFILE_CARD_SIGNATURE_WIDTH`
    pub fn from_env() -> ProfileResult<Self> {
        let mut config = Self::new();

        if let Some(tz) = env_var("PROFILE_CARD_TIMEZONE") {
            let timezone = tz.parse::<Tz>().map_err(|_| {
                ProfileError::InvalidConfig(format!("PROFILE_CARD_TIMEZONE: unknown timezone {}", tz))
            })?;
            config = config.with_timezone(timezone);
        }

        if let Some(width) = env_var("PROFILE_CARD_SIGNATURE_WIDTH") {
            let width = width.parse().map_err(|_| {
                ProfileError::InvalidConfig(format!("PROFILE_CARD_SIGNATURE_WIDTH: {}", width))
            })?;
            config = config.with_signature_width(width);
        }

        Ok(config)
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Avatar client configuration
#[derive(Debug, Clone)]
pub struct AvatarConfig {
    /// URL template containing `{user_id}`
    pub url_template: String,

    /// Request timeout
    pub timeout: Duration,
}

impl AvatarConfig {
    pub fn new() -> Self {
        Self {
            url_template: DEFAULT_AVATAR_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Set the URL template
    pub fn with_url_template(mut self, template: impl Into<String>) -> Self {
        self.url_template = template.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the avatar URL for a user
    pub fn url_for(&self, user_id: &str) -> String {
        self.url_template.replace("{user_id}", user_id)
    }

    /// Load configuration from environment variables
    ///
    /// - `PROFILE_AVATAR_URL`
    /// - `PROFILE_AVATAR_TIMEOUT_SECS`
    pub fn from_env() -> ProfileResult<Self> {
        let mut config = Self::new();

        if let Some(url) = env_var("PROFILE_AVATAR_URL") {
            if !url.contains("{user_id}") {
                return Err(ProfileError::InvalidConfig(format!(
                    "PROFILE_AVATAR_URL must contain {{user_id}}: {}",
                    url
                )));
            }
            config = config.with_url_template(url);
        }

        if let Some(secs) = env_var("PROFILE_AVATAR_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                ProfileError::InvalidConfig(format!("PROFILE_AVATAR_TIMEOUT_SECS: {}", secs))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a non-empty environment variable
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
