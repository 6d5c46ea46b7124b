use std::time::Duration;

use reqwest::StatusCode;

#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub timeout: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

#[async_trait::async_trait]
pub trait LivenessProber: Send + Sync {
    /// Returns true only if a single header-only request to `url` comes back
    /// with status 200 within the probe timeout. Any other status, a timeout
    /// or a connection error all mean "not alive". One probe, no retry, and
    /// redirects are not followed: a 3xx answer is not a live mirror.
    async fn is_alive(&self, url: &str) -> bool;
}

#[derive(Debug, Clone)]
pub struct ReqwestProber {
    settings: ProbeSettings,
}

impl ReqwestProber {
    pub fn new(settings: ProbeSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl LivenessProber for ReqwestProber {
    async fn is_alive(&self, url: &str) -> bool {
        let Ok(client) = reqwest::Client::builder()
            .timeout(self.settings.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
        else {
            return false;
        };
        match client.head(url).send().await {
            Ok(response) => response.status() == StatusCode::OK,
            Err(_) => false,
        }
    }
}
