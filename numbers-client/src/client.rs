//! HTTP implementation of the numbers service.

use std::time::Duration;

use async_trait::async_trait;
use numbers_types::{Axis, Dataset, SubmissionResult, VectorResponse};
use reqwest::{Client, Url};

use crate::error::Error;
use crate::service::NumbersService;

/// Public endpoint of the numbers service.
pub const DEFAULT_BASE_URL: &str = "https://recruitment-test.investcloud.com/api/numbers";

/// Settings for [`HttpNumbersClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: BaseUrl,
    /// Total time allowed for a single request.
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BaseUrl::from(DEFAULT_BASE_URL),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// A numbers service reached over HTTP.
///
/// The underlying `reqwest::Client` pools connections and is safe to share,
/// so one `HttpNumbersClient` serves every in-flight request of a run.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use numbers_client::{ClientConfig, HttpNumbersClient};
///
/// let client = HttpNumbersClient::new(ClientConfig {
///     timeout: Duration::from_secs(10),
///     ..ClientConfig::default()
/// })?;
/// # Ok::<(), numbers_client::Error>(())
/// ```
pub struct HttpNumbersClient {
    client: Client,
    base_url: String,
}

impl HttpNumbersClient {
    /// Builds a client from `config`.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let base_url = config.base_url.0.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|_| Error::InvalidUrl(config.base_url.0.clone()))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Builds a client for `addr` with default timeouts.
    pub fn connect(addr: impl Into<BaseUrl>) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: addr.into(),
            ..ClientConfig::default()
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl NumbersService for HttpNumbersClient {
    async fn init(&self, size: usize) -> Result<(), Error> {
        let url = self.url(&format!("init/{}", size));
        let response = self.client.post(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url,
            });
        }

        tracing::debug!(size, "datasets initialized");
        Ok(())
    }

    async fn fetch_vector(
        &self,
        dataset: Dataset,
        axis: Axis,
        index: usize,
    ) -> Result<VectorResponse, Error> {
        let url = self.url(&format!("{}/{}/{}", dataset, axis, index));
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| Error::Decode { url, source })
    }

    async fn submit(&self, digest: &str) -> Result<SubmissionResult, Error> {
        let url = self.url("validate");
        let response = self.client.post(&url).json(digest).send().await?;

        let success = response.status().is_success();
        let body = response.text().await?;
        tracing::debug!(success, %body, "validator answered");

        Ok(SubmissionResult { body, success })
    }
}

/// Base URL wrapper for type-safe construction.
#[derive(Debug, Clone)]
pub struct BaseUrl(pub String);

impl From<String> for BaseUrl {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BaseUrl {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let client = HttpNumbersClient::connect("http://localhost:8080/api/numbers/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api/numbers");
        assert_eq!(
            client.url("A/row/3"),
            "http://localhost:8080/api/numbers/A/row/3"
        );
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let result = HttpNumbersClient::connect("not a url");
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn default_points_at_public_service() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.0, DEFAULT_BASE_URL);
    }
}
