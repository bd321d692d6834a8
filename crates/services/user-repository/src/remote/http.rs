//! reqwest-backed users API client.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::debug;

use common::{ApiConfig, AppError, AppResult};

use super::api::{ApiRequest, RawResponse, UsersApi};

/// HTTP client for the remote users API.
///
/// The base URL is resolved from [`ApiConfig`] on every request, so a changed
/// environment takes effect without rebuilding the client.
#[derive(Debug, Clone)]
pub struct HttpUsersApi {
    http: Client,
    config: ApiConfig,
}

impl HttpUsersApi {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent(format!("CommunityDirectory/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.resolve_base_url(), path)
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn send(&self, request: ApiRequest) -> AppResult<RawResponse> {
        let url = self.url(&request.path);
        debug!(method = %request.method, url = %url, "Calling users API");

        let mut builder = self
            .http
            .request(request.method.into(), &url)
            .header(ACCEPT, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(network_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network_error)?;

        Ok(RawResponse { status, body })
    }
}

fn network_error(err: reqwest::Error) -> AppError {
    if err.is_builder() {
        AppError::network(format!("invalid request URL ({})", err))
    } else {
        AppError::network(err.to_string())
    }
}
