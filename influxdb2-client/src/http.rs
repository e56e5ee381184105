//! InfluxDB2 HTTP client.
//!
//! Implements [`OrganizationsApi`] against the InfluxDB2 v2 REST API
//! (`/api/v2/orgs`). Status codes are mapped onto [`ApiError`] variants so
//! callers never have to inspect response text.

use crate::api::OrganizationsApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::organization::{Organization, Organizations};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use tracing::{debug, error, instrument, warn};

const ORGS_PATH: &str = "/api/v2/orgs";

/// Organizations API client over HTTP.
#[derive(Clone)]
pub struct OrganizationsClient {
    /// HTTP client instance.
    client: Client,

    /// Server configuration.
    config: ClientConfig,
}

impl std::fmt::Debug for OrganizationsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrganizationsClient")
            .field("url", &self.config.url)
            .field("has_auth", &self.config.has_auth())
            .finish()
    }
}

impl OrganizationsClient {
    /// Create a new client for the configured server.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()?;

        Ok(Self { client, config })
    }

    /// Server configuration used by this client.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.token {
            Some(ref token) => request.header("Authorization", format!("Token {}", token)),
            None => request,
        }
    }

    fn org_url(&self, id: &str) -> String {
        self.config.url(&format!("{}/{}", ORGS_PATH, id))
    }

    /// Send a request and decode the JSON body.
    ///
    /// A 404 becomes [`ApiError::NotFound`] for `key`.
    async fn send<T>(&self, request: RequestBuilder, key: &str) -> ApiResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self.authorize(request).send().await?;
        let response = Self::check_status(response, key).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Map non-success statuses onto typed errors.
    async fn check_status(response: reqwest::Response, key: &str) -> ApiResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::NOT_FOUND => Err(ApiError::organization_not_found(key)),
            StatusCode::UNAUTHORIZED => {
                error!("InfluxDB2 authentication failed");
                Err(ApiError::AuthenticationFailed)
            }
            StatusCode::CONFLICT => Err(ApiError::Conflict {
                kind: "organization",
                key: key.to_string(),
            }),
            _ => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                let message = serde_json::from_str::<ErrorBody>(&body)
                    .map(|b| b.message)
                    .unwrap_or(body);
                warn!("InfluxDB2 API error ({}): {}", status.as_u16(), message);
                Err(ApiError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

/// Error payload returned by InfluxDB2.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[async_trait]
impl OrganizationsApi for OrganizationsClient {
    #[instrument(skip(self))]
    async fn find_organization_by_name(&self, name: &str) -> ApiResult<Organization> {
        debug!("Looking up organization by name {}", name);

        let request = self
            .client
            .get(self.config.url(ORGS_PATH))
            .query(&[("org", name)]);
        let list: Organizations = self.send(request, name).await?;

        list.orgs
            .into_iter()
            .find(|org| org.name == name)
            .ok_or_else(|| ApiError::organization_not_found(name))
    }

    #[instrument(skip(self))]
    async fn find_organization_by_id(&self, id: &str) -> ApiResult<Organization> {
        debug!("Fetching organization {}", id);

        let request = self.client.get(self.org_url(id));
        self.send(request, id).await
    }

    #[instrument(skip(self, org), fields(name = %org.name))]
    async fn create_organization(&self, org: &Organization) -> ApiResult<Organization> {
        debug!("Creating organization {}", org.name);

        let request = self
            .client
            .post(self.config.url(ORGS_PATH))
            .json(&org.patch());
        self.send(request, &org.name).await
    }

    #[instrument(skip(self, org), fields(name = %org.name))]
    async fn update_organization(&self, org: &Organization) -> ApiResult<Organization> {
        let id = org
            .id
            .as_deref()
            .ok_or_else(|| ApiError::InvalidRequest("organization id is required".to_string()))?;

        debug!("Updating organization {}", id);

        let request = self.client.patch(self.org_url(id)).json(&org.patch());
        self.send(request, id).await
    }

    #[instrument(skip(self))]
    async fn delete_organization_with_id(&self, id: &str) -> ApiResult<()> {
        debug!("Deleting organization {}", id);

        let request = self.authorize(self.client.delete(self.org_url(id)));
        let response = request.send().await?;
        Self::check_status(response, id).await?;
        Ok(())
    }
}
