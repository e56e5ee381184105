//! Provider shell
//!
//! Holds the API client shared by every resource and data source, and the
//! registry of their schemas keyed by type name.

use crate::config::ProviderConfig;
use crate::data_source_organization::OrganizationDataSource;
use crate::error::ProviderResult;
use crate::resource_organization::OrganizationResource;
use crate::schema::Schema;
use influxdb2_client::{OrganizationsApi, OrganizationsClient};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

/// Type name of the organization resource and data source.
pub const ORGANIZATION_TYPE_NAME: &str = "influxdb2_organization";

/// InfluxDB2 provider.
///
/// The API client is injected once and handed to each handler.
#[derive(Clone)]
pub struct Provider {
    client: Arc<dyn OrganizationsApi>,
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider").finish_non_exhaustive()
    }
}

impl Provider {
    /// Create a provider around an existing API client.
    pub fn new(client: Arc<dyn OrganizationsApi>) -> Self {
        Self { client }
    }

    /// Create a provider talking HTTP to the configured server.
    pub fn configure(config: ProviderConfig) -> ProviderResult<Self> {
        let client_config = config.into_client_config();
        client_config.validate()?;

        info!("Configuring InfluxDB2 provider for {}", client_config.url);
        let client = OrganizationsClient::new(client_config)?;

        Ok(Self::new(Arc::new(client)))
    }

    /// Schema of the provider block.
    pub fn schema() -> Schema {
        ProviderConfig::schema()
    }

    /// Resource schemas keyed by type name.
    pub fn resources(&self) -> BTreeMap<&'static str, Schema> {
        let mut resources = BTreeMap::new();
        resources.insert(ORGANIZATION_TYPE_NAME, OrganizationResource::schema());
        resources
    }

    /// Data source schemas keyed by type name.
    pub fn data_sources(&self) -> BTreeMap<&'static str, Schema> {
        let mut data_sources = BTreeMap::new();
        data_sources.insert(ORGANIZATION_TYPE_NAME, OrganizationDataSource::schema());
        data_sources
    }

    /// Handlers for `resource "influxdb2_organization"`.
    pub fn organization_resource(&self) -> OrganizationResource {
        OrganizationResource::new(self.client.clone())
    }

    /// Handler for `data "influxdb2_organization"`.
    pub fn organization_data_source(&self) -> OrganizationDataSource {
        OrganizationDataSource::new(self.client.clone())
    }
}
