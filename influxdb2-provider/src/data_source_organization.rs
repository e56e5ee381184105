//! The `influxdb2_organization` data source.
//!
//! Looks up an existing organization by name or by id. Never modifies
//! remote state.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::models::{OrganizationLookup, OrganizationModel};
use crate::record::ResourceData;
use crate::schema::{created_updated_schema, decode, Attribute, Schema};
use influxdb2_client::OrganizationsApi;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Handler for the organization data source.
#[derive(Clone)]
pub struct OrganizationDataSource {
    client: Arc<dyn OrganizationsApi>,
}

impl std::fmt::Debug for OrganizationDataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrganizationDataSource").finish_non_exhaustive()
    }
}

impl OrganizationDataSource {
    /// Create the data source around an API client.
    pub fn new(client: Arc<dyn OrganizationsApi>) -> Self {
        Self { client }
    }

    /// Schema of the data source.
    pub fn schema() -> Schema {
        Schema::new("Lookup an Organization in InfluxDB2.")
            .with_attribute(
                "name",
                Attribute::optional_computed_string().with_description("Name of the Organization."),
            )
            .with_attribute(
                "id",
                Attribute::optional_computed_string().with_description("ID of the Organization."),
            )
            .with_attribute(
                "description",
                Attribute::computed_string()
                    .with_description("The description of the Organization."),
            )
            .with_attribute(
                "status",
                Attribute::computed_string().with_description("Status of the Organization."),
            )
            .with_attributes(created_updated_schema("Organization"))
    }

    /// Look up an organization from raw data source configuration.
    pub async fn read_config(
        &self,
        config: &Value,
    ) -> Result<ResourceData<OrganizationModel>, Diagnostics> {
        let lookup: OrganizationLookup = decode(&Self::schema(), config)?;
        self.read(&lookup).await
    }

    /// Look up an organization; `name` takes priority over `id`.
    #[instrument(skip(self))]
    pub async fn read(
        &self,
        lookup: &OrganizationLookup,
    ) -> Result<ResourceData<OrganizationModel>, Diagnostics> {
        let org = if let Some(name) = non_empty(&lookup.name) {
            debug!("Looking up Organization by name ({})", name);
            self.client
                .find_organization_by_name(name)
                .await
                .map_err(|e| {
                    let mut diags = Diagnostics::from_err(e);
                    diags.push(Diagnostic::error(format!(
                        "Can't find Organization with name: {}",
                        name
                    )));
                    diags
                })?
        } else if let Some(id) = non_empty(&lookup.id) {
            debug!("Looking up Organization by id ({})", id);
            self.client.find_organization_by_id(id).await.map_err(|e| {
                let mut diags = Diagnostics::from_err(e);
                diags.push(Diagnostic::error(format!(
                    "Can't find Organization with id: {}",
                    id
                )));
                diags
            })?
        } else {
            return Err(Diagnostics::from(
                Diagnostic::error("Organization lookup requires a name or an id")
                    .with_detail("Set one of \"name\" or \"id\"."),
            ));
        };

        let id = match org.id {
            Some(ref id) => id.clone(),
            None => return Err(Diagnostics::error("Organization not found")),
        };

        Ok(ResourceData::with_id(id, OrganizationModel::from_lookup(&org)))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
