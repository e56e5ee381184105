//! The `influxdb2_organization` resource.
//!
//! Create, read, update, delete, and import handlers for InfluxDB2
//! organizations. A remote organization that has disappeared is treated as
//! drift: read and update clear the local identity, delete succeeds.

use crate::diagnostics::Diagnostics;
use crate::error::{ProjectionError, ProviderError, ProviderResult};
use crate::models::OrganizationModel;
use crate::record::ResourceData;
use crate::schema::{created_updated_schema, Attribute, Schema};
use influxdb2_client::{Organization, OrganizationsApi};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Handlers for the organization resource.
#[derive(Clone)]
pub struct OrganizationResource {
    client: Arc<dyn OrganizationsApi>,
}

impl std::fmt::Debug for OrganizationResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrganizationResource").finish_non_exhaustive()
    }
}

impl OrganizationResource {
    /// Create the resource handlers around an API client.
    pub fn new(client: Arc<dyn OrganizationsApi>) -> Self {
        Self { client }
    }

    /// Schema of the resource.
    pub fn schema() -> Schema {
        Schema::new("The Organization resource allows you to configure a InfluxDB2 Organization.")
            .with_attribute(
                "name",
                Attribute::required_string().with_description("Name of the Organization."),
            )
            .with_attribute(
                "description",
                Attribute::optional_string()
                    .with_description("The description of the Organization."),
            )
            .with_attribute(
                "id",
                Attribute::computed_string().with_description("ID of the Organization."),
            )
            .with_attribute(
                "status",
                Attribute::computed_string().with_description("Status of the Organization."),
            )
            .with_attributes(created_updated_schema("Organization"))
    }

    /// Create the organization described by `d`.
    ///
    /// Fails without creating anything if an organization with the same
    /// name already exists; such organizations must be imported instead.
    #[instrument(skip(self, d), fields(name = %d.model().name))]
    pub async fn create(&self, d: &mut ResourceData<OrganizationModel>) -> Result<(), Diagnostics> {
        let name = d.model().name.clone();

        // Check for an existing Organization
        match self.client.find_organization_by_name(&name).await {
            Ok(_) => {
                return Err(Diagnostics::error(format!(
                    "unable to create Organization ({}) - an Organization with this name \
                     already exists; see resource documentation for influxdb2_organization \
                     for instructions on how to add an already existing Organization to the state",
                    name
                )));
            }
            Err(e) if e.is_not_found() => {
                info!("Organization ({}) not found, proceeding with create", name);
            }
            Err(e) => {
                return Err(Diagnostics::error(format!(
                    "unable to check for presence of an existing Organization ({}): {}",
                    name, e
                )));
            }
        }

        let mut org = Organization::new(name.clone());
        org.description = d.model().description.clone();

        info!("Creating Organization ({})", name);
        let returned = self
            .client
            .create_organization(&org)
            .await
            .map_err(|e| {
                Diagnostics::error(format!("unable to create Organization ({}): {}", name, e))
            })?;

        let id = returned.id.ok_or_else(|| {
            Diagnostics::error(format!(
                "unable to create Organization ({}): <unknown error occurred>",
                name
            ))
        })?;

        d.set_id(id.clone());

        info!("Created Organization ({}) ({})", name, id);

        // Creation responses may omit server-stamped fields.
        let created = self.client.find_organization_by_id(&id).await.map_err(|e| {
            Diagnostics::error(format!(
                "unable to retrieve Organization ({}) ({}): {}",
                name, id, e
            ))
        })?;

        set_organization_resource_data(d, &created).map_err(Diagnostics::from_err)
    }

    /// Refresh `d` from the backend.
    #[instrument(skip(self, d), fields(id = %d.id()))]
    pub async fn read(&self, d: &mut ResourceData<OrganizationModel>) -> Result<(), Diagnostics> {
        let org = match self.fetch_tracked(d).await? {
            Some(org) => org,
            None => return Ok(()),
        };

        set_organization_resource_data(d, &org).map_err(Diagnostics::from_err)
    }

    /// Push the desired name and description in `d` to the backend.
    #[instrument(skip(self, d), fields(id = %d.id()))]
    pub async fn update(&self, d: &mut ResourceData<OrganizationModel>) -> Result<(), Diagnostics> {
        let mut org = match self.fetch_tracked(d).await? {
            Some(org) => org,
            None => return Ok(()),
        };

        let id = d.id().to_string();
        org.name = d.model().name.clone();
        // An explicit empty description clears a previously set one.
        org.description = Some(d.model().description.clone().unwrap_or_default());

        info!("Updating Organization ({})", id);
        let updated = self
            .client
            .update_organization(&org)
            .await
            .map_err(|e| {
                Diagnostics::error(format!("unable to update Organization ({}): {}", id, e))
            })?;

        info!("Updated Organization ({})", id);

        set_organization_resource_data(d, &updated).map_err(Diagnostics::from_err)
    }

    /// Delete the organization tracked by `d`.
    #[instrument(skip(self, d), fields(id = %d.id()))]
    pub async fn delete(&self, d: &mut ResourceData<OrganizationModel>) -> Result<(), Diagnostics> {
        let id = d.id().to_string();

        info!("Deleting Organization ({})", id);

        match self.client.delete_organization_with_id(&id).await {
            Ok(()) => info!("Organization ({}) deleted, removing from state", id),
            Err(e) if e.is_not_found() => {
                warn!("Organization ({}) not found, so no action was taken", id);
            }
            Err(e) => {
                return Err(Diagnostics::error(format!(
                    "unable to delete Organization ({}): {}",
                    id, e
                )));
            }
        }

        d.clear_id();
        Ok(())
    }

    /// Import an organization not yet tracked, given only its id.
    #[instrument(skip(self))]
    pub async fn import(&self, id: &str) -> ProviderResult<Vec<ResourceData<OrganizationModel>>> {
        let imported = self
            .client
            .find_organization_by_id(id)
            .await
            .map_err(|source| ProviderError::Import {
                id: id.to_string(),
                source,
            })?;

        let mut d = ResourceData::new(OrganizationModel::default());
        set_organization_resource_data(&mut d, &imported)?;
        d.set_id(id);

        info!("Imported Organization ({})", id);

        Ok(vec![d])
    }

    /// Fetch the organization tracked by `d`.
    ///
    /// Returns `None` after clearing the identity when the organization is
    /// gone, or when the backend answers with a different organization.
    async fn fetch_tracked(
        &self,
        d: &mut ResourceData<OrganizationModel>,
    ) -> Result<Option<Organization>, Diagnostics> {
        if !d.is_tracked() {
            return Ok(None);
        }

        let id = d.id().to_string();

        info!("Reading Organization ({})", id);

        let org = match self.client.find_organization_by_id(&id).await {
            Ok(org) => org,
            Err(e) if e.is_not_found() => {
                warn!("Organization ({}) not found, removing from state", id);
                d.clear_id();
                return Ok(None);
            }
            Err(e) => {
                return Err(Diagnostics::error(format!(
                    "unable to retrieve Organization ({}): {}",
                    id, e
                )));
            }
        };

        if let Some(ref remote_id) = org.id {
            if *remote_id != id {
                warn!(
                    "Organization ({}) resolved to a different id ({}), removing from state",
                    id, remote_id
                );
                d.clear_id();
                return Ok(None);
            }
        }

        Ok(Some(org))
    }
}

/// Write every attribute of `org` onto `d`.
///
/// The record is left untouched if any attribute cannot be projected.
pub fn set_organization_resource_data(
    d: &mut ResourceData<OrganizationModel>,
    org: &Organization,
) -> Result<(), ProjectionError> {
    let model = OrganizationModel::try_from(org)?;
    d.set_model(model);
    Ok(())
}
