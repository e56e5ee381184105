//! Organizations API abstraction.
//!
//! The provider talks to the backend only through [`OrganizationsApi`], so
//! the HTTP client and the in-memory backend are interchangeable.

use crate::error::ApiResult;
use crate::organization::Organization;
use async_trait::async_trait;

/// Operations on InfluxDB2 organizations.
///
/// Lookups and deletes that target a missing organization must fail with
/// [`ApiError::NotFound`](crate::ApiError::NotFound).
#[async_trait]
pub trait OrganizationsApi: Send + Sync {
    /// Find an organization by its unique name.
    async fn find_organization_by_name(&self, name: &str) -> ApiResult<Organization>;

    /// Find an organization by id.
    async fn find_organization_by_id(&self, id: &str) -> ApiResult<Organization>;

    /// Create an organization from its name and description.
    async fn create_organization(&self, org: &Organization) -> ApiResult<Organization>;

    /// Update the name and description of an existing organization.
    ///
    /// `org.id` must be set.
    async fn update_organization(&self, org: &Organization) -> ApiResult<Organization>;

    /// Delete an organization by id.
    async fn delete_organization_with_id(&self, id: &str) -> ApiResult<()>;
}
