//! In-memory organizations backend.
//!
//! Behaves like an InfluxDB2 server for the organization endpoints: names are
//! unique, ids are 16 hex characters, and timestamps are stamped on every
//! write. Suitable for tests and local tooling.

use crate::api::OrganizationsApi;
use crate::error::{ApiError, ApiResult};
use crate::organization::{Organization, OrganizationStatus};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Per-operation call counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStats {
    /// Lookups by name
    pub lookups_by_name: u64,
    /// Lookups by id
    pub lookups_by_id: u64,
    /// Create calls
    pub creates: u64,
    /// Update calls
    pub updates: u64,
    /// Delete calls
    pub deletes: u64,
}

/// In-memory [`OrganizationsApi`] implementation.
#[derive(Clone, Default)]
pub struct MemoryOrganizations {
    /// Organizations keyed by id
    orgs: Arc<RwLock<HashMap<String, Organization>>>,
    /// Statistics
    stats: Arc<RwLock<MemoryStats>>,
}

impl std::fmt::Debug for MemoryOrganizations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryOrganizations").finish_non_exhaustive()
    }
}

impl MemoryOrganizations {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get call statistics.
    pub async fn stats(&self) -> MemoryStats {
        self.stats.read().await.clone()
    }

    /// Number of stored organizations.
    pub async fn len(&self) -> usize {
        self.orgs.read().await.len()
    }

    /// Whether no organizations are stored.
    pub async fn is_empty(&self) -> bool {
        self.orgs.read().await.is_empty()
    }

    /// Remove an organization behind the provider's back.
    ///
    /// Simulates out-of-band deletion; returns whether it existed.
    pub async fn remove(&self, id: &str) -> bool {
        self.orgs.write().await.remove(id).is_some()
    }

    fn generate_id() -> String {
        // The trailing 64 bits of a v7 UUID are random.
        uuid::Uuid::now_v7().simple().to_string()[16..].to_string()
    }

    fn name_taken(orgs: &HashMap<String, Organization>, name: &str, except: Option<&str>) -> bool {
        orgs.values()
            .any(|org| org.name == name && org.id.as_deref() != except)
    }
}

#[async_trait]
impl OrganizationsApi for MemoryOrganizations {
    async fn find_organization_by_name(&self, name: &str) -> ApiResult<Organization> {
        self.stats.write().await.lookups_by_name += 1;

        let orgs = self.orgs.read().await;
        orgs.values()
            .find(|org| org.name == name)
            .cloned()
            .ok_or_else(|| ApiError::organization_not_found(name))
    }

    async fn find_organization_by_id(&self, id: &str) -> ApiResult<Organization> {
        self.stats.write().await.lookups_by_id += 1;

        let orgs = self.orgs.read().await;
        orgs.get(id)
            .cloned()
            .ok_or_else(|| ApiError::organization_not_found(id))
    }

    async fn create_organization(&self, org: &Organization) -> ApiResult<Organization> {
        self.stats.write().await.creates += 1;

        if org.name.is_empty() {
            return Err(ApiError::Api {
                status: 422,
                message: "organization name is required".to_string(),
            });
        }

        let mut orgs = self.orgs.write().await;
        if Self::name_taken(&orgs, &org.name, None) {
            return Err(ApiError::Conflict {
                kind: "organization",
                key: org.name.clone(),
            });
        }

        let now = Utc::now();
        let id = Self::generate_id();
        let created = Organization {
            id: Some(id.clone()),
            name: org.name.clone(),
            description: org.description.clone(),
            status: Some(OrganizationStatus::Active),
            created_at: Some(now),
            updated_at: Some(now),
        };
        orgs.insert(id, created.clone());

        Ok(created)
    }

    async fn update_organization(&self, org: &Organization) -> ApiResult<Organization> {
        self.stats.write().await.updates += 1;

        let id = org
            .id
            .as_deref()
            .ok_or_else(|| ApiError::InvalidRequest("organization id is required".to_string()))?;

        let mut orgs = self.orgs.write().await;
        if !orgs.contains_key(id) {
            return Err(ApiError::organization_not_found(id));
        }
        if Self::name_taken(&orgs, &org.name, Some(id)) {
            return Err(ApiError::Conflict {
                kind: "organization",
                key: org.name.clone(),
            });
        }

        let stored = orgs
            .get_mut(id)
            .ok_or_else(|| ApiError::organization_not_found(id))?;
        stored.name = org.name.clone();
        stored.description = org.description.clone();
        stored.updated_at = Some(Utc::now());

        Ok(stored.clone())
    }

    async fn delete_organization_with_id(&self, id: &str) -> ApiResult<()> {
        self.stats.write().await.deletes += 1;

        match self.orgs.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(ApiError::organization_not_found(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let backend = MemoryOrganizations::new();

        let created = backend
            .create_organization(&Organization::new("acme").with_description("Acme Corp"))
            .await
            .unwrap();
        let id = created.id.clone().unwrap();
        assert_eq!(id.len(), 16);
        assert_eq!(created.status, Some(OrganizationStatus::Active));
        assert_eq!(created.created_at, created.updated_at);

        let by_id = backend.find_organization_by_id(&id).await.unwrap();
        let by_name = backend.find_organization_by_name("acme").await.unwrap();
        assert_eq!(by_id, created);
        assert_eq!(by_name, created);
    }

    #[tokio::test]
    async fn test_unique_names() {
        let backend = MemoryOrganizations::new();
        backend
            .create_organization(&Organization::new("acme"))
            .await
            .unwrap();

        let err = backend
            .create_organization(&Organization::new("acme"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict { .. }));
        assert_eq!(backend.len().await, 1);
    }

    #[tokio::test]
    async fn test_missing_entities_are_not_found() {
        let backend = MemoryOrganizations::new();

        assert!(backend
            .find_organization_by_name("ghost")
            .await
            .unwrap_err()
            .is_not_found());
        assert!(backend
            .find_organization_by_id("0000000000000000")
            .await
            .unwrap_err()
            .is_not_found());
        assert!(backend
            .delete_organization_with_id("0000000000000000")
            .await
            .unwrap_err()
            .is_not_found());

        let mut ghost = Organization::new("ghost");
        ghost.id = Some("0000000000000000".to_string());
        assert!(backend
            .update_organization(&ghost)
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn test_update_missing_id_wins_over_name_conflict() {
        let backend = MemoryOrganizations::new();
        backend
            .create_organization(&Organization::new("acme"))
            .await
            .unwrap();

        let mut ghost = Organization::new("acme");
        ghost.id = Some("0000000000000000".to_string());
        let err = backend.update_organization(&ghost).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(!matches!(err, ApiError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_update_name_conflict() {
        let backend = MemoryOrganizations::new();
        backend
            .create_organization(&Organization::new("acme"))
            .await
            .unwrap();
        let mut other = backend
            .create_organization(&Organization::new("globex"))
            .await
            .unwrap();

        other.name = "acme".to_string();
        let err = backend.update_organization(&other).await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_update_and_stats() {
        let backend = MemoryOrganizations::new();
        let mut org = backend
            .create_organization(&Organization::new("acme"))
            .await
            .unwrap();

        org.name = "acme-renamed".to_string();
        org.description = Some("renamed".to_string());
        let updated = backend.update_organization(&org).await.unwrap();
        assert_eq!(updated.name, "acme-renamed");
        assert_eq!(updated.created_at, org.created_at);
        assert!(updated.updated_at >= org.updated_at);

        backend
            .delete_organization_with_id(org.id.as_deref().unwrap())
            .await
            .unwrap();
        assert!(backend.is_empty().await);

        let stats = backend.stats().await;
        assert_eq!(stats.creates, 1);
        assert_eq!(stats.updates, 1);
        assert_eq!(stats.deletes, 1);
        assert_eq!(stats.lookups_by_name, 0);
    }
}
