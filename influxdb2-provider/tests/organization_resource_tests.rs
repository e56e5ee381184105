//! Lifecycle tests for the `influxdb2_organization` resource.
//!
//! These tests drive the resource handlers against the in-memory backend
//! and check the state each step leaves behind:
//! 1. create then read
//! 2. create with a name that already exists
//! 3. drift: the organization disappears behind the provider's back
//! 4. update then read
//! 5. import
//! 6. timestamp attributes

use chrono::DateTime;
use influxdb2_client::{MemoryOrganizations, Organization, OrganizationsApi};
use influxdb2_provider::{
    OrganizationModel, OrganizationResource, Provider, ProviderError, ResourceData,
};
use std::sync::Arc;

/// Test fixture providing a provider over an in-memory backend.
struct TestFixture {
    /// Backend shared with the provider.
    backend: MemoryOrganizations,
    /// Provider under test.
    provider: Provider,
}

impl TestFixture {
    fn new() -> Self {
        let backend = MemoryOrganizations::new();
        let provider = Provider::new(Arc::new(backend.clone()));
        Self { backend, provider }
    }

    fn resource(&self) -> OrganizationResource {
        self.provider.organization_resource()
    }

    /// Create an organization through the resource and return its record.
    async fn create(&self, name: &str, description: &str) -> ResourceData<OrganizationModel> {
        let mut d = ResourceData::new(OrganizationModel::new(
            name,
            Some(description.to_string()),
        ));
        self.resource()
            .create(&mut d)
            .await
            .expect("Should create organization");
        d
    }
}

fn random_name(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::now_v7().simple())
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_then_read() {
    let fixture = TestFixture::new();
    let name = random_name("test-org");

    let created = fixture.create(&name, "test org").await;
    assert!(created.is_tracked());
    assert_eq!(created.model().id.as_deref(), Some(created.id()));
    assert_eq!(created.model().status.as_deref(), Some("active"));
    assert!(created.model().created_at.is_some());

    let mut d = ResourceData::with_id(created.id(), OrganizationModel::default());
    fixture.resource().read(&mut d).await.expect("Should read");

    assert!(d.is_tracked());
    assert_eq!(d.model().name, name);
    assert_eq!(d.model().description.as_deref(), Some("test org"));
    assert_eq!(d, created);
}

#[tokio::test]
async fn test_create_without_description() {
    let fixture = TestFixture::new();

    let mut d = ResourceData::new(OrganizationModel::new("bare", None));
    fixture.resource().create(&mut d).await.unwrap();

    assert!(d.is_tracked());
    assert!(d.model().description.is_none());
}

#[tokio::test]
async fn test_create_existing_name_fails_without_create_call() {
    let fixture = TestFixture::new();
    fixture
        .backend
        .create_organization(&Organization::new("taken"))
        .await
        .unwrap();
    let creates_before = fixture.backend.stats().await.creates;

    let mut d = ResourceData::new(OrganizationModel::new("taken", None));
    let diags = fixture.resource().create(&mut d).await.unwrap_err();

    assert!(diags.has_error());
    assert!(diags.to_string().contains("already exists"));
    assert!(diags.to_string().contains("taken"));
    assert!(!d.is_tracked());
    assert_eq!(fixture.backend.stats().await.creates, creates_before);
    assert_eq!(fixture.backend.len().await, 1);
}

// =============================================================================
// Drift
// =============================================================================

#[tokio::test]
async fn test_read_missing_clears_identity() {
    let fixture = TestFixture::new();
    let mut d = fixture.create("doomed", "gone soon").await;
    assert!(fixture.backend.remove(d.id()).await);

    fixture
        .resource()
        .read(&mut d)
        .await
        .expect("Not found is not an error");

    assert!(!d.is_tracked());
    assert_eq!(d.to_state().unwrap(), None);
}

#[tokio::test]
async fn test_update_missing_clears_identity() {
    let fixture = TestFixture::new();
    let mut d = fixture.create("doomed", "gone soon").await;
    fixture.backend.remove(d.id()).await;

    d.model_mut().name = "renamed".to_string();
    fixture
        .resource()
        .update(&mut d)
        .await
        .expect("Not found is not an error");

    assert!(!d.is_tracked());
    assert_eq!(fixture.backend.stats().await.updates, 0);
}

#[tokio::test]
async fn test_delete_missing_succeeds() {
    let fixture = TestFixture::new();
    let mut d = ResourceData::with_id("0000000000000000", OrganizationModel::new("ghost", None));

    fixture
        .resource()
        .delete(&mut d)
        .await
        .expect("Not found is not an error");

    assert!(!d.is_tracked());
}

#[tokio::test]
async fn test_delete() {
    let fixture = TestFixture::new();
    let mut d = fixture.create("short-lived", "deleted below").await;

    fixture.resource().delete(&mut d).await.unwrap();

    assert!(!d.is_tracked());
    assert!(fixture.backend.is_empty().await);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_then_read() {
    let fixture = TestFixture::new();
    let mut d = fixture.create("before", "old description").await;
    let created_at = d.model().created_at.clone();

    d.model_mut().name = "after".to_string();
    d.model_mut().description = Some("new description".to_string());
    fixture.resource().update(&mut d).await.expect("Should update");

    assert_eq!(d.model().name, "after");
    assert_eq!(d.model().description.as_deref(), Some("new description"));

    let mut read = ResourceData::with_id(d.id(), OrganizationModel::default());
    fixture.resource().read(&mut read).await.unwrap();

    assert_eq!(read.model().name, "after");
    assert_eq!(read.model().description.as_deref(), Some("new description"));
    assert_eq!(read.model().created_at, created_at);
}

#[tokio::test]
async fn test_update_clears_removed_description() {
    let fixture = TestFixture::new();
    let mut d = fixture.create("described", "to be removed").await;

    d.model_mut().description = None;
    fixture.resource().update(&mut d).await.unwrap();

    let stored = fixture.backend.find_organization_by_id(d.id()).await.unwrap();
    assert_eq!(stored.description.as_deref(), Some(""));
    assert!(d.model().description.is_none());
}

#[tokio::test]
async fn test_update_to_taken_name_fails() {
    let fixture = TestFixture::new();
    fixture.create("first", "one").await;
    let mut d = fixture.create("second", "two").await;

    d.model_mut().name = "first".to_string();
    let diags = fixture.resource().update(&mut d).await.unwrap_err();

    assert!(diags.to_string().starts_with("unable to update Organization"));
    assert!(d.is_tracked());
}

// =============================================================================
// Import
// =============================================================================

#[tokio::test]
async fn test_import_matches_read() {
    let fixture = TestFixture::new();
    let created = fixture.create("imported", "managed elsewhere").await;

    let records = fixture
        .resource()
        .import(created.id())
        .await
        .expect("Should import");
    assert_eq!(records.len(), 1);

    let mut read = ResourceData::with_id(created.id(), OrganizationModel::default());
    fixture.resource().read(&mut read).await.unwrap();

    assert_eq!(records[0], read);
    assert!(records[0].is_tracked());
}

#[tokio::test]
async fn test_import_missing_fails() {
    let fixture = TestFixture::new();

    let err = fixture
        .resource()
        .import("0000000000000000")
        .await
        .unwrap_err();

    match err {
        ProviderError::Import { ref id, ref source } => {
            assert_eq!(id, "0000000000000000");
            assert!(source.is_not_found());
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().starts_with("unable to import Organization (0000000000000000)"));
}

// =============================================================================
// Timestamps
// =============================================================================

#[tokio::test]
async fn test_timestamps_match_string_form() {
    let fixture = TestFixture::new();
    let d = fixture.create("timed", "has timestamps").await;
    let model = d.model();

    let created = DateTime::parse_from_rfc3339(model.created_at.as_deref().unwrap()).unwrap();
    let updated = DateTime::parse_from_rfc3339(model.updated_at.as_deref().unwrap()).unwrap();

    assert_eq!(model.created_timestamp, Some(created.timestamp()));
    assert_eq!(model.updated_timestamp, Some(updated.timestamp()));
}

#[tokio::test]
async fn test_state_for_framework() {
    let fixture = TestFixture::new();
    let d = fixture.create("stateful", "serialized").await;

    let state = d.to_state().unwrap().expect("Tracked records have state");
    assert_eq!(state["id"], serde_json::json!(d.id()));
    assert_eq!(state["name"], "stateful");
    assert!(state["created_timestamp"].is_i64());

    let restored: ResourceData<OrganizationModel> =
        ResourceData::from_state(d.id(), state).unwrap();
    assert_eq!(restored, d);
}
