//! Organization domain models
//!
//! This module provides the Organization entity as exchanged with the
//! InfluxDB2 `/api/v2/orgs` endpoints. Organizations are the top-level
//! tenant entities that own buckets, dashboards, and members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An organization in InfluxDB2.
///
/// The backend assigns `id`, `status`, and both timestamps; a freshly built
/// organization only carries its name and optional description.
///
/// # Examples
///
/// ```
/// use influxdb2_client::Organization;
///
/// let org = Organization::new("acme").with_description("Acme Corp");
/// assert_eq!(org.name, "acme");
/// assert!(org.id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Unique identifier, assigned on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Organization name (unique across the server)
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the organization is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrganizationStatus>,

    /// When the organization was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the organization was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Organization {
    /// Creates a new, not yet persisted organization.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            status: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Request body for create and update calls.
    ///
    /// Only the user-settable fields are sent; server-stamped fields are
    /// never round-tripped back to the API.
    pub fn patch(&self) -> OrganizationPatch {
        OrganizationPatch {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Organization status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationStatus {
    /// Organization is active
    Active,
    /// Organization is inactive
    Inactive,
}

impl OrganizationStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for OrganizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writable fields of an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationPatch {
    /// Organization name
    pub name: String,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response body of `GET /api/v2/orgs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Organizations {
    /// Matching organizations
    #[serde(default)]
    pub orgs: Vec<Organization>,
}
