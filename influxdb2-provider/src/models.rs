//! Typed attribute models for the organization resource and data source.

use crate::error::ProjectionError;
use chrono::{DateTime, SecondsFormat, Utc};
use influxdb2_client::Organization;
use serde::{Deserialize, Serialize};

/// Attribute values of an `influxdb2_organization` resource or data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationModel {
    /// ID of the Organization
    #[serde(default)]
    pub id: Option<String>,

    /// Name of the Organization
    pub name: String,

    /// Description of the Organization
    #[serde(default)]
    pub description: Option<String>,

    /// Status of the Organization
    #[serde(default)]
    pub status: Option<String>,

    /// Creation time, RFC 3339 UTC
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last update time, RFC 3339 UTC
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Creation time, Unix seconds
    #[serde(default)]
    pub created_timestamp: Option<i64>,

    /// Last update time, Unix seconds
    #[serde(default)]
    pub updated_timestamp: Option<i64>,
}

impl OrganizationModel {
    /// Desired state with a name and optional description.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
            ..Self::default()
        }
    }

    /// Project a looked-up organization, tolerating absent timestamps.
    pub fn from_lookup(org: &Organization) -> Self {
        Self {
            id: org.id.clone(),
            name: org.name.clone(),
            description: non_empty(org.description.as_deref()),
            status: org.status.map(|s| s.to_string()),
            created_at: org.created_at.map(format_time),
            updated_at: org.updated_at.map(format_time),
            created_timestamp: org.created_at.map(|t| t.timestamp()),
            updated_timestamp: org.updated_at.map(|t| t.timestamp()),
        }
    }
}

impl TryFrom<&Organization> for OrganizationModel {
    type Error = ProjectionError;

    /// Full projection; the id and both timestamps must be present.
    fn try_from(org: &Organization) -> Result<Self, Self::Error> {
        let id = org.id.clone().ok_or(ProjectionError::MissingField("id"))?;
        let created_at = org
            .created_at
            .ok_or(ProjectionError::MissingField("created_at"))?;
        let updated_at = org
            .updated_at
            .ok_or(ProjectionError::MissingField("updated_at"))?;

        Ok(Self {
            id: Some(id),
            name: org.name.clone(),
            description: non_empty(org.description.as_deref()),
            status: org.status.map(|s| s.to_string()),
            created_at: Some(format_time(created_at)),
            updated_at: Some(format_time(updated_at)),
            created_timestamp: Some(created_at.timestamp()),
            updated_timestamp: Some(updated_at.timestamp()),
        })
    }
}

/// Input of the `influxdb2_organization` data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationLookup {
    /// Name to look up; takes priority over `id`
    #[serde(default)]
    pub name: Option<String>,

    /// ID to look up
    #[serde(default)]
    pub id: Option<String>,
}

impl OrganizationLookup {
    /// Look up by name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: None,
        }
    }

    /// Look up by id.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            name: None,
            id: Some(id.into()),
        }
    }
}

/// RFC 3339 rendering used for `created_at`/`updated_at`.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
