//! # InfluxDB2 Client
//!
//! This crate provides the InfluxDB2 organizations API client used by the
//! InfluxDB2 provider.
//!
//! ## Overview
//!
//! The influxdb2-client crate handles:
//! - **Organizations**: The `Organization` entity and its wire format
//! - **API**: The `OrganizationsApi` trait every backend implements
//! - **HTTP**: `OrganizationsClient`, a `reqwest` client for `/api/v2/orgs`
//! - **Memory**: `MemoryOrganizations`, an in-memory backend for tests
//! - **Errors**: Typed errors with a dedicated not-found variant
//!
//! ## Usage
//!
//! ```rust,no_run
//! use influxdb2_client::{ClientConfig, Organization, OrganizationsApi, OrganizationsClient};
//!
//! async fn example() -> Result<(), influxdb2_client::ApiError> {
//!     let client = OrganizationsClient::new(ClientConfig::from_env())?;
//!
//!     let org = client
//!         .create_organization(&Organization::new("acme").with_description("Acme Corp"))
//!         .await?;
//!     println!("created {:?}", org.id);
//!
//!     match client.find_organization_by_name("ghost").await {
//!         Err(e) if e.is_not_found() => println!("no such organization"),
//!         other => println!("{:?}", other),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `memory` (default): In-memory backend

pub mod api;
pub mod config;
pub mod error;
pub mod http;
#[cfg(feature = "memory")]
pub mod memory;
pub mod organization;

// Re-export main types for convenience
pub use api::OrganizationsApi;
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use http::OrganizationsClient;
#[cfg(feature = "memory")]
pub use memory::{MemoryOrganizations, MemoryStats};
pub use organization::{Organization, OrganizationPatch, OrganizationStatus, Organizations};
