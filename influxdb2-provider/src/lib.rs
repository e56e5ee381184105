//! # InfluxDB2 Provider
//!
//! This crate provides Terraform-style resource and data source handlers
//! for managing InfluxDB2 organizations.
//!
//! ## Overview
//!
//! The influxdb2-provider crate handles:
//! - **Resource**: `influxdb2_organization` create/read/update/delete/import
//! - **Data Source**: `influxdb2_organization` lookup by name or id
//! - **Schemas**: Attribute schemas and configuration validation
//! - **Records**: Typed resource records with a local identity
//! - **Diagnostics**: Errors and warnings reported back to the framework
//!
//! ## Lifecycle
//!
//! ```text
//! absent ──create──▶ present ──read/update──▶ present
//!   ▲                   │
//!   └──delete / remote not found──┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use influxdb2_provider::{OrganizationModel, Provider, ProviderConfig, ResourceData};
//!
//! async fn apply() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Provider::configure(ProviderConfig::default())?;
//!     let resource = provider.organization_resource();
//!
//!     let mut d = ResourceData::new(OrganizationModel::new("acme", Some("Acme Corp".into())));
//!     resource.create(&mut d).await?;
//!     println!("created organization {}", d.id());
//!
//!     resource.read(&mut d).await?;
//!     if !d.is_tracked() {
//!         println!("organization was deleted outside of the provider");
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data_source_organization;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod provider;
pub mod record;
pub mod resource_organization;
pub mod schema;

// Re-export main types for convenience
pub use config::ProviderConfig;
pub use data_source_organization::OrganizationDataSource;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{ProjectionError, ProviderError, ProviderResult};
pub use models::{OrganizationLookup, OrganizationModel};
pub use provider::{Provider, ORGANIZATION_TYPE_NAME};
pub use record::ResourceData;
pub use resource_organization::{set_organization_resource_data, OrganizationResource};
pub use schema::{Attribute, AttributeType, Schema};
