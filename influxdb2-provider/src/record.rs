//! Resource records
//!
//! A [`ResourceData`] is the locally tracked projection of one remote entity:
//! a local identity plus a typed model. An empty identity means the entity
//! is not (or no longer) tracked and the framework should drop it from state.

use crate::diagnostics::Diagnostics;
use crate::schema::{decode, Schema};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Locally tracked state of a single resource instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceData<M> {
    /// Local identity; empty when untracked
    id: String,

    /// Typed attribute values
    model: M,
}

impl<M> ResourceData<M> {
    /// Create an untracked record.
    pub fn new(model: M) -> Self {
        Self {
            id: String::new(),
            model,
        }
    }

    /// Create a record tracked under `id`.
    pub fn with_id(id: impl Into<String>, model: M) -> Self {
        Self {
            id: id.into(),
            model,
        }
    }

    /// Local identity (empty when untracked).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Start tracking under `id`.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Stop tracking; the framework removes the resource from state.
    pub fn clear_id(&mut self) {
        self.id.clear();
    }

    /// Whether the record is tracked.
    pub fn is_tracked(&self) -> bool {
        !self.id.is_empty()
    }

    /// Attribute values.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable attribute values.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Replace every attribute value at once.
    pub fn set_model(&mut self, model: M) {
        self.model = model;
    }

    /// Consume the record, returning its attribute values.
    pub fn into_model(self) -> M {
        self.model
    }
}

impl<M: DeserializeOwned> ResourceData<M> {
    /// Build an untracked record from user configuration.
    pub fn from_config(schema: &Schema, config: &Value) -> Result<Self, Diagnostics> {
        decode(schema, config).map(Self::new)
    }

    /// Rebuild a tracked record from previously saved state.
    pub fn from_state(id: impl Into<String>, state: Value) -> Result<Self, serde_json::Error> {
        let model = serde_json::from_value(state)?;
        Ok(Self::with_id(id, model))
    }
}

impl<M: Serialize> ResourceData<M> {
    /// State to hand back to the framework; `None` when untracked.
    pub fn to_state(&self) -> Result<Option<Value>, serde_json::Error> {
        if !self.is_tracked() {
            return Ok(None);
        }
        serde_json::to_value(&self.model).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Model {
        name: String,
    }

    #[test]
    fn test_identity_lifecycle() {
        let mut d = ResourceData::new(Model::default());
        assert!(!d.is_tracked());

        d.set_id("0a1b2c3d4e5f6789");
        assert!(d.is_tracked());
        assert_eq!(d.id(), "0a1b2c3d4e5f6789");

        d.clear_id();
        assert!(!d.is_tracked());
        assert_eq!(d.id(), "");
    }

    #[test]
    fn test_state_round_trip() {
        let d = ResourceData::with_id("abc", Model { name: "acme".to_string() });
        let state = d.to_state().unwrap().unwrap();
        assert_eq!(state, serde_json::json!({ "name": "acme" }));

        let restored: ResourceData<Model> = ResourceData::from_state("abc", state).unwrap();
        assert_eq!(restored, d);
    }

    #[test]
    fn test_untracked_has_no_state() {
        let d = ResourceData::new(Model::default());
        assert_eq!(d.to_state().unwrap(), None);
    }
}
