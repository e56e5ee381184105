//! Attribute schemas
//!
//! Describes the configuration surface of resources and data sources, and
//! validates raw configuration objects before they are decoded into typed
//! models.

use crate::diagnostics::{Diagnostic, Diagnostics};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Value type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    /// UTF-8 string
    String,
    /// 64-bit integer
    Int,
    /// Boolean
    Bool,
}

impl AttributeType {
    /// Whether `value` has this type.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Int => value.is_i64() || value.is_u64(),
            Self::Bool => value.is_boolean(),
        }
    }

    /// Type name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "number",
            Self::Bool => "bool",
        }
    }
}

/// A single attribute of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Value type
    #[serde(rename = "type")]
    pub ty: AttributeType,

    /// Human-readable description
    pub description: String,

    /// Must be set in configuration
    pub required: bool,

    /// May be set in configuration
    pub optional: bool,

    /// Filled in by the provider
    pub computed: bool,

    /// Hidden from plan output
    #[serde(default)]
    pub sensitive: bool,
}

impl Attribute {
    fn new(ty: AttributeType) -> Self {
        Self {
            ty,
            description: String::new(),
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
        }
    }

    /// A required string.
    pub fn required_string() -> Self {
        Self {
            required: true,
            ..Self::new(AttributeType::String)
        }
    }

    /// An optional string.
    pub fn optional_string() -> Self {
        Self {
            optional: true,
            ..Self::new(AttributeType::String)
        }
    }

    /// A string the provider always fills in.
    pub fn computed_string() -> Self {
        Self {
            computed: true,
            ..Self::new(AttributeType::String)
        }
    }

    /// A string that may be set, and is filled in when it is not.
    pub fn optional_computed_string() -> Self {
        Self {
            optional: true,
            computed: true,
            ..Self::new(AttributeType::String)
        }
    }

    /// An integer the provider always fills in.
    pub fn computed_int() -> Self {
        Self {
            computed: true,
            ..Self::new(AttributeType::Int)
        }
    }

    /// An optional integer.
    pub fn optional_int() -> Self {
        Self {
            optional: true,
            ..Self::new(AttributeType::Int)
        }
    }

    /// An optional boolean.
    pub fn optional_bool() -> Self {
        Self {
            optional: true,
            ..Self::new(AttributeType::Bool)
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the attribute as sensitive.
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Whether only the provider may set this attribute.
    pub fn is_computed_only(&self) -> bool {
        self.computed && !self.optional && !self.required
    }
}

/// Schema of a resource, data source, or provider block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Human-readable description
    pub description: String,

    /// Attributes keyed by name
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    /// Add every attribute from `attributes`.
    pub fn with_attributes(mut self, attributes: BTreeMap<String, Attribute>) -> Self {
        self.attributes = merge_schemas(self.attributes, attributes);
        self
    }

    /// Look up an attribute.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Validate a configuration object against this schema.
    ///
    /// `null` values count as unset.
    pub fn validate(&self, config: &Value) -> Diagnostics {
        let mut diags = Diagnostics::new();

        let object = match config.as_object() {
            Some(object) => object,
            None => {
                diags.push(Diagnostic::error("Configuration must be an object"));
                return diags;
            }
        };

        for (name, value) in object {
            if value.is_null() {
                continue;
            }
            let attribute = match self.attributes.get(name) {
                Some(attribute) => attribute,
                None => {
                    diags.push(
                        Diagnostic::error("Unsupported argument")
                            .with_detail(format!(
                                "An argument named \"{}\" is not expected here.",
                                name
                            ))
                            .with_attribute(name.clone()),
                    );
                    continue;
                }
            };
            if attribute.is_computed_only() {
                diags.push(
                    Diagnostic::error("Value for unconfigurable attribute")
                        .with_detail(format!(
                            "Can't configure a value for \"{}\": its value will be decided \
                             automatically.",
                            name
                        ))
                        .with_attribute(name.clone()),
                );
            } else if !attribute.ty.accepts(value) {
                diags.push(
                    Diagnostic::error("Incorrect attribute value type")
                        .with_detail(format!("{} required.", attribute.ty.as_str()))
                        .with_attribute(name.clone()),
                );
            }
        }

        for (name, attribute) in &self.attributes {
            let missing = object.get(name).map_or(true, Value::is_null);
            if attribute.required && missing {
                diags.push(
                    Diagnostic::error("Missing required argument")
                        .with_detail(format!(
                            "The argument \"{}\" is required, but no definition was found.",
                            name
                        ))
                        .with_attribute(name.clone()),
                );
            }
        }

        diags
    }
}

/// Merge two attribute maps; entries in `extra` win.
pub fn merge_schemas(
    mut base: BTreeMap<String, Attribute>,
    extra: BTreeMap<String, Attribute>,
) -> BTreeMap<String, Attribute> {
    base.extend(extra);
    base
}

/// Computed creation/update time attributes shared by every entity.
pub fn created_updated_schema(entity: &str) -> BTreeMap<String, Attribute> {
    let mut attributes = BTreeMap::new();
    attributes.insert(
        "created_at".to_string(),
        Attribute::computed_string()
            .with_description(format!("The string time when the {} was created.", entity)),
    );
    attributes.insert(
        "updated_at".to_string(),
        Attribute::computed_string()
            .with_description(format!("The string time when the {} was last updated.", entity)),
    );
    attributes.insert(
        "created_timestamp".to_string(),
        Attribute::computed_int()
            .with_description(format!("The Unix timestamp when the {} was created.", entity)),
    );
    attributes.insert(
        "updated_timestamp".to_string(),
        Attribute::computed_int()
            .with_description(format!("The Unix timestamp when the {} was last updated.", entity)),
    );
    attributes
}

/// Validate `config` against `schema` and decode it into `M`.
pub fn decode<M: DeserializeOwned>(schema: &Schema, config: &Value) -> Result<M, Diagnostics> {
    schema.validate(config).into_result()?;
    serde_json::from_value(config.clone()).map_err(|e| {
        Diagnostics::from(Diagnostic::error("Invalid configuration").with_detail(e.to_string()))
    })
}
