use serde::{Deserialize, Serialize};

use crate::types::SchemaRecord;

/// Manifest format version this builder understands.
pub const MANIFEST_VERSION: u32 = 1;

/// `manifest.json` at the root of a build input directory.
#[derive(Deserialize, Clone, Debug)]
pub struct InputManifest {
    pub version: u32,
    /// Schema definition files, relative to the manifest. Order here is the
    /// order of the generated schema table.
    pub schemas: Vec<String>,
}

/// A documented configuration object as the documentation generator sees it.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SchemaDefinition {
    pub name: String,
    /// Page link; defaults to `schema.<name>.html`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
}

impl SchemaDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: PropertyDefinition) -> Self {
        self.properties.push(property);
        self
    }

    pub fn page_path(&self) -> String {
        self.path
            .clone()
            .unwrap_or_else(|| format!("schema.{}.html", self.name))
    }

    pub fn record(&self) -> SchemaRecord {
        SchemaRecord::new(self.name.clone(), self.page_path())
    }
}

/// One configuration key. A key holding a dictionary may describe the
/// dictionary's own keys, which are searchable under the parent schema.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "PropertyValue")]
pub struct PropertyDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<DictionarySchema>,
}

impl PropertyDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
        }
    }

    pub fn dictionary(name: impl Into<String>, properties: Vec<PropertyDefinition>) -> Self {
        Self {
            name: name.into(),
            schema: Some(DictionarySchema { properties }),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct DictionarySchema {
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
}

/// Properties may be written as a bare key name or as a full object.
#[derive(Deserialize)]
#[serde(untagged)]
enum PropertyValue {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        schema: Option<DictionarySchema>,
    },
}

impl From<PropertyValue> for PropertyDefinition {
    fn from(val: PropertyValue) -> Self {
        match val {
            PropertyValue::Name(name) => PropertyDefinition { name, schema: None },
            PropertyValue::Full { name, schema } => PropertyDefinition { name, schema },
        }
    }
}
