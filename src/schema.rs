use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de};
use strum_macros::{Display, EnumString};

use crate::error::Result;

/// The `type` keyword of a schema node, reduced to a single semantic kind.
///
/// JSON Schema allows `type` to be an array of strings to express nullable
/// unions (e.g. `["string", "null"]`); the first non-`"null"` entry wins,
/// and an array with no usable entry falls back to `String`.
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SchemaType {
    String,
    Integer,
    Number,
    Boolean,
    Null,
    Array,
    Object,
    #[strum(default)]
    Other(String),
}

impl Default for SchemaType {
    fn default() -> Self {
        SchemaType::Other(String::new())
    }
}

impl SchemaType {
    fn from_type_str(value: &str) -> SchemaType {
        SchemaType::from_str(value).unwrap_or_else(|_| SchemaType::Other(value.to_owned()))
    }
}

impl<'de> Deserialize<'de> for SchemaType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawType {
            Single(String),
            Union(Vec<String>),
        }

        let raw = RawType::deserialize(deserializer)
            .map_err(|_| de::Error::custom("type must be a string or an array of strings"))?;
        match raw {
            RawType::Single(value) => Ok(SchemaType::from_type_str(&value)),
            RawType::Union(values) => Ok(values
                .iter()
                .find(|value| value.as_str() != "null")
                .map(|value| SchemaType::from_type_str(value))
                .unwrap_or(SchemaType::String)),
        }
    }
}

/// One node of a JSON Schema document.
///
/// Unknown keywords are ignored during deserialization; `definitions` and
/// `$defs` only carry meaning on the document root.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Schema {
    pub r#type: SchemaType,
    #[serde(rename = "$ref")]
    pub reference: String,
    pub properties: IndexMap<String, Schema>,
    pub items: Option<Box<Schema>>,
    pub format: String,
    pub title: String,
    pub definitions: IndexMap<String, Schema>,
    #[serde(rename = "$defs")]
    pub defs: IndexMap<String, Schema>,
}

/// Parse the raw bytes of a JSON Schema document into a [`Schema`] tree.
pub fn parse_schema(data: &[u8]) -> Result<Schema> {
    Ok(serde_json::from_slice(data)?)
}
