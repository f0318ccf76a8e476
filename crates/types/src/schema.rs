//! Provider and resource schema model.
//!
//! A [`Schema`] describes the shape of a resource type's (or the
//! provider's own) configuration and state. Its [`Block`] derives an
//! implied [`ValueType`] which is the contract the dynamic value codec
//! encodes and decodes against.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;

/// Concrete value shape derived from a schema block.
///
/// This is the type the codec judges dynamic values against; a value
/// either conforms to its implied type or fails to encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Number,
    Bool,
    /// Homogeneous ordered collection.
    List(Box<ValueType>),
    /// Homogeneous string-keyed collection.
    Map(Box<ValueType>),
    /// Fixed set of named fields.
    Object(IndexMap<String, ValueType>),
}

/// A single named attribute within a schema block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub value_type: ValueType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Attribute {
    /// Optional attribute of the given type.
    pub fn optional(value_type: ValueType) -> Self {
        Self {
            value_type,
            required: false,
            description: None,
        }
    }

    /// Required attribute of the given type.
    pub fn required(value_type: ValueType) -> Self {
        Self {
            value_type,
            required: true,
            description: None,
        }
    }
}

/// Field listing for one schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub attributes: IndexMap<String, Attribute>,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Derive the value shape this block implies: an object whose
    /// fields carry each attribute's type.
    pub fn implied_type(&self) -> ValueType {
        ValueType::Object(
            self.attributes
                .iter()
                .map(|(name, attribute)| (name.clone(), attribute.value_type.clone()))
                .collect(),
        )
    }
}

/// Versioned schema for one resource type, data source, or the
/// provider itself. Immutable once fetched.
///
/// A schema with no block is the absent schema; provider-meta uses
/// this to signal that the provider declares no meta block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub version: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<Block>,
}

impl Schema {
    pub fn new(version: u64, block: Block) -> Self {
        Self {
            version,
            block: Some(block),
        }
    }

    /// Implied value shape, or `None` when the schema has no block.
    pub fn implied_type(&self) -> Option<ValueType> {
        self.block.as_ref().map(Block::implied_type)
    }

    /// Whether this schema declares any fields at all.
    pub fn has_block(&self) -> bool {
        self.block.as_ref().is_some_and(|b| !b.is_empty())
    }

    /// Implied type handed to the codec: the block's implied type, or
    /// an empty object for a schema with no block.
    pub fn codec_type(&self) -> ValueType {
        match &self.block {
            Some(block) => block.implied_type(),
            None => Block::default().implied_type(),
        }
    }
}

/// Complete schema set for one provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSchema {
    /// Schema for the provider's own configuration block.
    pub provider: Schema,
    /// Optional provider-meta schema; absent when `block` is `None`.
    pub provider_meta: Schema,
    /// Resource type name to schema.
    pub resource_types: IndexMap<String, Schema>,
    /// Data source name to schema.
    pub data_sources: IndexMap<String, Schema>,
}

/// Result of the backend's schema-retrieval operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaResponse {
    pub schema: ProviderSchema,
    pub diagnostics: Diagnostics,
}
