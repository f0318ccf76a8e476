//! Error types for the in-process provider adapter.
//!
//! Two channels exist and never mix: [`AdapterError`] carries fatal,
//! contract-level faults the host must treat as non-recoverable, while
//! recoverable per-call failures travel as diagnostics on the typed
//! response. [`DispatchError`] is the backend's transport-level
//! failure; the adapter converts it into a diagnostic.

use thiserror::Error;

/// Fatal adapter faults.
///
/// Both variants indicate the caller and the provider schema are out
/// of sync. The host should abort the current call path rather than
/// continue with partial data.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("provider schema unavailable: {summary}")]
    SchemaUnavailable { summary: String },

    #[error("unknown resource type: {type_name}")]
    UnknownResourceType { type_name: String },
}

impl AdapterError {
    /// Create a schema-unavailable error.
    pub fn schema_unavailable(summary: impl Into<String>) -> Self {
        Self::SchemaUnavailable { summary: summary.into() }
    }

    /// Create an unknown-resource-type error.
    pub fn unknown_resource_type(type_name: impl Into<String>) -> Self {
        Self::UnknownResourceType {
            type_name: type_name.into(),
        }
    }
}

/// Transport-level failure reported by a backend dispatch.
#[derive(Debug, Error)]
#[error("backend dispatch failed: {message}")]
pub struct DispatchError {
    pub message: String,
}

impl DispatchError {
    /// Create a dispatch error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
