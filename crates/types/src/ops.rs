//! Typed request/response pairs for the provider capability set.
//!
//! Every response owns a [`Diagnostics`] list; it is always present
//! (possibly empty) and is the only channel recoverable failures use.
//! Dynamic state and configuration travel as [`serde_json::Value`],
//! judged against a schema's implied type at encode time; `Null`
//! stands for absent state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diagnostics::Diagnostics;

/// Request for validating and defaulting the provider configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrepareProviderConfigRequest {
    pub config: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrepareProviderConfigResponse {
    /// Configuration with provider-side defaults applied.
    pub prepared_config: Value,
    pub diagnostics: Diagnostics,
}

/// Request for validating one resource type's configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidateResourceTypeConfigRequest {
    pub type_name: String,
    pub config: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidateResourceTypeConfigResponse {
    pub diagnostics: Diagnostics,
}

/// Request for validating one data source's configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidateDataSourceConfigRequest {
    pub type_name: String,
    pub config: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidateDataSourceConfigResponse {
    pub diagnostics: Diagnostics,
}

/// Request to upgrade state recorded under an older schema version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpgradeResourceStateRequest {
    pub type_name: String,
    /// Schema version the raw state was written with.
    pub version: u64,
    /// State as stored, encoded under the old schema.
    pub raw_state: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpgradeResourceStateResponse {
    pub upgraded_state: Value,
    pub diagnostics: Diagnostics,
}

/// Request to configure and initialize the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigureRequest {
    pub config: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigureResponse {
    pub diagnostics: Diagnostics,
}

/// Request to refresh one resource and return its current state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadResourceRequest {
    pub type_name: String,
    /// Most recently known state for the resource.
    pub prior_state: Value,
    /// Value for the provider-meta block; ignored when the provider
    /// declares none.
    pub provider_meta: Value,
    /// Opaque bytes round-tripped verbatim to the backend and back.
    pub private: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadResourceResponse {
    /// Refreshed state, or `Null` when the read failed or the
    /// resource no longer exists.
    pub new_state: Value,
    pub private: Vec<u8>,
    pub diagnostics: Diagnostics,
}

/// Request to plan a change from prior to proposed state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanResourceChangeRequest {
    pub type_name: String,
    pub prior_state: Value,
    pub proposed_new_state: Value,
    pub config: Value,
    pub prior_private: Vec<u8>,
    pub provider_meta: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanResourceChangeResponse {
    pub planned_state: Value,
    /// Attribute paths whose change forces replacement.
    pub requires_replace: Vec<String>,
    pub planned_private: Vec<u8>,
    pub diagnostics: Diagnostics,
}

/// Request to apply a previously planned change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplyResourceChangeRequest {
    pub type_name: String,
    pub prior_state: Value,
    pub planned_state: Value,
    pub config: Value,
    pub planned_private: Vec<u8>,
    pub provider_meta: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplyResourceChangeResponse {
    pub new_state: Value,
    pub private: Vec<u8>,
    pub diagnostics: Diagnostics,
}

/// Request to import an existing resource by identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportResourceStateRequest {
    pub type_name: String,
    pub id: String,
}

/// One resource produced by an import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportedResource {
    pub type_name: String,
    pub state: Value,
    pub private: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportResourceStateResponse {
    pub imported_resources: Vec<ImportedResource>,
    pub diagnostics: Diagnostics,
}

/// Request to read a data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadDataSourceRequest {
    pub type_name: String,
    pub config: Value,
    pub provider_meta: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadDataSourceResponse {
    pub state: Value,
    pub diagnostics: Diagnostics,
}
