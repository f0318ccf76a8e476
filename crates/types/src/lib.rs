//! # Ferrule Types
//!
//! Shared type definitions for the ferrule provider capability set.
//!
//! Modules:
//! - `diagnostics`: Ordered error/warning lists attached to every response
//! - `schema`: Provider/resource schema model and implied value types
//! - `ops`: Typed request/response pairs for each provider operation
//! - `wire`: Backend-facing request/response shapes carrying encoded state

pub mod diagnostics;
pub mod ops;
pub mod schema;
pub mod wire;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use ops::{
    ApplyResourceChangeRequest, ApplyResourceChangeResponse, ConfigureRequest, ConfigureResponse, ImportResourceStateRequest,
    ImportResourceStateResponse, ImportedResource, PlanResourceChangeRequest, PlanResourceChangeResponse,
    PrepareProviderConfigRequest, PrepareProviderConfigResponse, ReadDataSourceRequest, ReadDataSourceResponse,
    ReadResourceRequest, ReadResourceResponse, UpgradeResourceStateRequest, UpgradeResourceStateResponse,
    ValidateDataSourceConfigRequest, ValidateDataSourceConfigResponse, ValidateResourceTypeConfigRequest,
    ValidateResourceTypeConfigResponse,
};
pub use schema::{Attribute, Block, ProviderSchema, Schema, SchemaResponse, ValueType};
pub use wire::{WireReadResourceRequest, WireReadResourceResponse};
