//! # Ferrule Provider
//!
//! In-process adapter that lets a caller invoke a schema-driven
//! provider as if it were a local object. The backend only speaks a
//! schema-typed encoding over wire-shaped requests; this crate
//! performs every semantic step a real transport would — schema
//! lookup, typed-value encoding, dispatch, decoding, diagnostics
//! propagation — without a process boundary.
//!
//! Modules:
//! - `codec`: Dynamic value codec seam and the default JSON codec
//! - `cache`: Lazily populated, thread-safe provider schema cache
//! - `backend`: Wire-shaped dispatch trait the adapter drives
//! - `null`: No-op provider used as the fallback capability table
//! - `adapter`: The in-process provider built on all of the above
//!
//! ## Usage
//!
//! ```rust
//! use ferrule_provider::{InProcessProvider, Provider};
//! use ferrule_provider::backend::ProviderBackend;
//! use ferrule_provider::error::DispatchError;
//! use ferrule_types::{SchemaResponse, WireReadResourceRequest, WireReadResourceResponse};
//!
//! struct EchoBackend;
//!
//! impl ProviderBackend for EchoBackend {
//!     fn fetch_schema(&self) -> Result<SchemaResponse, DispatchError> {
//!         Ok(SchemaResponse::default())
//!     }
//!
//!     fn read_resource(&self, request: WireReadResourceRequest) -> Result<WireReadResourceResponse, DispatchError> {
//!         Ok(WireReadResourceResponse {
//!             new_state: request.current_state,
//!             private: request.private,
//!             diagnostics: Default::default(),
//!         })
//!     }
//! }
//!
//! let provider = InProcessProvider::new(EchoBackend);
//! let schema = provider.schema()?;
//! assert!(schema.diagnostics.is_empty());
//! # Ok::<(), ferrule_provider::error::AdapterError>(())
//! ```

use ferrule_types::{
    ApplyResourceChangeRequest, ApplyResourceChangeResponse, ConfigureRequest, ConfigureResponse, ImportResourceStateRequest,
    ImportResourceStateResponse, PlanResourceChangeRequest, PlanResourceChangeResponse, PrepareProviderConfigRequest,
    PrepareProviderConfigResponse, ReadDataSourceRequest, ReadDataSourceResponse, ReadResourceRequest, ReadResourceResponse,
    SchemaResponse, UpgradeResourceStateRequest, UpgradeResourceStateResponse, ValidateDataSourceConfigRequest,
    ValidateDataSourceConfigResponse, ValidateResourceTypeConfigRequest, ValidateResourceTypeConfigResponse,
};

pub mod adapter;
pub mod backend;
pub mod cache;
pub mod codec;
pub mod error;
pub mod null;

pub use adapter::InProcessProvider;
pub use backend::ProviderBackend;
pub use cache::SchemaCache;
pub use codec::{CodecError, DynamicCodec, JsonCodec};
pub use error::{AdapterError, DispatchError};
pub use null::NullProvider;

/// The provider capability set.
///
/// Every response carries its diagnostics; that list is the only
/// channel recoverable failures use. An `Err` from any method is a
/// fatal [`AdapterError`] the host must treat as non-recoverable.
pub trait Provider: Send + Sync {
    /// Retrieve the complete schema set for the provider.
    fn schema(&self) -> Result<SchemaResponse, AdapterError>;

    /// Validate the provider configuration and apply defaults.
    fn prepare_provider_config(&self, request: PrepareProviderConfigRequest) -> Result<PrepareProviderConfigResponse, AdapterError>;

    /// Validate one resource type's configuration values.
    fn validate_resource_type_config(
        &self,
        request: ValidateResourceTypeConfigRequest,
    ) -> Result<ValidateResourceTypeConfigResponse, AdapterError>;

    /// Validate one data source's configuration values.
    fn validate_data_source_config(
        &self,
        request: ValidateDataSourceConfigRequest,
    ) -> Result<ValidateDataSourceConfigResponse, AdapterError>;

    /// Upgrade state recorded under an older schema version.
    fn upgrade_resource_state(&self, request: UpgradeResourceStateRequest) -> Result<UpgradeResourceStateResponse, AdapterError>;

    /// Configure and initialize the provider.
    fn configure(&self, request: ConfigureRequest) -> Result<ConfigureResponse, AdapterError>;

    /// Refresh a resource and return its current state.
    fn read_resource(&self, request: ReadResourceRequest) -> Result<ReadResourceResponse, AdapterError>;

    /// Plan a change from prior to proposed state.
    fn plan_resource_change(&self, request: PlanResourceChangeRequest) -> Result<PlanResourceChangeResponse, AdapterError>;

    /// Apply a previously planned change and return the final state.
    fn apply_resource_change(&self, request: ApplyResourceChangeRequest) -> Result<ApplyResourceChangeResponse, AdapterError>;

    /// Import an existing resource by identifier.
    fn import_resource_state(&self, request: ImportResourceStateRequest) -> Result<ImportResourceStateResponse, AdapterError>;

    /// Read a data source's current state.
    fn read_data_source(&self, request: ReadDataSourceRequest) -> Result<ReadDataSourceResponse, AdapterError>;

    /// Ask the provider to halt in-flight actions. Must not block
    /// waiting for them to complete.
    fn stop(&self) -> anyhow::Result<()>;

    /// Release anything the provider holds. No further calls are made
    /// after close.
    fn close(&self) -> anyhow::Result<()>;
}
