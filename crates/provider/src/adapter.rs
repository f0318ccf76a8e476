//! The in-process provider adapter.
//!
//! [`InProcessProvider`] wraps a [`ProviderBackend`] and implements
//! the full [`Provider`] capability set. The read path is wired end to
//! end: schema resolution through the cache, prior-state encoding,
//! wire dispatch, new-state decoding, and ordered diagnostics merging.
//! Capabilities the adapter does not implement forward explicitly to
//! its [`NullProvider`] fallback table.

use ferrule_types::{
    ApplyResourceChangeRequest, ApplyResourceChangeResponse, ConfigureRequest, ConfigureResponse, Diagnostic, Diagnostics,
    ImportResourceStateRequest, ImportResourceStateResponse, PlanResourceChangeRequest, PlanResourceChangeResponse,
    PrepareProviderConfigRequest, PrepareProviderConfigResponse, ReadDataSourceRequest, ReadDataSourceResponse,
    ReadResourceRequest, ReadResourceResponse, SchemaResponse, UpgradeResourceStateRequest, UpgradeResourceStateResponse,
    ValidateDataSourceConfigRequest, ValidateDataSourceConfigResponse, ValidateResourceTypeConfigRequest,
    ValidateResourceTypeConfigResponse, WireReadResourceRequest,
};

use crate::Provider;
use crate::backend::ProviderBackend;
use crate::cache::SchemaCache;
use crate::codec::{DynamicCodec, JsonCodec};
use crate::error::AdapterError;
use crate::null::NullProvider;

/// Adapter that presents a schema-typed backend as a local
/// [`Provider`].
pub struct InProcessProvider<B: ProviderBackend> {
    backend: B,
    codec: Box<dyn DynamicCodec>,
    cache: SchemaCache,
    /// Fallback capability table for operations this adapter does not
    /// wire to the backend.
    fallback: NullProvider,
}

impl<B: ProviderBackend> InProcessProvider<B> {
    /// Create an adapter over `backend` using the default codec.
    pub fn new(backend: B) -> Self {
        Self::with_codec(backend, Box::new(JsonCodec))
    }

    /// Create an adapter with an explicit codec.
    pub fn with_codec(backend: B, codec: Box<dyn DynamicCodec>) -> Self {
        Self {
            backend,
            codec,
            cache: SchemaCache::new(),
            fallback: NullProvider,
        }
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Populate the schema cache ahead of the first operation.
    pub fn prefetch_schema(&self) -> Result<(), AdapterError> {
        self.cache.schema(&self.backend).map(|_| ())
    }
}

impl<B: ProviderBackend> Provider for InProcessProvider<B> {
    fn schema(&self) -> Result<SchemaResponse, AdapterError> {
        tracing::trace!("provider: schema");
        let schema = self.cache.schema(&self.backend)?;
        Ok(SchemaResponse {
            schema,
            diagnostics: Diagnostics::new(),
        })
    }

    fn read_resource(&self, request: ReadResourceRequest) -> Result<ReadResourceResponse, AdapterError> {
        tracing::trace!(type_name = %request.type_name, "provider: read_resource");
        let mut response = ReadResourceResponse::default();

        let resource_schema = self.cache.resource_schema(&self.backend, &request.type_name)?;
        let meta_schema = self.cache.provider_meta_schema(&self.backend)?;
        let state_type = resource_schema.codec_type();

        let current_state = match self.codec.encode(&request.prior_state, &state_type) {
            Ok(bytes) => bytes,
            Err(error) => {
                // Without encoded prior state there is nothing valid
                // to dispatch.
                response.diagnostics.push(Diagnostic::from_error(error));
                return Ok(response);
            }
        };

        let mut wire_request = WireReadResourceRequest {
            type_name: request.type_name.clone(),
            current_state,
            private: request.private,
            provider_meta: None,
        };

        // The meta blob is attached only when the provider's schema
        // declares a meta block; the caller's value alone never forces
        // it on or off.
        if meta_schema.has_block() {
            match self.codec.encode(&request.provider_meta, &meta_schema.codec_type()) {
                Ok(bytes) => wire_request.provider_meta = Some(bytes),
                Err(error) => {
                    response.diagnostics.push(Diagnostic::from_error(error));
                    return Ok(response);
                }
            }
        }

        let wire_response = match self.backend.read_resource(wire_request) {
            Ok(wire_response) => wire_response,
            Err(error) => {
                tracing::warn!(type_name = %request.type_name, %error, "read_resource dispatch failed");
                response.diagnostics.push(Diagnostic::from_error(error));
                return Ok(response);
            }
        };

        response.diagnostics.extend(wire_response.diagnostics);

        match self.codec.decode(&wire_response.new_state, &state_type) {
            Ok(new_state) => response.new_state = new_state,
            Err(error) => {
                // Never hand back a partially decoded value.
                response.diagnostics.push(Diagnostic::from_error(error));
                return Ok(response);
            }
        }
        response.private = wire_response.private;

        Ok(response)
    }

    fn prepare_provider_config(&self, request: PrepareProviderConfigRequest) -> Result<PrepareProviderConfigResponse, AdapterError> {
        self.fallback.prepare_provider_config(request)
    }

    fn validate_resource_type_config(
        &self,
        request: ValidateResourceTypeConfigRequest,
    ) -> Result<ValidateResourceTypeConfigResponse, AdapterError> {
        self.fallback.validate_resource_type_config(request)
    }

    fn validate_data_source_config(
        &self,
        request: ValidateDataSourceConfigRequest,
    ) -> Result<ValidateDataSourceConfigResponse, AdapterError> {
        self.fallback.validate_data_source_config(request)
    }

    fn upgrade_resource_state(&self, request: UpgradeResourceStateRequest) -> Result<UpgradeResourceStateResponse, AdapterError> {
        self.fallback.upgrade_resource_state(request)
    }

    fn configure(&self, request: ConfigureRequest) -> Result<ConfigureResponse, AdapterError> {
        self.fallback.configure(request)
    }

    fn plan_resource_change(&self, request: PlanResourceChangeRequest) -> Result<PlanResourceChangeResponse, AdapterError> {
        self.fallback.plan_resource_change(request)
    }

    fn apply_resource_change(&self, request: ApplyResourceChangeRequest) -> Result<ApplyResourceChangeResponse, AdapterError> {
        self.fallback.apply_resource_change(request)
    }

    fn import_resource_state(&self, request: ImportResourceStateRequest) -> Result<ImportResourceStateResponse, AdapterError> {
        self.fallback.import_resource_state(request)
    }

    fn read_data_source(&self, request: ReadDataSourceRequest) -> Result<ReadDataSourceResponse, AdapterError> {
        self.fallback.read_data_source(request)
    }

    fn stop(&self) -> anyhow::Result<()> {
        tracing::trace!("provider: stop");
        Ok(())
    }

    fn close(&self) -> anyhow::Result<()> {
        tracing::trace!("provider: close");
        Ok(())
    }
}
