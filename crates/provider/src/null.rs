//! No-op implementation of the full provider capability set.
//!
//! Every operation returns a zero-valued response with empty
//! diagnostics, and `stop`/`close` succeed trivially. Concrete
//! adapters hold one of these and forward the operations they do not
//! implement themselves, so the capability set can grow without
//! touching every adapter.

use ferrule_types::{
    ApplyResourceChangeRequest, ApplyResourceChangeResponse, ConfigureRequest, ConfigureResponse, ImportResourceStateRequest,
    ImportResourceStateResponse, PlanResourceChangeRequest, PlanResourceChangeResponse, PrepareProviderConfigRequest,
    PrepareProviderConfigResponse, ReadDataSourceRequest, ReadDataSourceResponse, ReadResourceRequest, ReadResourceResponse,
    SchemaResponse, UpgradeResourceStateRequest, UpgradeResourceStateResponse, ValidateDataSourceConfigRequest,
    ValidateDataSourceConfigResponse, ValidateResourceTypeConfigRequest, ValidateResourceTypeConfigResponse,
};

use crate::Provider;
use crate::error::AdapterError;

/// Stateless, side-effect-free provider.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProvider;

impl Provider for NullProvider {
    fn schema(&self) -> Result<SchemaResponse, AdapterError> {
        Ok(SchemaResponse::default())
    }

    fn prepare_provider_config(&self, _request: PrepareProviderConfigRequest) -> Result<PrepareProviderConfigResponse, AdapterError> {
        Ok(PrepareProviderConfigResponse::default())
    }

    fn validate_resource_type_config(
        &self,
        _request: ValidateResourceTypeConfigRequest,
    ) -> Result<ValidateResourceTypeConfigResponse, AdapterError> {
        Ok(ValidateResourceTypeConfigResponse::default())
    }

    fn validate_data_source_config(
        &self,
        _request: ValidateDataSourceConfigRequest,
    ) -> Result<ValidateDataSourceConfigResponse, AdapterError> {
        Ok(ValidateDataSourceConfigResponse::default())
    }

    fn upgrade_resource_state(&self, _request: UpgradeResourceStateRequest) -> Result<UpgradeResourceStateResponse, AdapterError> {
        Ok(UpgradeResourceStateResponse::default())
    }

    fn configure(&self, _request: ConfigureRequest) -> Result<ConfigureResponse, AdapterError> {
        Ok(ConfigureResponse::default())
    }

    fn read_resource(&self, _request: ReadResourceRequest) -> Result<ReadResourceResponse, AdapterError> {
        Ok(ReadResourceResponse::default())
    }

    fn plan_resource_change(&self, _request: PlanResourceChangeRequest) -> Result<PlanResourceChangeResponse, AdapterError> {
        Ok(PlanResourceChangeResponse::default())
    }

    fn apply_resource_change(&self, _request: ApplyResourceChangeRequest) -> Result<ApplyResourceChangeResponse, AdapterError> {
        Ok(ApplyResourceChangeResponse::default())
    }

    fn import_resource_state(&self, _request: ImportResourceStateRequest) -> Result<ImportResourceStateResponse, AdapterError> {
        Ok(ImportResourceStateResponse::default())
    }

    fn read_data_source(&self, _request: ReadDataSourceRequest) -> Result<ReadDataSourceResponse, AdapterError> {
        Ok(ReadDataSourceResponse::default())
    }

    fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }

    fn close(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
