//! Backend dispatch seam.
//!
//! A [`ProviderBackend`] is the in-process stand-in for the transport
//! a real plugin host would own. It only understands wire-shaped
//! requests carrying schema-typed encoded state; the adapter does all
//! schema lookup and value conversion on its behalf.

use ferrule_types::{SchemaResponse, WireReadResourceRequest, WireReadResourceResponse};

use crate::error::DispatchError;

/// Dispatch surface of a schema-typed backend.
///
/// Each call is synchronous and bounded by the backend's own
/// contract; cancellation and timeouts are the backend's concern.
pub trait ProviderBackend: Send + Sync {
    /// Retrieve the provider's complete schema set. Errors the
    /// backend wants to report travel in the response's diagnostics;
    /// a `DispatchError` means the call itself could not be made.
    fn fetch_schema(&self) -> Result<SchemaResponse, DispatchError>;

    /// Refresh one resource from its encoded prior state.
    fn read_resource(&self, request: WireReadResourceRequest) -> Result<WireReadResourceResponse, DispatchError>;
}
