//! Backend-facing request/response shapes.
//!
//! These are the forms a real transport would put on the wire: state
//! travels as schema-typed encoded bytes, private bytes are opaque,
//! and the provider-meta blob is present only when the provider's
//! schema declares a meta block.

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;

/// Wire form of a read-resource call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireReadResourceRequest {
    pub type_name: String,
    /// Prior state encoded against the resource schema's implied type.
    pub current_state: Vec<u8>,
    /// Opaque bytes the backend round-trips verbatim.
    pub private: Vec<u8>,
    /// Encoded provider-meta value; `None` when the provider declares
    /// no meta block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_meta: Option<Vec<u8>>,
}

/// Wire form of a read-resource result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireReadResourceResponse {
    /// Refreshed state encoded against the resource schema's implied
    /// type; empty when the backend has no state to report.
    pub new_state: Vec<u8>,
    pub private: Vec<u8>,
    pub diagnostics: Diagnostics,
}
