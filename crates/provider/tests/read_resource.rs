//! End-to-end scenarios for the in-process read-resource path.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ferrule_provider::backend::ProviderBackend;
use ferrule_provider::error::{AdapterError, DispatchError};
use ferrule_provider::{InProcessProvider, Provider};
use ferrule_types::{
    Attribute, Block, Diagnostic, Diagnostics, ProviderSchema, ReadResourceRequest, Schema, SchemaResponse, Severity,
    ValueType, WireReadResourceRequest, WireReadResourceResponse,
};
use indexmap::IndexMap;
use serde_json::{Value, json};

/// Backend that echoes the encoded prior state back as the new state.
struct EchoBackend {
    schema: ProviderSchema,
    response_private: Vec<u8>,
    response_diagnostics: Diagnostics,
    /// When set, returned as `new_state` instead of the echo.
    new_state_override: Option<Vec<u8>>,
    fail_dispatch: AtomicBool,
    schema_fetches: AtomicUsize,
    last_request: Mutex<Option<WireReadResourceRequest>>,
}

impl EchoBackend {
    fn new(schema: ProviderSchema) -> Self {
        Self {
            schema,
            response_private: Vec::new(),
            response_diagnostics: Diagnostics::new(),
            new_state_override: None,
            fail_dispatch: AtomicBool::new(false),
            schema_fetches: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    fn with_private(mut self, private: Vec<u8>) -> Self {
        self.response_private = private;
        self
    }

    fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.response_diagnostics = diagnostics;
        self
    }

    fn with_new_state(mut self, bytes: Vec<u8>) -> Self {
        self.new_state_override = Some(bytes);
        self
    }

    fn last_request(&self) -> Option<WireReadResourceRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

impl ProviderBackend for EchoBackend {
    fn fetch_schema(&self) -> Result<SchemaResponse, DispatchError> {
        self.schema_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(SchemaResponse {
            schema: self.schema.clone(),
            diagnostics: Diagnostics::new(),
        })
    }

    fn read_resource(&self, request: WireReadResourceRequest) -> Result<WireReadResourceResponse, DispatchError> {
        if self.fail_dispatch.load(Ordering::SeqCst) {
            return Err(DispatchError::new("backend unreachable"));
        }
        let new_state = self.new_state_override.clone().unwrap_or_else(|| request.current_state.clone());
        *self.last_request.lock().unwrap() = Some(request);
        Ok(WireReadResourceResponse {
            new_state,
            private: self.response_private.clone(),
            diagnostics: self.response_diagnostics.clone(),
        })
    }
}

fn widget_schema(with_meta: bool) -> ProviderSchema {
    let mut attributes = IndexMap::new();
    attributes.insert("id".to_string(), Attribute::required(ValueType::String));
    let mut resource_types = IndexMap::new();
    resource_types.insert("widget".to_string(), Schema::new(1, Block { attributes }));

    let provider_meta = if with_meta {
        let mut meta_attributes = IndexMap::new();
        meta_attributes.insert("tenant".to_string(), Attribute::optional(ValueType::String));
        Schema::new(0, Block {
            attributes: meta_attributes,
        })
    } else {
        Schema::default()
    };

    ProviderSchema {
        provider_meta,
        resource_types,
        ..Default::default()
    }
}

fn widget_request(prior_state: Value) -> ReadResourceRequest {
    ReadResourceRequest {
        type_name: "widget".to_string(),
        prior_state,
        provider_meta: Value::Null,
        private: Vec::new(),
    }
}

#[test]
fn test_echo_backend_round_trips_state() {
    let backend = EchoBackend::new(widget_schema(false)).with_private(vec![9]);
    let provider = InProcessProvider::new(backend);

    let response = provider.read_resource(widget_request(json!({"id": "abc"}))).unwrap();

    assert_eq!(response.new_state, json!({"id": "abc"}));
    assert_eq!(response.private, vec![9]);
    assert!(response.diagnostics.is_empty());

    let wire = provider.backend().last_request().unwrap();
    assert_eq!(wire.type_name, "widget");
    assert!(wire.private.is_empty());
    assert!(wire.provider_meta.is_none());
}

#[test]
fn test_private_bytes_round_trip_verbatim() {
    let backend = EchoBackend::new(widget_schema(false)).with_private(vec![1, 2, 3]);
    let provider = InProcessProvider::new(backend);

    let mut request = widget_request(json!({"id": "abc"}));
    request.private = vec![7, 7];
    let response = provider.read_resource(request).unwrap();

    let wire = provider.backend().last_request().unwrap();
    assert_eq!(wire.private, vec![7, 7]);
    assert_eq!(response.private, vec![1, 2, 3]);
}

#[test]
fn test_dispatch_failure_reported_as_diagnostic() {
    let backend = EchoBackend::new(widget_schema(false));
    backend.fail_dispatch.store(true, Ordering::SeqCst);
    let provider = InProcessProvider::new(backend);

    let response = provider.read_resource(widget_request(json!({"id": "abc"}))).unwrap();

    assert_eq!(response.new_state, Value::Null);
    assert!(response.private.is_empty());
    assert_eq!(response.diagnostics.len(), 1);
    assert!(response.diagnostics.has_errors());
}

#[test]
fn test_dispatch_failure_does_not_affect_later_calls() {
    let backend = EchoBackend::new(widget_schema(false));
    backend.fail_dispatch.store(true, Ordering::SeqCst);
    let provider = InProcessProvider::new(backend);

    let failed = provider.read_resource(widget_request(json!({"id": "abc"}))).unwrap();
    assert!(failed.diagnostics.has_errors());

    provider.backend().fail_dispatch.store(false, Ordering::SeqCst);
    let ok = provider.read_resource(widget_request(json!({"id": "abc"}))).unwrap();
    assert!(ok.diagnostics.is_empty());
    assert_eq!(ok.new_state, json!({"id": "abc"}));
}

#[test]
fn test_meta_attached_only_when_schema_declares_it() {
    // schema declares a meta block: the blob must be present
    let provider = InProcessProvider::new(EchoBackend::new(widget_schema(true)));
    let mut request = widget_request(json!({"id": "abc"}));
    request.provider_meta = json!({"tenant": "t1"});
    provider.read_resource(request).unwrap();

    let wire = provider.backend().last_request().unwrap();
    let meta_bytes = wire.provider_meta.expect("meta blob must be attached");
    let meta: Value = serde_json::from_slice(&meta_bytes).unwrap();
    assert_eq!(meta, json!({"tenant": "t1"}));

    // no meta block: the field stays absent even when the caller
    // passes a value
    let provider = InProcessProvider::new(EchoBackend::new(widget_schema(false)));
    let mut request = widget_request(json!({"id": "abc"}));
    request.provider_meta = json!({"tenant": "t1"});
    provider.read_resource(request).unwrap();

    let wire = provider.backend().last_request().unwrap();
    assert!(wire.provider_meta.is_none());
}

#[test]
fn test_unknown_resource_type_is_fatal() {
    let provider = InProcessProvider::new(EchoBackend::new(widget_schema(false)));
    let mut request = widget_request(json!({"id": "abc"}));
    request.type_name = "does-not-exist".to_string();

    let err = provider.read_resource(request).unwrap_err();
    assert!(matches!(err, AdapterError::UnknownResourceType { .. }));
}

#[test]
fn test_encode_failure_suppresses_dispatch() {
    let provider = InProcessProvider::new(EchoBackend::new(widget_schema(false)));

    let response = provider.read_resource(widget_request(json!({"id": 5}))).unwrap();

    assert!(response.diagnostics.has_errors());
    assert_eq!(response.new_state, Value::Null);
    assert!(provider.backend().last_request().is_none(), "must not dispatch undefined bytes");
}

#[test]
fn test_backend_diagnostics_merge_before_decode_failure() {
    let mut backend_diags = Diagnostics::new();
    backend_diags.push(Diagnostic::warning("resource drifted"));
    let backend = EchoBackend::new(widget_schema(false))
        .with_diagnostics(backend_diags)
        .with_new_state(b"\x00garbage".to_vec());
    let provider = InProcessProvider::new(backend);

    let response = provider.read_resource(widget_request(json!({"id": "abc"}))).unwrap();

    // backend entries first, local decode error appended after
    assert_eq!(response.diagnostics.len(), 2);
    let severities: Vec<_> = response.diagnostics.iter().map(|d| d.severity).collect();
    assert_eq!(severities, vec![Severity::Warning, Severity::Error]);
    assert_eq!(response.new_state, Value::Null, "partial decode must not leak state");
}

#[test]
fn test_decode_failure_leaves_state_and_private_unset() {
    let backend = EchoBackend::new(widget_schema(false))
        .with_private(vec![9])
        .with_new_state(b"not json".to_vec());
    let provider = InProcessProvider::new(backend);

    let response = provider.read_resource(widget_request(json!({"id": "abc"}))).unwrap();

    assert!(response.diagnostics.has_errors());
    assert_eq!(response.new_state, Value::Null);
    assert!(response.private.is_empty());
}

#[test]
fn test_schema_served_from_cache_across_operations() {
    let provider = InProcessProvider::new(EchoBackend::new(widget_schema(false)));

    let first = provider.schema().unwrap();
    let second = provider.schema().unwrap();
    assert_eq!(first, second);

    provider.read_resource(widget_request(json!({"id": "abc"}))).unwrap();
    assert_eq!(provider.backend().schema_fetches.load(Ordering::SeqCst), 1);
}

#[test]
fn test_concurrent_reads_share_one_schema_fetch() {
    let provider = Arc::new(InProcessProvider::new(EchoBackend::new(widget_schema(false)).with_private(vec![9])));
    provider.prefetch_schema().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let provider = Arc::clone(&provider);
            std::thread::spawn(move || provider.read_resource(widget_request(json!({"id": "abc"}))).unwrap())
        })
        .collect();

    for handle in handles {
        let response = handle.join().unwrap();
        assert_eq!(response.new_state, json!({"id": "abc"}));
        assert!(response.diagnostics.is_empty());
    }
    assert_eq!(provider.backend().schema_fetches.load(Ordering::SeqCst), 1);
}
