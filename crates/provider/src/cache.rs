//! Lazily populated, thread-safe provider schema cache.
//!
//! The schema is fetched from the backend at most once per adapter
//! instance under normal operation and never invalidated. The lock is
//! released before the fetch so readers of a populated cache never
//! wait on a backend call; two callers racing the very first fetch may
//! both hit the backend, which is harmless since the fetch is
//! idempotent and the first stored result wins.

use std::sync::Mutex;

use ferrule_types::{ProviderSchema, Schema};

use crate::backend::ProviderBackend;
use crate::error::AdapterError;

/// One adapter's cached copy of the provider schema.
///
/// Lifecycle: created empty at adapter construction, populated on
/// first use (or an explicit pre-fetch), lives for the adapter's
/// entire lifetime.
#[derive(Debug, Default)]
pub struct SchemaCache {
    cached: Mutex<Option<ProviderSchema>>,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached schema, fetching it from the backend first if
    /// this cache is still empty.
    ///
    /// A fetch whose diagnostics contain errors is fatal: the caller's
    /// operation cannot proceed against a partially-populated schema,
    /// so this returns [`AdapterError::SchemaUnavailable`] and leaves
    /// the cache empty. A later call is allowed to try again.
    pub fn schema(&self, backend: &dyn ProviderBackend) -> Result<ProviderSchema, AdapterError> {
        let guard = self.lock();
        if let Some(schema) = guard.as_ref() {
            return Ok(schema.clone());
        }
        // Unlock before the backend call so populated readers never
        // block behind a fetch.
        drop(guard);

        tracing::debug!("fetching provider schema");
        let response = backend
            .fetch_schema()
            .map_err(|error| AdapterError::schema_unavailable(error.to_string()))?;
        if response.diagnostics.has_errors() {
            return Err(AdapterError::schema_unavailable(response.diagnostics.error_summary()));
        }

        let mut guard = self.lock();
        let schema = guard.get_or_insert(response.schema);
        Ok(schema.clone())
    }

    /// Look up the schema for one resource type.
    ///
    /// An unknown name is a contract fault between caller and
    /// provider, reported as [`AdapterError::UnknownResourceType`].
    pub fn resource_schema(&self, backend: &dyn ProviderBackend, type_name: &str) -> Result<Schema, AdapterError> {
        let schema = self.schema(backend)?;
        schema
            .resource_types
            .get(type_name)
            .cloned()
            .ok_or_else(|| AdapterError::unknown_resource_type(type_name))
    }

    /// The provider-meta schema. Absence of a meta block is normal,
    /// not an error; callers check [`Schema::has_block`].
    pub fn provider_meta_schema(&self, backend: &dyn ProviderBackend) -> Result<Schema, AdapterError> {
        Ok(self.schema(backend)?.provider_meta)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<ProviderSchema>> {
        // A poisoned lock only means another thread panicked while
        // holding it; the Option inside is still coherent.
        self.cached.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
