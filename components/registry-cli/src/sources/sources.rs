//! Source management operations.
//!
//! Each operation builds one request envelope, issues one unary RPC against
//! the registry, and unwraps the returned record. The registry owns all
//! source semantics (identity, persistence, uniqueness); failures propagate
//! verbatim with no retry or fallback. A response missing its record field
//! is treated the same way as any other registry error.

use anyhow::{Context, Result};

use crate::proto::registry::{
    GetSourceRequest, ListSourcesRequest, RegisterSourceRequest, Source, UpdateSourceRequest,
    source::SourceType,
};
use crate::registry::client::Registry;

/// Register an S3 source whose samples live under `s3_root`.
pub async fn create_data_source(
    registry: &mut Registry,
    source_id: &str,
    s3_root: &str,
) -> Result<Source> {
    let source = Source {
        id: source_id.to_string(),
        source_type: SourceType::SourceS3 as i32,
        data_access_spec: s3_root.to_string(),
    };

    let request = RegisterSourceRequest {
        version: registry.version.clone(),
        source: Some(source),
    };

    tracing::debug!(source_id, "registering source");
    let response = registry.client.register_source(request).await?.into_inner();
    response
        .source
        .context("registry returned an empty RegisterSource response")
}

/// Fetch the canonical record for a source id.
///
/// The data-registration flow uses this as its resolver: the returned
/// `data_access_spec` is the storage root that new samples are uploaded
/// under.
pub async fn get_data_source(registry: &mut Registry, source_id: &str) -> Result<Source> {
    let request = GetSourceRequest {
        version: registry.version.clone(),
        id: source_id.to_string(),
    };

    tracing::debug!(source_id, "fetching source");
    let response = registry.client.get_source(request).await?.into_inner();
    response
        .source
        .context("registry returned an empty GetSource response")
}

/// Append a free-text note to a source record. No structural change.
pub async fn update_data_source(
    registry: &mut Registry,
    source_id: &str,
    message: &str,
) -> Result<Source> {
    let request = UpdateSourceRequest {
        version: registry.version.clone(),
        id: source_id.to_string(),
        notes: message.to_string(),
    };

    tracing::debug!(source_id, "updating source");
    let response = registry.client.update_source(request).await?.into_inner();
    response
        .source
        .context("registry returned an empty UpdateSource response")
}

/// List registered sources, `num_items` starting at `offset`. Ordering is
/// the registry's.
pub async fn list_data_sources(
    registry: &mut Registry,
    offset: u64,
    num_items: u64,
) -> Result<Vec<Source>> {
    let request = ListSourcesRequest {
        version: registry.version.clone(),
        offset,
        num_items,
    };

    tracing::debug!(offset, num_items, "listing sources");
    let response = registry.client.list_sources(request).await?.into_inner();
    Ok(response.sources)
}
