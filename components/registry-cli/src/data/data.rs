//! Data operations - responsibility and behavior
//!
//! Three operations over the samples registered under a source:
//! - `describe_data` issues one GetData RPC and hands back the registry's
//!   response stream unmodified: lazy, exhausted once, ordered by the
//!   registry.
//! - `download_data` drives that stream and materializes each datum's
//!   backing object into a target directory.
//! - `register_data` uploads a batch of local files under the source's
//!   storage root and streams one datum registration per successful upload.
//!
//! Partial-failure contract: a failure on one object (missing, permission
//! denied, network error) is recorded as a diagnostic and the batch
//! continues with the next item - batch operations never abort early on a
//! per-item storage failure. Registry-side failures are the other tier:
//! they propagate to the caller untouched.
//!
//! Identity: datum ids are UUIDv4, generated here before the remote call.
//! The registry never assigns identity, so uniqueness rests on the
//! generator alone. The object key is `root_key/{uuid}` - the original
//! filename survives only as a tag and as object metadata, never in the
//! key.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio_stream::{Stream, StreamExt};
use tonic::codec::Streaming;
use uuid::Uuid;

use crate::proto::registry::{
    Datum, GetDataRequest, GetDataResponse, RegisterDataRequest, RegisterDataResponse, Source,
};
use crate::registry::client::Registry;
use crate::sources::sources;
use crate::storage::path;
use crate::storage::storage::ObjectStore;

/// Tag key under which each datum keeps its original filename.
pub const FILENAME_TAG: &str = "filename";

/// Diagnostic for one item that failed inside a batch operation: the local
/// file (register) or object key (download) plus the collaborator's message
/// text.
#[derive(Debug)]
pub struct ItemFailure {
    pub item: String,
    pub message: String,
}

/// Result of a best-effort batch download. `downloaded` may be shorter than
/// the number of data described; the difference is accounted for in
/// `failures`.
#[derive(Debug, Default)]
pub struct DownloadOutcome {
    pub downloaded: Vec<PathBuf>,
    pub failures: Vec<ItemFailure>,
}

/// Result of a batch registration. One response per file that uploaded
/// successfully - not per file requested, so callers must not assume
/// index-alignment with their input list.
#[derive(Debug, Default)]
pub struct RegisterOutcome {
    pub responses: Vec<RegisterDataResponse>,
    pub failures: Vec<ItemFailure>,
}

/// Describe data registered under a source, optionally restricted to a set
/// of datum ids. Returns the registry's response stream as-is; it is not
/// restartable.
pub async fn describe_data(
    registry: &mut Registry,
    source_id: &str,
    data_ids: Option<&[String]>,
) -> Result<Streaming<GetDataResponse>> {
    let mut request = GetDataRequest {
        version: registry.version.clone(),
        source_id: source_id.to_string(),
        ids: Vec::new(),
    };
    if let Some(ids) = data_ids {
        request.ids.extend_from_slice(ids);
    }

    tracing::debug!(source_id, "describing data");
    Ok(registry.client.get_data(request).await?.into_inner())
}

/// Download every described datum's backing object into `target_dir`,
/// creating the directory if absent. Local filenames come from the final
/// path segment of each object key.
pub async fn download_data<S: ObjectStore>(
    registry: &mut Registry,
    store: &S,
    source_id: &str,
    data_ids: Option<&[String]>,
    target_dir: &Path,
) -> Result<DownloadOutcome> {
    let responses = describe_data(registry, source_id, data_ids).await?;
    download_stream(store, responses, target_dir).await
}

async fn download_stream<S, St>(
    store: &S,
    mut responses: St,
    target_dir: &Path,
) -> Result<DownloadOutcome>
where
    S: ObjectStore,
    St: Stream<Item = Result<GetDataResponse, tonic::Status>> + Unpin,
{
    tokio::fs::create_dir_all(target_dir)
        .await
        .with_context(|| format!("failed to create target directory {}", target_dir.display()))?;

    let mut outcome = DownloadOutcome::default();
    while let Some(response) = responses.try_next().await? {
        let Some(datum) = response.datum else {
            tracing::error!("registry response carried no datum");
            outcome.failures.push(ItemFailure {
                item: "<no datum>".to_string(),
                message: "registry response carried no datum".to_string(),
            });
            continue;
        };

        let (bucket, key) = path::decompose(&datum.content);
        let target_path = target_dir.join(path::target_filename(key));
        match store.download_file(bucket, key, &target_path).await {
            Ok(()) => outcome.downloaded.push(target_path),
            Err(err) => {
                tracing::error!(datum_id = %datum.id, "{err}");
                outcome.failures.push(ItemFailure {
                    item: key.to_string(),
                    message: err.to_string(),
                });
            }
        }
    }

    Ok(outcome)
}

/// Upload a batch of local files under a source's storage root and register
/// one datum per successful upload.
///
/// The source is resolved once; files are processed strictly in input
/// order. Accumulated registrations go out as a single RegisterData stream
/// and the response stream is collected in full, so the returned outcome
/// holds exactly one response per uploaded file.
pub async fn register_data<S: ObjectStore>(
    registry: &mut Registry,
    store: &S,
    source_id: &str,
    files: &[PathBuf],
    tags: &HashMap<String, String>,
) -> Result<RegisterOutcome> {
    let source = sources::get_data_source(registry, source_id).await?;
    let (bucket, root_key) = path::decompose(&source.data_access_spec);

    let (requests, failures) =
        upload_batch(store, &source, bucket, root_key, files, tags, &registry.version).await;

    tracing::debug!(requests = requests.len(), "streaming datum registrations");
    let mut inbound = registry
        .client
        .register_data(tokio_stream::iter(requests))
        .await?
        .into_inner();

    let mut responses = Vec::new();
    while let Some(response) = inbound.message().await? {
        responses.push(response);
    }

    Ok(RegisterOutcome { responses, failures })
}

/// Per-file upload loop: fresh UUIDv4 id, object key `root_key/{uuid}`,
/// upload with the filename as object metadata, one registration request
/// per success. Failed files are skipped, never retried. The tag map is
/// copied per file so the injected `filename` tag cannot leak across the
/// batch or back to the caller.
async fn upload_batch<S: ObjectStore>(
    store: &S,
    source: &Source,
    bucket: &str,
    root_key: &str,
    files: &[PathBuf],
    tags: &HashMap<String, String>,
    version: &str,
) -> (Vec<RegisterDataRequest>, Vec<ItemFailure>) {
    let mut requests = Vec::new();
    let mut failures = Vec::new();

    for file in files {
        let datum_id = Uuid::new_v4().to_string();
        let key = path::object_key(root_key, &datum_id);
        let filename = file.display().to_string();

        match store.upload_file(file, bucket, &key, &filename).await {
            Ok(()) => {
                let mut datum_tags = tags.clone();
                datum_tags.insert(FILENAME_TAG.to_string(), filename);
                requests.push(RegisterDataRequest {
                    version: version.to_string(),
                    datum: Some(Datum {
                        id: datum_id,
                        source: Some(source.clone()),
                        content: path::compose(bucket, &key),
                        tags: datum_tags,
                    }),
                });
            }
            Err(err) => {
                tracing::error!(file = %file.display(), "{err}");
                failures.push(ItemFailure {
                    item: filename,
                    message: err.to_string(),
                });
            }
        }
    }

    (requests, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::registry::source::SourceType;
    use crate::storage::storage::StorageError;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Programmable object-store fake: records calls, fails on request.
    #[derive(Debug, Default)]
    struct FakeStore {
        fail_uploads: Vec<PathBuf>,
        fail_downloads: Vec<String>,
        uploads: Mutex<Vec<(PathBuf, String, String, String)>>,
    }

    impl ObjectStore for FakeStore {
        async fn upload_file(
            &self,
            local_path: &Path,
            bucket: &str,
            key: &str,
            filename: &str,
        ) -> Result<(), StorageError> {
            if self.fail_uploads.iter().any(|f| f == local_path) {
                return Err(StorageError::Upload {
                    key: key.to_string(),
                    message: "access denied".to_string(),
                });
            }
            self.uploads.lock().unwrap().push((
                local_path.to_path_buf(),
                bucket.to_string(),
                key.to_string(),
                filename.to_string(),
            ));
            Ok(())
        }

        async fn download_file(
            &self,
            _bucket: &str,
            key: &str,
            _target_path: &Path,
        ) -> Result<(), StorageError> {
            if self.fail_downloads.iter().any(|k| k == key) {
                return Err(StorageError::Download {
                    key: key.to_string(),
                    message: "no such key".to_string(),
                });
            }
            Ok(())
        }
    }

    fn test_source(access_spec: &str) -> Source {
        Source {
            id: "s3-imgs".to_string(),
            source_type: SourceType::SourceS3 as i32,
            data_access_spec: access_spec.to_string(),
        }
    }

    fn datum_response(content: &str) -> GetDataResponse {
        GetDataResponse {
            version: String::new(),
            datum: Some(Datum {
                id: "d".to_string(),
                source: Some(test_source("s3://bucket1/imgs")),
                content: content.to_string(),
                tags: HashMap::new(),
            }),
        }
    }

    #[tokio::test]
    async fn test_register_batch_builds_expected_requests() {
        let store = FakeStore::default();
        let source = test_source("s3://bucket1/imgs");
        let files = [PathBuf::from("a.png"), PathBuf::from("b.png")];
        let tags = HashMap::from([("label".to_string(), "cat".to_string())]);

        let (requests, failures) = upload_batch(
            &store,
            &source,
            "bucket1",
            "imgs",
            &files,
            &tags,
            "datareg/0.2.1",
        )
        .await;

        assert!(failures.is_empty());
        assert_eq!(requests.len(), 2);
        for (request, file) in requests.iter().zip(["a.png", "b.png"]) {
            assert_eq!(request.version, "datareg/0.2.1");
            let datum = request.datum.as_ref().unwrap();
            assert!(datum.content.starts_with("s3://bucket1/imgs/"));
            assert_eq!(datum.tags["label"], "cat");
            assert_eq!(datum.tags[FILENAME_TAG], file);
            assert_eq!(datum.source.as_ref().unwrap().id, "s3-imgs");
        }
    }

    #[tokio::test]
    async fn test_register_keys_independent_of_filename() {
        // Same basename for every file in the batch: ids and keys must
        // still all be distinct, and the basename must never reach the key.
        let store = FakeStore::default();
        let source = test_source("s3://bucket1/imgs");
        let files: Vec<PathBuf> = (0..64)
            .map(|i| PathBuf::from(format!("dir{i}/sample.png")))
            .collect();
        let tags = HashMap::new();

        let (requests, failures) = upload_batch(
            &store,
            &source,
            "bucket1",
            "imgs",
            &files,
            &tags,
            "datareg/0.2.1",
        )
        .await;

        assert!(failures.is_empty());
        let ids: HashSet<_> = requests
            .iter()
            .map(|r| r.datum.as_ref().unwrap().id.clone())
            .collect();
        let contents: HashSet<_> = requests
            .iter()
            .map(|r| r.datum.as_ref().unwrap().content.clone())
            .collect();
        assert_eq!(ids.len(), 64);
        assert_eq!(contents.len(), 64);
        assert!(contents.iter().all(|c| !c.contains("sample.png")));
    }

    #[tokio::test]
    async fn test_register_partial_failure_skips_failed_uploads() {
        let files = [
            PathBuf::from("a.png"),
            PathBuf::from("b.png"),
            PathBuf::from("c.png"),
            PathBuf::from("d.png"),
        ];
        let store = FakeStore {
            fail_uploads: vec![PathBuf::from("b.png"), PathBuf::from("d.png")],
            ..FakeStore::default()
        };
        let source = test_source("s3://bucket1/imgs");

        let (requests, failures) = upload_batch(
            &store,
            &source,
            "bucket1",
            "imgs",
            &files,
            &HashMap::new(),
            "datareg/0.2.1",
        )
        .await;

        assert_eq!(requests.len(), 2);
        assert_eq!(failures.len(), 2);
        assert_eq!(store.uploads.lock().unwrap().len(), 2);
        assert_eq!(failures[0].item, "b.png");
        assert_eq!(failures[1].item, "d.png");
    }

    #[tokio::test]
    async fn test_register_tag_map_is_copied_per_file() {
        let store = FakeStore::default();
        let source = test_source("s3://bucket1/imgs");
        let files = [PathBuf::from("a.png"), PathBuf::from("b.png")];
        let tags = HashMap::from([("label".to_string(), "cat".to_string())]);

        let (requests, _) = upload_batch(
            &store,
            &source,
            "bucket1",
            "imgs",
            &files,
            &tags,
            "datareg/0.2.1",
        )
        .await;

        // Caller's map is untouched and no filename tag leaks across files.
        assert!(!tags.contains_key(FILENAME_TAG));
        assert_eq!(requests[0].datum.as_ref().unwrap().tags[FILENAME_TAG], "a.png");
        assert_eq!(requests[1].datum.as_ref().unwrap().tags[FILENAME_TAG], "b.png");
    }

    #[tokio::test]
    async fn test_register_root_collapses_for_bare_bucket_source() {
        let store = FakeStore::default();
        let source = test_source("s3://bucket1");
        let (bucket, root_key) = path::decompose(&source.data_access_spec);

        let (requests, _) = upload_batch(
            &store,
            &source,
            bucket,
            root_key,
            &[PathBuf::from("a.png")],
            &HashMap::new(),
            "datareg/0.2.1",
        )
        .await;

        let datum = requests[0].datum.as_ref().unwrap();
        let (_, key) = path::decompose(&datum.content);
        assert!(!key.starts_with('/'));
        assert!(!key.contains('/'));
    }

    #[tokio::test]
    async fn test_download_stream_is_best_effort() {
        let store = FakeStore {
            fail_downloads: vec!["imgs/bad".to_string()],
            ..FakeStore::default()
        };
        let responses = vec![
            Ok(datum_response("s3://bucket1/imgs/good-1")),
            Ok(datum_response("s3://bucket1/imgs/bad")),
            Ok(datum_response("s3://bucket1/imgs/good-2")),
        ];
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("samples");

        let outcome = download_stream(&store, tokio_stream::iter(responses), &target)
            .await
            .unwrap();

        assert_eq!(outcome.downloaded.len(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].item, "imgs/bad");
        assert_eq!(outcome.downloaded[0], target.join("good-1"));
        assert_eq!(outcome.downloaded[1], target.join("good-2"));
        // Target directory was created on demand.
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn test_download_stream_propagates_registry_errors() {
        let store = FakeStore::default();
        let responses: Vec<Result<GetDataResponse, tonic::Status>> = vec![
            Ok(datum_response("s3://bucket1/imgs/good-1")),
            Err(tonic::Status::internal("registry fell over")),
        ];
        let dir = tempfile::tempdir().unwrap();

        let result = download_stream(&store, tokio_stream::iter(responses), dir.path()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_download_stream_records_missing_datum() {
        let store = FakeStore::default();
        let responses = vec![Ok(GetDataResponse {
            version: String::new(),
            datum: None,
        })];
        let dir = tempfile::tempdir().unwrap();

        let outcome = download_stream(&store, tokio_stream::iter(responses), dir.path())
            .await
            .unwrap();
        assert!(outcome.downloaded.is_empty());
        assert_eq!(outcome.failures.len(), 1);
    }
}
