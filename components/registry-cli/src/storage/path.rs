//! Object-store URI codec.
//!
//! Sole authority for translating between `s3://bucket/key...` strings and
//! their structural parts. `decompose` is a permissive parse, not a
//! validating one: bucket-name legality and key character sets are enforced
//! by the object store itself, whose errors propagate to the caller.

/// Scheme prefix of a canonical object-store URI.
pub const S3_SCHEME: &str = "s3://";

/// Split an object-store URI into `(bucket, key)`.
///
/// Strips the `s3://` prefix if present; without it the whole string is
/// treated as already being `bucket/key...`. A URI with no `/` after the
/// bucket yields an empty key.
pub fn decompose(uri: &str) -> (&str, &str) {
    let remainder = uri.strip_prefix(S3_SCHEME).unwrap_or(uri);
    match remainder.split_once('/') {
        Some((bucket, key)) => (bucket, key),
        None => (remainder, ""),
    }
}

/// Build the canonical `s3://{bucket}/{key}` form, always prefixed,
/// regardless of how the decomposed input was spelled.
pub fn compose(bucket: &str, key: &str) -> String {
    format!("{S3_SCHEME}{bucket}/{key}")
}

/// Join a source root key and a datum id into an object key.
///
/// An empty root collapses to just the id, so sources whose access spec is a
/// bare bucket do not grow a leading `/`.
pub fn object_key(root_key: &str, datum_id: &str) -> String {
    if root_key.is_empty() {
        datum_id.to_string()
    } else {
        format!("{root_key}/{datum_id}")
    }
}

/// Final path segment of an object key, used as the local filename when
/// downloading.
pub fn target_filename(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_canonical_uri() {
        let (bucket, key) = decompose("s3://bucket1/imgs/abc.png");
        assert_eq!(bucket, "bucket1");
        assert_eq!(key, "imgs/abc.png");
    }

    #[test]
    fn test_decompose_without_scheme() {
        let (bucket, key) = decompose("bucket/key/sub");
        assert_eq!(bucket, "bucket");
        assert_eq!(key, "key/sub");
    }

    #[test]
    fn test_decompose_bare_bucket_yields_empty_key() {
        assert_eq!(decompose("s3://bucket1"), ("bucket1", ""));
        assert_eq!(decompose("bucket1"), ("bucket1", ""));
    }

    #[test]
    fn test_compose_is_always_prefixed() {
        assert_eq!(compose("bucket1", "imgs/x"), "s3://bucket1/imgs/x");
    }

    #[test]
    fn test_round_trip() {
        for (bucket, key) in [
            ("bucket1", "imgs/abc"),
            ("b", ""),
            ("data-bucket", "deep/nested/key.bin"),
        ] {
            assert_eq!(decompose(&compose(bucket, key)), (bucket, key));
        }
    }

    #[test]
    fn test_object_key_collapses_empty_root() {
        assert_eq!(object_key("", "uuid-1"), "uuid-1");
        assert_eq!(object_key("imgs", "uuid-1"), "imgs/uuid-1");
    }

    #[test]
    fn test_target_filename_is_final_segment() {
        assert_eq!(target_filename("imgs/uuid-1"), "uuid-1");
        assert_eq!(target_filename("uuid-1"), "uuid-1");
        assert_eq!(target_filename(""), "");
    }
}
