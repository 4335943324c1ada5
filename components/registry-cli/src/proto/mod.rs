//! Generated wire types for the `registry.DataRegistry` service.
//!
//! `registry.rs` is prost/tonic output checked in from `proto/registry.proto`
//! at the workspace root, so the crate builds without a system protoc.

pub mod registry;
