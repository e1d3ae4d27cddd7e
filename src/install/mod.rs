//! Synthetic repository materializer
//!
//! - **repository**: repository layout and scoped writes (`LocalRepository`)
//! - **manifest**: per-artifact TOML manifests (`ArtifactManifest`)
//! - **installer**: writes a `ProjectRelease` and its aggregator parent (`ReleaseInstaller`)
//! - **metadata_source**: reads installed manifests back for re-resolution
//!
//! Resolution never touches the filesystem; only fixture construction and the
//! repository-backed metadata source do.

pub mod installer;
pub mod manifest;
pub mod metadata_source;
pub mod repository;

pub use installer::ReleaseInstaller;
pub use manifest::{ArtifactManifest, Packaging, ParentRef, ScmSection};
pub use metadata_source::RepositoryMetadataSource;
pub use repository::{LocalRepository, MANIFEST_EXTENSION};
