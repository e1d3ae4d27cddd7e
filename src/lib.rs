//! Attribute dependency-manifest artifacts to the upstream releases they were built from
//!
//! Two halves:
//!
//! - **Resolution** ([`resolve`], [`detectors`]): an artifact coordinate goes through
//!   an ordered chain of narrow override detectors; the first `Some` wins,
//!   otherwise the default heuristic derives the release id from the artifact's
//!   published scm metadata.
//! - **Materialization** ([`install`]): a [`ProjectRelease`] (optionally under an
//!   aggregator parent) is written into a repository layout as manifests plus
//!   placeholder content, producing fixtures that can be resolved again.
//!
//! # Example
//!
//! ```rust,ignore
//! use bom_decomposer::{ReleaseIdResolver, StaticMetadataSource, decompose};
//! use std::sync::Arc;
//!
//! let resolver = ReleaseIdResolver::new(Arc::new(StaticMetadataSource::new()));
//! let artifacts = vec!["org.acme:acme-core:1.0".parse()?];
//! let decomposition = decompose(&resolver, &artifacts, true)?;
//! for release in decomposition.releases() {
//!   println!("{} ({} artifacts)", release.id(), release.len());
//! }
//! ```

pub mod core;
pub mod detectors;
pub mod install;
pub mod release;
pub mod resolve;
mod utils;

pub use crate::core::config::{DecomposerConfig, RelocationConfig};
pub use crate::core::error::{ConfigError, DecomposeError, DecomposeResult, ResultExt, ValidationError};
pub use detectors::{DetectorChain, ReleaseIdDetector, default_chain};
pub use install::{ArtifactManifest, LocalRepository, ReleaseInstaller, RepositoryMetadataSource};
pub use release::{
  ArtifactCoords, ProjectDependency, ProjectRelease, ProjectReleaseBuilder, ReleaseId, ReleaseOrigin, ReleaseVersion,
};
pub use resolve::{DefaultHeuristic, Decomposition, MetadataSource, ReleaseIdResolver, StaticMetadataSource, decompose};
