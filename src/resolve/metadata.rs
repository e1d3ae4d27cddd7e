//! Published-metadata lookup used by the default heuristic
//!
//! The resolver never fetches anything itself. Whatever knows how to read an
//! artifact's published descriptor (a remote index, a local repository, a test
//! map) implements `MetadataSource`.

use crate::core::error::DecomposeResult;
use crate::release::ArtifactCoords;
use std::collections::HashMap;

/// Source-control metadata lookup for artifacts
///
/// Implementations return `Ok(None)` when the artifact's metadata is available
/// but carries no source-control information, and `Err(_)` when the metadata
/// itself cannot be retrieved.
pub trait MetadataSource: Send + Sync {
  /// Source-control connection string recorded for the artifact
  fn fetch_scm_connection(&self, artifact: &ArtifactCoords) -> DecomposeResult<Option<String>>;

  /// Source-control tag recorded for the artifact
  /// Default: no tag information
  fn fetch_scm_tag(&self, _artifact: &ArtifactCoords) -> DecomposeResult<Option<String>> {
    Ok(None)
  }
}

/// Scm metadata published for one artifact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScmMetadata {
  pub connection: Option<String>,
  pub tag: Option<String>,
}

/// In-memory metadata keyed by `group:name:version`
///
/// Artifacts with no entry are reported as having no scm information.
#[derive(Debug, Clone, Default)]
pub struct StaticMetadataSource {
  entries: HashMap<String, ScmMetadata>,
}

impl StaticMetadataSource {
  pub fn new() -> Self {
    Self::default()
  }

  fn key(group: &str, name: &str, version: &str) -> String {
    format!("{}:{}:{}", group, name, version)
  }

  /// Record a connection (and optional tag) for `group:name:version`
  pub fn with_scm(mut self, gav: &str, connection: impl Into<String>, tag: Option<&str>) -> Self {
    self.entries.insert(
      gav.to_string(),
      ScmMetadata {
        connection: Some(connection.into()),
        tag: tag.map(str::to_string),
      },
    );
    self
  }

  fn lookup(&self, artifact: &ArtifactCoords) -> Option<&ScmMetadata> {
    self
      .entries
      .get(&Self::key(&artifact.group, &artifact.name, &artifact.version))
  }
}

impl MetadataSource for StaticMetadataSource {
  fn fetch_scm_connection(&self, artifact: &ArtifactCoords) -> DecomposeResult<Option<String>> {
    Ok(self.lookup(artifact).and_then(|m| m.connection.clone()))
  }

  fn fetch_scm_tag(&self, artifact: &ArtifactCoords) -> DecomposeResult<Option<String>> {
    Ok(self.lookup(artifact).and_then(|m| m.tag.clone()))
  }
}
