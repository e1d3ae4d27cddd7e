//! `MetadataSource` backed by manifests in a materialized repository

use super::manifest::ArtifactManifest;
use super::repository::LocalRepository;
use crate::core::error::{DecomposeError, DecomposeResult};
use crate::release::ArtifactCoords;
use crate::resolve::MetadataSource;

/// Reads scm metadata from the manifest installed for an artifact
///
/// A missing or unreadable manifest means the metadata cannot be retrieved and
/// is reported as a resolution error.
#[derive(Debug, Clone)]
pub struct RepositoryMetadataSource {
  repo: LocalRepository,
}

impl RepositoryMetadataSource {
  pub fn new(repo: LocalRepository) -> Self {
    Self { repo }
  }

  fn manifest(&self, artifact: &ArtifactCoords) -> DecomposeResult<ArtifactManifest> {
    ArtifactManifest::read(&self.repo, artifact).map_err(|e| DecomposeError::resolution(artifact, e.to_string()))
  }
}

impl MetadataSource for RepositoryMetadataSource {
  fn fetch_scm_connection(&self, artifact: &ArtifactCoords) -> DecomposeResult<Option<String>> {
    Ok(self.manifest(artifact)?.scm.map(|scm| scm.connection))
  }

  fn fetch_scm_tag(&self, artifact: &ArtifactCoords) -> DecomposeResult<Option<String>> {
    Ok(self.manifest(artifact)?.scm.map(|scm| scm.tag))
  }
}
