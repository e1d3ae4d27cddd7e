//! Decomposition: group a flat artifact list by the release each artifact came from

use super::resolver::ReleaseIdResolver;
use crate::core::error::DecomposeResult;
use crate::release::{ArtifactCoords, ProjectRelease, ProjectReleaseBuilder, ReleaseId};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Releases attributed from an artifact list, in first-appearance order
#[derive(Debug, Clone, Serialize)]
pub struct Decomposition {
  releases: Vec<ProjectRelease>,
}

impl Decomposition {
  pub fn releases(&self) -> &[ProjectRelease] {
    &self.releases
  }

  pub fn into_releases(self) -> Vec<ProjectRelease> {
    self.releases
  }

  /// Release the artifact was attributed to
  pub fn release_for(&self, artifact: &ArtifactCoords) -> Option<&ProjectRelease> {
    self.releases.iter().find(|r| r.contains(artifact))
  }

  pub fn release(&self, id: &ReleaseId) -> Option<&ProjectRelease> {
    self.releases.iter().find(|r| r.id() == id)
  }

  pub fn to_json_pretty(&self) -> DecomposeResult<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }
}

/// Resolve every artifact and group them by release id.
///
/// With `parallel`, resolution runs on the rayon pool; grouping order still
/// follows the input order. The error of the earliest failing artifact in
/// input order is returned, whether or not resolution ran in parallel.
pub fn decompose(
  resolver: &ReleaseIdResolver,
  artifacts: &[ArtifactCoords],
  parallel: bool,
) -> DecomposeResult<Decomposition> {
  let ids: Vec<ReleaseId> = if parallel {
    let results: Vec<DecomposeResult<ReleaseId>> = artifacts.par_iter().map(|a| resolver.resolve(a)).collect();
    results.into_iter().collect::<DecomposeResult<_>>()?
  } else {
    artifacts
      .iter()
      .map(|a| resolver.resolve(a))
      .collect::<DecomposeResult<_>>()?
  };

  let mut index: HashMap<ReleaseId, usize> = HashMap::new();
  let mut builders: Vec<ProjectReleaseBuilder> = Vec::new();

  for (artifact, id) in artifacts.iter().zip(ids) {
    let slot = match index.get(&id) {
      Some(slot) => *slot,
      None => {
        index.insert(id.clone(), builders.len());
        builders.push(ProjectRelease::builder(id));
        builders.len() - 1
      }
    };
    builders[slot].add_artifact(artifact.clone())?;
  }

  let releases = builders
    .into_iter()
    .map(ProjectReleaseBuilder::build)
    .collect::<DecomposeResult<Vec<_>>>()?;

  debug!(
    artifacts = artifacts.len(),
    releases = releases.len(),
    "decomposed artifact list"
  );
  Ok(Decomposition { releases })
}
