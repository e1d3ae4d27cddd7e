//! Project releases: a release id and the artifacts attributed to it
//!
//! A `ProjectRelease` is assembled through `ProjectReleaseBuilder` and is
//! immutable once built. Decomposition and fixture construction both go through
//! the builder, so they share the same invariant checks.

use super::coords::ArtifactCoords;
use super::id::ReleaseId;
use crate::core::error::{DecomposeResult, ValidationError};
use serde::Serialize;
use std::collections::HashSet;

/// Membership fact: this concrete artifact belongs to this release
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectDependency {
  release_id: ReleaseId,
  artifact: ArtifactCoords,
}

impl ProjectDependency {
  pub fn new(release_id: ReleaseId, artifact: ArtifactCoords) -> Self {
    Self { release_id, artifact }
  }

  pub fn release_id(&self) -> &ReleaseId {
    &self.release_id
  }

  pub fn artifact(&self) -> &ArtifactCoords {
    &self.artifact
  }
}

/// Frozen release with its insertion-ordered, coordinate-unique dependencies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRelease {
  id: ReleaseId,
  dependencies: Vec<ProjectDependency>,
}

impl ProjectRelease {
  pub fn builder(id: ReleaseId) -> ProjectReleaseBuilder {
    ProjectReleaseBuilder {
      id: Some(id),
      ..Default::default()
    }
  }

  pub fn id(&self) -> &ReleaseId {
    &self.id
  }

  pub fn dependencies(&self) -> &[ProjectDependency] {
    &self.dependencies
  }

  /// Coordinates of every dependency, in insertion order
  pub fn artifacts(&self) -> impl Iterator<Item = &ArtifactCoords> {
    self.dependencies.iter().map(ProjectDependency::artifact)
  }

  pub fn contains(&self, artifact: &ArtifactCoords) -> bool {
    self.artifacts().any(|a| a == artifact)
  }

  pub fn len(&self) -> usize {
    self.dependencies.len()
  }

  pub fn is_empty(&self) -> bool {
    self.dependencies.is_empty()
  }
}

/// Accumulator for a `ProjectRelease`
#[derive(Debug, Default, Clone)]
pub struct ProjectReleaseBuilder {
  id: Option<ReleaseId>,
  dependencies: Vec<ProjectDependency>,
  seen: HashSet<ArtifactCoords>,
}

impl ProjectReleaseBuilder {
  pub fn id(&self) -> Option<&ReleaseId> {
    self.id.as_ref()
  }

  /// Bind the builder to a release id.
  ///
  /// Fails if dependencies were already accumulated under a different id.
  pub fn set_release_id(&mut self, id: ReleaseId) -> DecomposeResult<()> {
    if let Some(first) = self.dependencies.first()
      && first.release_id() != &id
    {
      return Err(
        ValidationError::ReleaseIdMismatch {
          expected: id.to_string(),
          found: first.release_id().to_string(),
        }
        .into(),
      );
    }
    self.id = Some(id);
    Ok(())
  }

  /// Append a dependency. Re-adding a known coordinate is a no-op.
  pub fn add(&mut self, dependency: ProjectDependency) -> DecomposeResult<&mut Self> {
    let id = self.id.as_ref().ok_or(ValidationError::MissingReleaseId)?;
    if dependency.release_id() != id {
      return Err(
        ValidationError::ReleaseIdMismatch {
          expected: id.to_string(),
          found: dependency.release_id().to_string(),
        }
        .into(),
      );
    }

    if self.seen.insert(dependency.artifact().clone()) {
      self.dependencies.push(dependency);
    }
    Ok(self)
  }

  /// Append an artifact attributed to the builder's own release id
  pub fn add_artifact(&mut self, artifact: ArtifactCoords) -> DecomposeResult<&mut Self> {
    let id = self.id.clone().ok_or(ValidationError::MissingReleaseId)?;
    self.add(ProjectDependency::new(id, artifact))
  }

  pub fn len(&self) -> usize {
    self.dependencies.len()
  }

  pub fn is_empty(&self) -> bool {
    self.dependencies.is_empty()
  }

  pub fn build(self) -> DecomposeResult<ProjectRelease> {
    let id = self.id.ok_or(ValidationError::MissingReleaseId)?;
    Ok(ProjectRelease {
      id,
      dependencies: self.dependencies,
    })
  }
}
