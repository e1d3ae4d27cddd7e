//! Materialize a project release into a repository
//!
//! Used to build reproducible fixtures: a release is described in memory, then
//! written as manifests plus placeholder content so resolution can be re-run
//! against it.
//!
//! ```rust,ignore
//! let release = ReleaseInstaller::for_parent("org.acme:acme-parent:1.0")?
//!   .artifact_name("acme-core")?
//!   .artifact_name("acme-web")?
//!   .repository(LocalRepository::new(dir))
//!   .install()?;
//! ```

use super::manifest::{ArtifactManifest, Packaging};
use super::repository::LocalRepository;
use crate::core::error::{ConfigError, DecomposeError, DecomposeResult, ValidationError};
use crate::release::{
  ArtifactCoords, DEFAULT_TYPE, ProjectRelease, ProjectReleaseBuilder, ReleaseId, ReleaseOrigin, ReleaseVersion,
};
use crate::utils::{sha256_hex, with_added_extension};
use tracing::info;

/// Builder-style installer for one release and its optional aggregator parent
#[derive(Debug, Clone)]
pub struct ReleaseInstaller {
  origin: ReleaseOrigin,
  project_group: Option<String>,
  project_version: Option<String>,
  parent: Option<ArtifactManifest>,
  builder: Option<ProjectReleaseBuilder>,
  repository: Option<LocalRepository>,
}

impl ReleaseInstaller {
  fn with_origin(origin: ReleaseOrigin) -> Self {
    Self {
      origin,
      project_group: None,
      project_version: None,
      parent: None,
      builder: None,
      repository: None,
    }
  }

  /// Release recorded under a plain coordinate namespace
  pub fn for_ga(group: &str, name: &str) -> Self {
    Self::with_origin(ReleaseOrigin::ga(group, name)).project_group(group)
  }

  /// Release recorded in source control
  pub fn for_scm(url: &str) -> Self {
    Self::with_origin(ReleaseOrigin::scm(url))
  }

  pub fn for_scm_and_tag(url: &str, tag: &str) -> Self {
    Self::for_scm(url).tag(tag)
  }

  /// Release whose artifacts are modules of the aggregator `coords`
  pub fn for_parent(coords: &str) -> DecomposeResult<Self> {
    let coords: ArtifactCoords = coords.parse()?;
    Self::for_ga(&coords.group, &coords.name)
      .version(&coords.version)
      .parent_name(&coords.name)
  }

  /// Bind the release to a tag. Either a tag or a version has to be set.
  pub fn tag(mut self, tag: &str) -> Self {
    self.builder = Some(ProjectRelease::builder(ReleaseId::new(
      self.origin.clone(),
      ReleaseVersion::tag(tag),
    )));
    self.project_version = Some(tag.to_string());
    self
  }

  /// Bind the release to a plain version. Either a tag or a version has to be set.
  pub fn version(mut self, version: &str) -> Self {
    self.builder = Some(ProjectRelease::builder(ReleaseId::new(
      self.origin.clone(),
      ReleaseVersion::plain(version),
    )));
    self.project_version = Some(version.to_string());
    self
  }

  pub fn project_group(mut self, group: &str) -> Self {
    self.project_group = Some(group.to_string());
    self
  }

  /// Install an aggregator `<project group>:<name>:<project version>` as parent
  pub fn parent_name(mut self, name: &str) -> DecomposeResult<Self> {
    let group = self.require_project_group()?.to_string();
    let version = self
      .project_version
      .clone()
      .ok_or(ValidationError::MissingReleaseId)?;

    let mut parent = ArtifactManifest::new(group, name, version);
    parent.set_packaging(Packaging::Aggregator);
    self.parent = Some(parent);
    Ok(self)
  }

  /// Add an artifact by its textual coordinates
  pub fn artifact(self, coords: &str) -> DecomposeResult<Self> {
    let coords: ArtifactCoords = coords.parse()?;
    self.artifact_coords(coords)
  }

  /// Add a `jar` under the project group and version
  pub fn artifact_name(self, name: &str) -> DecomposeResult<Self> {
    let group = self.require_project_group()?.to_string();
    let version = self
      .project_version
      .clone()
      .ok_or(ValidationError::MissingReleaseId)?;
    self.artifact_coords(ArtifactCoords::new(group, name, None::<String>, DEFAULT_TYPE, version))
  }

  pub fn artifact_coords(mut self, coords: ArtifactCoords) -> DecomposeResult<Self> {
    let builder = self.builder.as_mut().ok_or(ValidationError::MissingReleaseId)?;
    let name = coords.name.clone();
    builder.add_artifact(coords)?;
    if let Some(parent) = self.parent.as_mut() {
      parent.add_module(&name);
    }
    Ok(self)
  }

  pub fn repository(mut self, repository: LocalRepository) -> Self {
    self.repository = Some(repository);
    self
  }

  /// Write the parent (if any), every dependency's content and manifest.
  ///
  /// Stops at the first failure; files written before it stay in place.
  pub fn install(self) -> DecomposeResult<ProjectRelease> {
    let repo = self
      .repository
      .as_ref()
      .ok_or(DecomposeError::Config(ConfigError::MissingRepository))?;
    let release = self.builder.clone().ok_or(ValidationError::MissingReleaseId)?.build()?;

    if let Some(parent) = &self.parent {
      parent.write_to(repo, &parent.coords())?;
    }

    for dependency in release.dependencies() {
      let artifact = dependency.artifact();
      let mut manifest = ArtifactManifest::for_artifact(artifact);

      if let Some(parent) = &self.parent {
        manifest.set_parent(parent.as_parent_ref());
      }
      if let ReleaseOrigin::ScmConnection { url } = release.id().origin() {
        manifest.set_scm(url, release.id().version().as_str());
      }

      if artifact.is_aggregator() {
        manifest.set_packaging(Packaging::Aggregator);
      } else {
        install_content(repo, artifact)?;
      }

      manifest.write_to(repo, artifact)?;
    }

    info!(
      release = %release.id(),
      artifacts = release.len(),
      root = %repo.root().display(),
      "installed release"
    );
    Ok(release)
  }

  fn require_project_group(&self) -> DecomposeResult<&str> {
    self.project_group.as_deref().ok_or_else(|| {
      DecomposeError::Config(ConfigError::MissingField {
        field: "project group".to_string(),
      })
    })
  }
}

/// Placeholder content (the coordinate string) plus its `.sha256` sidecar
fn install_content(repo: &LocalRepository, artifact: &ArtifactCoords) -> DecomposeResult<()> {
  let path = repo.artifact_path(artifact);
  let payload = artifact.to_string();
  repo.write(artifact, &path, payload.as_bytes())?;

  let checksum = sha256_hex(payload.as_bytes());
  repo.write(artifact, &with_added_extension(&path, "sha256"), checksum.as_bytes())
}
