//! Per-artifact manifests written into the repository
//!
//! ```toml
//! [project]
//! group = "org.acme"
//! name = "acme-parent"
//! version = "1.0"
//! packaging = "aggregator"
//! modules = ["acme-core", "acme-web"]
//!
//! [parent]
//! group = "org.acme"
//! name = "acme-bom"
//! version = "1.0"
//!
//! [scm]
//! connection = "https://github.com/acme/acme"
//! tag = "v1.0"
//! ```

use super::repository::LocalRepository;
use crate::core::error::{DecomposeError, DecomposeResult};
use crate::release::{AGGREGATOR_TYPE, ArtifactCoords};
use serde::{Deserialize, Serialize};
use std::fs;

/// Packaging kind recorded in a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Packaging {
  /// Manifest plus content file
  #[default]
  Normal,
  /// Manifest only, lists modules
  Aggregator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSection {
  pub group: String,
  pub name: String,
  pub version: String,
  #[serde(default)]
  pub packaging: Packaging,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub modules: Vec<String>,
}

/// Reference from a module to its aggregator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
  pub group: String,
  pub name: String,
  pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmSection {
  pub connection: String,
  pub tag: String,
}

/// Descriptor of one `group:name:version` in the repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactManifest {
  pub project: ProjectSection,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub parent: Option<ParentRef>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub scm: Option<ScmSection>,
}

impl ArtifactManifest {
  pub fn new(group: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
    Self {
      project: ProjectSection {
        group: group.into(),
        name: name.into(),
        version: version.into(),
        packaging: Packaging::Normal,
        modules: Vec::new(),
      },
      parent: None,
      scm: None,
    }
  }

  /// Manifest describing `artifact`'s group/name/version
  pub fn for_artifact(artifact: &ArtifactCoords) -> Self {
    Self::new(&artifact.group, &artifact.name, &artifact.version)
  }

  /// Coordinates of the manifest as an aggregator (`pom`)
  pub fn coords(&self) -> ArtifactCoords {
    ArtifactCoords::new(
      &self.project.group,
      &self.project.name,
      None::<String>,
      AGGREGATOR_TYPE,
      &self.project.version,
    )
  }

  pub fn as_parent_ref(&self) -> ParentRef {
    ParentRef {
      group: self.project.group.clone(),
      name: self.project.name.clone(),
      version: self.project.version.clone(),
    }
  }

  pub fn set_packaging(&mut self, packaging: Packaging) {
    self.project.packaging = packaging;
  }

  pub fn set_parent(&mut self, parent: ParentRef) {
    self.parent = Some(parent);
  }

  pub fn set_scm(&mut self, connection: impl Into<String>, tag: impl Into<String>) {
    self.scm = Some(ScmSection {
      connection: connection.into(),
      tag: tag.into(),
    });
  }

  /// Register a module name (duplicates are ignored)
  pub fn add_module(&mut self, name: &str) {
    if !self.project.modules.iter().any(|m| m == name) {
      self.project.modules.push(name.to_string());
    }
  }

  pub fn modules(&self) -> &[String] {
    &self.project.modules
  }

  pub fn is_aggregator(&self) -> bool {
    self.project.packaging == Packaging::Aggregator
  }

  pub fn to_toml(&self) -> DecomposeResult<String> {
    Ok(toml_edit::ser::to_string_pretty(self)?)
  }

  pub fn from_toml(content: &str) -> DecomposeResult<Self> {
    Ok(toml_edit::de::from_str(content)?)
  }

  /// Write the manifest to its place in `repo` on behalf of `owner`.
  ///
  /// `owner` is the artifact reported if the write fails; its
  /// group/name/version select the manifest path.
  pub fn write_to(&self, repo: &LocalRepository, owner: &ArtifactCoords) -> DecomposeResult<()> {
    let content = self.to_toml()?;
    repo.write(owner, &repo.manifest_path(owner), content.as_bytes())
  }

  /// Read the manifest stored for `artifact`'s group/name/version
  pub fn read(repo: &LocalRepository, artifact: &ArtifactCoords) -> DecomposeResult<Self> {
    let path = repo.manifest_path(artifact);
    let content = fs::read_to_string(&path).map_err(|e| {
      DecomposeError::message(format!("Failed to read manifest {}: {}", path.display(), e))
    })?;
    Self::from_toml(&content)
      .map_err(|e| DecomposeError::message(format!("Invalid manifest {}: {}", path.display(), e)))
  }
}
