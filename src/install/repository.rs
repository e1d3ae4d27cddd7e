//! Repository layout and scoped file writes
//!
//! Layout: `<root>/<group as dirs>/<name>/<version>/<name>-<version>[-<classifier>].<type>`
//! Manifests live next to the content as `<name>-<version>.manifest.toml`.

use crate::core::error::{DecomposeError, DecomposeResult};
use crate::release::ArtifactCoords;
use crate::utils::group_to_path;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fixed extension of manifest files
pub const MANIFEST_EXTENSION: &str = "manifest.toml";

/// Target repository rooted at a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRepository {
  root: PathBuf,
}

impl LocalRepository {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Directory holding every file of `group:name:version`
  pub fn version_dir(&self, artifact: &ArtifactCoords) -> PathBuf {
    self
      .root
      .join(group_to_path(&artifact.group))
      .join(&artifact.name)
      .join(&artifact.version)
  }

  /// Path of the artifact's content file
  pub fn artifact_path(&self, artifact: &ArtifactCoords) -> PathBuf {
    let file_name = match &artifact.classifier {
      Some(classifier) => format!(
        "{}-{}-{}.{}",
        artifact.name,
        artifact.version,
        classifier,
        artifact.extension()
      ),
      None => format!("{}-{}.{}", artifact.name, artifact.version, artifact.extension()),
    };
    self.version_dir(artifact).join(file_name)
  }

  /// Path of the manifest shared by every classifier/type of `group:name:version`
  pub fn manifest_path(&self, artifact: &ArtifactCoords) -> PathBuf {
    self
      .version_dir(artifact)
      .join(format!("{}-{}.{}", artifact.name, artifact.version, MANIFEST_EXTENSION))
  }

  /// Write `bytes` to `path`, creating missing directories.
  ///
  /// Coordinates whose segments are not plain path components are refused
  /// before touching the disk. The writer is flushed and closed on every exit
  /// path. Failures are reported as `Installation` errors for `artifact`;
  /// nothing already written is removed.
  pub fn write(&self, artifact: &ArtifactCoords, path: &Path, bytes: &[u8]) -> DecomposeResult<()> {
    artifact.validate()?;

    let installation_error = |source| DecomposeError::Installation {
      artifact: artifact.clone(),
      path: path.to_path_buf(),
      source,
    };

    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).map_err(installation_error)?;
    }

    let mut writer = BufWriter::new(File::create(path).map_err(installation_error)?);
    writer.write_all(bytes).map_err(installation_error)?;
    writer.flush().map_err(installation_error)?;

    debug!(artifact = %artifact, path = %path.display(), bytes = bytes.len(), "wrote repository file");
    Ok(())
  }
}
