//! Default release-id heuristic
//!
//! Derives a release id from the artifact's own published metadata:
//!
//! - scm connection present → `ScmConnection(url)`, versioned by the published
//!   scm tag when there is one, otherwise by the artifact version
//! - no scm connection → `GroupArtifact(group, name)` + plain artifact version
//!
//! Detectors receive a `&DefaultHeuristic` rather than the resolver, so an
//! override can inspect the baseline but can never re-enter the detector chain.

use super::metadata::MetadataSource;
use crate::core::error::{DecomposeError, DecomposeResult};
use crate::release::{ArtifactCoords, ReleaseId, ReleaseOrigin, ReleaseVersion};
use std::sync::Arc;
use tracing::trace;

/// Undecorated release-id heuristic backed by a `MetadataSource`
#[derive(Clone)]
pub struct DefaultHeuristic {
  source: Arc<dyn MetadataSource>,
}

impl DefaultHeuristic {
  pub fn new(source: Arc<dyn MetadataSource>) -> Self {
    Self { source }
  }

  /// Release id implied by the artifact's published metadata alone
  pub fn default_release_id(&self, artifact: &ArtifactCoords) -> DecomposeResult<ReleaseId> {
    let connection = self
      .source
      .fetch_scm_connection(artifact)
      .map_err(|e| lookup_failure(artifact, "scm connection", e))?;

    let Some(connection) = connection else {
      trace!(artifact = %artifact, "no scm connection, falling back to group/artifact origin");
      return Ok(ReleaseId::new(
        ReleaseOrigin::ga(&artifact.group, &artifact.name),
        ReleaseVersion::plain(&artifact.version),
      ));
    };

    let url = connection.trim();
    if url.is_empty() {
      return Err(DecomposeError::resolution(artifact, "published scm connection is empty"));
    }

    let tag = self
      .source
      .fetch_scm_tag(artifact)
      .map_err(|e| lookup_failure(artifact, "scm tag", e))?;

    let version = match tag.as_deref().map(str::trim) {
      Some(tag) if !tag.is_empty() => ReleaseVersion::tag(tag),
      _ => ReleaseVersion::plain(&artifact.version),
    };

    trace!(artifact = %artifact, origin = url, version = %version, "derived release id from scm metadata");
    Ok(ReleaseId::new(ReleaseOrigin::scm(url), version))
  }
}

fn lookup_failure(artifact: &ArtifactCoords, what: &str, err: DecomposeError) -> DecomposeError {
  match err {
    DecomposeError::Resolution { .. } => err,
    other => DecomposeError::resolution(artifact, format!("failed to fetch {}: {}", what, other)),
  }
}
