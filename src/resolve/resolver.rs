//! Release-id resolution: detector chain first, default heuristic otherwise

use super::heuristic::DefaultHeuristic;
use super::metadata::MetadataSource;
use crate::core::config::DecomposerConfig;
use crate::core::error::DecomposeResult;
use crate::detectors::{DetectorChain, RelocationDetector, default_chain};
use crate::release::{ArtifactCoords, ReleaseId};
use std::sync::Arc;
use tracing::debug;

/// Resolves the release an artifact was built from
///
/// Stateless after construction and safe to share across threads. The chain
/// order is fixed for the resolver's lifetime.
#[derive(Clone)]
pub struct ReleaseIdResolver {
  heuristic: DefaultHeuristic,
  chain: DetectorChain,
}

impl ReleaseIdResolver {
  /// Resolver with the built-in detectors
  pub fn new(source: Arc<dyn MetadataSource>) -> Self {
    Self::with_detectors(source, default_chain())
  }

  /// Resolver with a caller-supplied chain
  pub fn with_detectors(source: Arc<dyn MetadataSource>, chain: DetectorChain) -> Self {
    Self {
      heuristic: DefaultHeuristic::new(source),
      chain,
    }
  }

  /// Built-in detectors followed by the configured relocations
  pub fn from_config(source: Arc<dyn MetadataSource>, config: &DecomposerConfig) -> Self {
    let mut chain = default_chain();
    for rule in &config.relocations {
      chain.add_detector(Arc::new(RelocationDetector::new(rule.clone())));
    }
    Self::with_detectors(source, chain)
  }

  pub fn detectors(&self) -> &DetectorChain {
    &self.chain
  }

  pub fn heuristic(&self) -> &DefaultHeuristic {
    &self.heuristic
  }

  /// Release id for `artifact`: the first detector override, else the default
  pub fn resolve(&self, artifact: &ArtifactCoords) -> DecomposeResult<ReleaseId> {
    for detector in self.chain.detectors() {
      if let Some(id) = detector.detect(&self.heuristic, artifact)? {
        debug!(artifact = %artifact, detector = detector.name(), release = %id, "release id from detector");
        return Ok(id);
      }
    }
    self.default_release_id(artifact)
  }

  /// The undecorated heuristic, bypassing all detectors
  pub fn default_release_id(&self, artifact: &ArtifactCoords) -> DecomposeResult<ReleaseId> {
    self.heuristic.default_release_id(artifact)
  }
}
