//! Configuration-driven release relocation
//!
//! Same shape of correction as the built-in detectors, read from
//! `[[relocations]]` entries in decomposer.toml.

use super::trait_def::ReleaseIdDetector;
use crate::core::config::RelocationConfig;
use crate::core::error::DecomposeResult;
use crate::release::{ArtifactCoords, ReleaseId};
use crate::resolve::DefaultHeuristic;

/// Redirects artifacts of one group whose default origin contains a marker
#[derive(Debug, Clone)]
pub struct RelocationDetector {
  name: String,
  rule: RelocationConfig,
}

impl RelocationDetector {
  /// Detector named `relocation:<group>`
  pub fn new(rule: RelocationConfig) -> Self {
    Self::named(format!("relocation:{}", rule.group), rule)
  }

  pub fn named(name: impl Into<String>, rule: RelocationConfig) -> Self {
    Self {
      name: name.into(),
      rule,
    }
  }

  pub fn rule(&self) -> &RelocationConfig {
    &self.rule
  }
}

impl ReleaseIdDetector for RelocationDetector {
  fn name(&self) -> &str {
    &self.name
  }

  fn detect(&self, heuristic: &DefaultHeuristic, artifact: &ArtifactCoords) -> DecomposeResult<Option<ReleaseId>> {
    if artifact.group != self.rule.group {
      return Ok(None);
    }

    let default_id = heuristic.default_release_id(artifact)?;
    if !default_id.origin_contains(&self.rule.marker) {
      return Ok(Some(default_id));
    }

    Ok(Some(ReleaseId::for_scm_and_tag(
      self.rule.scm.clone(),
      format!("{}{}", artifact.version, self.rule.tag_suffix),
    )))
  }
}
