//! Jakarta WebSocket API release correction
//!
//! Older `jakarta.websocket` artifacts publish scm metadata pointing at the
//! `eclipse-ee4j` organization, while releases are actually cut from
//! `jakartaee/websocket` with a `-RELEASE` tag suffix.

use super::relocation::RelocationDetector;
use super::trait_def::ReleaseIdDetector;
use crate::core::config::RelocationConfig;
use crate::core::error::DecomposeResult;
use crate::release::{ArtifactCoords, ReleaseId};
use crate::resolve::DefaultHeuristic;

const GROUP: &str = "jakarta.websocket";
const WRONG_HOST_MARKER: &str = "eclipse-ee4j";
const UPSTREAM_SCM: &str = "https://github.com/jakartaee/websocket";
const TAG_SUFFIX: &str = "-RELEASE";

/// Redirects mis-attributed `jakarta.websocket` artifacts to the upstream repository
#[derive(Debug, Clone)]
pub struct JakartaWebsocketDetector {
  relocation: RelocationDetector,
}

impl JakartaWebsocketDetector {
  pub fn new() -> Self {
    let rule = RelocationConfig {
      group: GROUP.to_string(),
      marker: WRONG_HOST_MARKER.to_string(),
      scm: UPSTREAM_SCM.to_string(),
      tag_suffix: TAG_SUFFIX.to_string(),
    };
    Self {
      relocation: RelocationDetector::named("jakarta-websocket", rule),
    }
  }
}

impl Default for JakartaWebsocketDetector {
  fn default() -> Self {
    Self::new()
  }
}

impl ReleaseIdDetector for JakartaWebsocketDetector {
  fn name(&self) -> &str {
    self.relocation.name()
  }

  fn detect(&self, heuristic: &DefaultHeuristic, artifact: &ArtifactCoords) -> DecomposeResult<Option<ReleaseId>> {
    self.relocation.detect(heuristic, artifact)
  }
}
