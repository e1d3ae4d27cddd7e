//! Detector trait for release-id overrides
//!
//! A detector encodes one narrow correction for artifacts whose published
//! metadata points at the wrong place (usually a shared umbrella host instead of
//! the project that actually cuts the release). Detectors compose by simple
//! list-append, so each one must stay silent (`Ok(None)`) for everything outside
//! its own predicate.

use crate::core::error::DecomposeResult;
use crate::release::{ArtifactCoords, ReleaseId};
use crate::resolve::DefaultHeuristic;

/// Release-id override
///
/// # Example
///
/// ```rust,ignore
/// use bom_decomposer::detectors::ReleaseIdDetector;
///
/// struct AcmeDetector;
///
/// impl ReleaseIdDetector for AcmeDetector {
///   fn name(&self) -> &str {
///     "acme"
///   }
///
///   fn detect(&self, heuristic: &DefaultHeuristic, artifact: &ArtifactCoords) -> DecomposeResult<Option<ReleaseId>> {
///     if artifact.group != "org.acme" {
///       return Ok(None);
///     }
///     let default_id = heuristic.default_release_id(artifact)?;
///     Ok(Some(default_id))
///   }
/// }
/// ```
pub trait ReleaseIdDetector: Send + Sync {
  /// Unique name for this detector (kebab-case)
  fn name(&self) -> &str;

  /// Return the release id for `artifact`, or `None` if this detector does not apply.
  ///
  /// `heuristic` exposes only the default release id, never the full chain.
  fn detect(&self, heuristic: &DefaultHeuristic, artifact: &ArtifactCoords) -> DecomposeResult<Option<ReleaseId>>;
}
