//! Release identity: where a release is recorded and how it is named there
//!
//! All three types are plain values. Equality and hashing are structural, so ids
//! produced by separate resolution runs compare equal when they describe the
//! same release.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provenance namespace of a release
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ReleaseOrigin {
  /// Plain coordinate namespace (no source-control information available)
  GroupArtifact { group: String, name: String },
  /// Version-control connection string
  ScmConnection { url: String },
}

impl ReleaseOrigin {
  pub fn ga(group: impl Into<String>, name: impl Into<String>) -> Self {
    ReleaseOrigin::GroupArtifact {
      group: group.into(),
      name: name.into(),
    }
  }

  pub fn scm(url: impl Into<String>) -> Self {
    ReleaseOrigin::ScmConnection { url: url.into() }
  }

  pub fn is_scm(&self) -> bool {
    matches!(self, ReleaseOrigin::ScmConnection { .. })
  }
}

impl fmt::Display for ReleaseOrigin {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseOrigin::GroupArtifact { group, name } => write!(f, "{}:{}", group, name),
      ReleaseOrigin::ScmConnection { url } => write!(f, "{}", url),
    }
  }
}

/// How a release is named at its origin. A tag is the more specific form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ReleaseVersion {
  Tag(String),
  Plain(String),
}

impl ReleaseVersion {
  pub fn tag(tag: impl Into<String>) -> Self {
    ReleaseVersion::Tag(tag.into())
  }

  pub fn plain(version: impl Into<String>) -> Self {
    ReleaseVersion::Plain(version.into())
  }

  pub fn is_tag(&self) -> bool {
    matches!(self, ReleaseVersion::Tag(_))
  }

  pub fn as_str(&self) -> &str {
    match self {
      ReleaseVersion::Tag(v) | ReleaseVersion::Plain(v) => v,
    }
  }
}

impl fmt::Display for ReleaseVersion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Canonical grouping key: `origin@version`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReleaseId {
  origin: ReleaseOrigin,
  version: ReleaseVersion,
}

impl ReleaseId {
  pub fn new(origin: ReleaseOrigin, version: ReleaseVersion) -> Self {
    Self { origin, version }
  }

  /// Release recorded under a plain coordinate namespace with a plain version
  pub fn for_ga(group: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
    Self::new(ReleaseOrigin::ga(group, name), ReleaseVersion::plain(version))
  }

  /// Release recorded in source control under a tag
  pub fn for_scm_and_tag(url: impl Into<String>, tag: impl Into<String>) -> Self {
    Self::new(ReleaseOrigin::scm(url), ReleaseVersion::tag(tag))
  }

  pub fn origin(&self) -> &ReleaseOrigin {
    &self.origin
  }

  pub fn version(&self) -> &ReleaseVersion {
    &self.version
  }

  /// Whether the rendered origin contains `marker`
  pub fn origin_contains(&self, marker: &str) -> bool {
    self.origin.to_string().contains(marker)
  }
}

impl fmt::Display for ReleaseId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}@{}", self.origin, self.version)
  }
}
