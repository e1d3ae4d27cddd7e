//! Artifact coordinates
//!
//! Textual form: `group:name:version[:classifier][:type]`
//!
//! - `g:a:v`       → type `jar`, no classifier
//! - `g:a:v:t`     → explicit type
//! - `g:a:v:c:t`   → classifier and type

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type assumed when a coordinate does not spell one out
pub const DEFAULT_TYPE: &str = "jar";

/// Type of manifest-only artifacts (aggregators / parents)
pub const AGGREGATOR_TYPE: &str = "pom";

/// Structured identity of a package artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtifactCoords {
  pub group: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub classifier: Option<String>,
  #[serde(rename = "type")]
  pub kind: String,
  pub version: String,
}

impl ArtifactCoords {
  /// Coordinates of a plain `jar` artifact
  pub fn jar(group: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
    Self::new(group, name, None::<String>, DEFAULT_TYPE, version)
  }

  pub fn new(
    group: impl Into<String>,
    name: impl Into<String>,
    classifier: Option<impl Into<String>>,
    kind: impl Into<String>,
    version: impl Into<String>,
  ) -> Self {
    Self {
      group: group.into(),
      name: name.into(),
      classifier: classifier.map(Into::into).filter(|c: &String| !c.is_empty()),
      kind: kind.into(),
      version: version.into(),
    }
  }

  /// File extension used for the artifact's content
  pub fn extension(&self) -> &str {
    &self.kind
  }

  /// Whether this artifact is manifest-only (an aggregator/parent)
  pub fn is_aggregator(&self) -> bool {
    self.kind == AGGREGATOR_TYPE
  }

  /// Check that every segment can be used as a single path component.
  ///
  /// Separators are rejected everywhere, and `.`/`..` are rejected as whole
  /// segments, so repository paths always stay below the repository root.
  pub fn validate(&self) -> Result<(), ValidationError> {
    let segments = [
      Some(self.group.as_str()),
      Some(self.name.as_str()),
      Some(self.version.as_str()),
      self.classifier.as_deref(),
      Some(self.kind.as_str()),
    ];

    for segment in segments.into_iter().flatten() {
      let reason = if segment.trim().is_empty() {
        "empty segment"
      } else if segment.contains(['/', '\\']) {
        "path separator in segment"
      } else if segment == "." || segment == ".." {
        "relative path segment"
      } else {
        continue;
      };
      return Err(ValidationError::InvalidCoords {
        input: self.to_string(),
        reason: reason.to_string(),
      });
    }
    Ok(())
  }
}

impl fmt::Display for ArtifactCoords {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}:{}", self.group, self.name, self.version)?;
    if let Some(classifier) = &self.classifier {
      write!(f, ":{}", classifier)?;
    }
    write!(f, ":{}", self.kind)
  }
}

impl FromStr for ArtifactCoords {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let invalid = |reason: &str| ValidationError::InvalidCoords {
      input: s.to_string(),
      reason: reason.to_string(),
    };

    let parts: Vec<&str> = s.trim().split(':').collect();
    if parts.iter().any(|p| p.trim().is_empty()) {
      return Err(invalid("empty segment"));
    }

    let coords = match parts.as_slice() {
      [group, name, version] => Self::jar(*group, *name, *version),
      [group, name, version, kind] => Self::new(*group, *name, None::<String>, *kind, *version),
      [group, name, version, classifier, kind] => Self::new(*group, *name, Some(*classifier), *kind, *version),
      _ => return Err(invalid("expected 3 to 5 ':'-separated segments")),
    };

    coords.validate().map_err(|e| match e {
      ValidationError::InvalidCoords { reason, .. } => invalid(&reason),
      other => other,
    })?;
    Ok(coords)
  }
}
