//! Error types for bom-decomposer with contextual messages
//!
//! This module provides a unified error type that categorizes failures of the
//! resolution engine and the repository materializer. Most variants carry
//! enough context (artifact, path) to point a user at the offending input.

use crate::release::ArtifactCoords;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for bom-decomposer
#[derive(Debug)]
pub enum DecomposeError {
  /// The default heuristic could not determine an origin/version and no detector overrode it
  Resolution { artifact: String, reason: String },

  /// Builder or coordinate invariant violated
  Validation(ValidationError),

  /// Required collaborator or setting is absent
  Config(ConfigError),

  /// I/O failure while writing a manifest or content file
  Installation {
    artifact: ArtifactCoords,
    path: PathBuf,
    source: io::Error,
  },

  /// I/O errors outside of installation
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl DecomposeError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    DecomposeError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Resolution failure for a specific artifact
  pub fn resolution(artifact: &ArtifactCoords, reason: impl Into<String>) -> Self {
    DecomposeError::Resolution {
      artifact: artifact.to_string(),
      reason: reason.into(),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      DecomposeError::Message { message, context, help } => DecomposeError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      DecomposeError::Config(e) => e.help_message(),
      DecomposeError::Validation(e) => e.help_message(),
      DecomposeError::Resolution { .. } => Some(
        "Register a ReleaseIdDetector for this artifact or make its scm metadata available to the MetadataSource."
          .to_string(),
      ),
      DecomposeError::Installation { path, .. } => {
        Some(format!("Check that {} is writable. Files written so far are left in place.", path.display()))
      }
      DecomposeError::Message { help, .. } => help.clone(),
      DecomposeError::Io(_) => None,
    }
  }
}

impl fmt::Display for DecomposeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DecomposeError::Resolution { artifact, reason } => {
        write!(f, "Failed to resolve release id of {}: {}", artifact, reason)
      }
      DecomposeError::Validation(e) => write!(f, "{}", e),
      DecomposeError::Config(e) => write!(f, "{}", e),
      DecomposeError::Installation { artifact, path, source } => {
        write!(f, "Failed to persist {} at {}: {}", artifact, path.display(), source)
      }
      DecomposeError::Io(e) => write!(f, "I/O error: {}", e),
      DecomposeError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for DecomposeError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      DecomposeError::Io(e) => Some(e),
      DecomposeError::Installation { source, .. } => Some(source),
      _ => None,
    }
  }
}

impl From<io::Error> for DecomposeError {
  fn from(err: io::Error) -> Self {
    DecomposeError::Io(err)
  }
}

impl From<ValidationError> for DecomposeError {
  fn from(err: ValidationError) -> Self {
    DecomposeError::Validation(err)
  }
}

impl From<ConfigError> for DecomposeError {
  fn from(err: ConfigError) -> Self {
    DecomposeError::Config(err)
  }
}

impl From<String> for DecomposeError {
  fn from(msg: String) -> Self {
    DecomposeError::message(msg)
  }
}

impl From<&str> for DecomposeError {
  fn from(msg: &str) -> Self {
    DecomposeError::message(msg)
  }
}

impl From<toml_edit::TomlError> for DecomposeError {
  fn from(err: toml_edit::TomlError) -> Self {
    DecomposeError::message(format!("TOML parse error: {}", err))
  }
}

impl From<toml_edit::de::Error> for DecomposeError {
  fn from(err: toml_edit::de::Error) -> Self {
    DecomposeError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<toml_edit::ser::Error> for DecomposeError {
  fn from(err: toml_edit::ser::Error) -> Self {
    DecomposeError::message(format!("TOML serialization error: {}", err))
  }
}

impl From<serde_json::Error> for DecomposeError {
  fn from(err: serde_json::Error) -> Self {
    DecomposeError::message(format!("JSON error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// decomposer.toml not found
  NotFound { search_root: PathBuf },

  /// Missing required field
  MissingField { field: String },

  /// An operation needs a target repository but none was configured
  MissingRepository,
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => Some("Create a decomposer.toml or build a DecomposerConfig in code.".to_string()),
      ConfigError::MissingRepository => {
        Some("Pass a LocalRepository with `.repository(..)` before calling `install()`.".to_string())
      }
      ConfigError::MissingField { .. } => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { search_root } => {
        write!(
          f,
          "No bom-decomposer configuration found.\nExpected file: {}/decomposer.toml",
          search_root.display()
        )
      }
      ConfigError::MissingField { field } => {
        write!(f, "Missing required field in config: {}", field)
      }
      ConfigError::MissingRepository => write!(f, "Target repository has not been configured"),
    }
  }
}

/// Validation errors
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
  /// Dependency was attributed to a different release than the builder's
  ReleaseIdMismatch { expected: String, found: String },

  /// Builder was used before a release id was set
  MissingReleaseId,

  /// Coordinate string could not be parsed
  InvalidCoords { input: String, reason: String },
}

impl ValidationError {
  fn help_message(&self) -> Option<String> {
    match self {
      ValidationError::InvalidCoords { .. } => {
        Some("Coordinates use the form group:name:version[:classifier][:type]".to_string())
      }
      ValidationError::MissingReleaseId => Some("Set a tag or version before adding artifacts.".to_string()),
      ValidationError::ReleaseIdMismatch { .. } => None,
    }
  }
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ValidationError::ReleaseIdMismatch { expected, found } => {
        write!(f, "Dependency belongs to release {} but the builder is bound to {}", found, expected)
      }
      ValidationError::MissingReleaseId => write!(f, "Release id has not been initialized"),
      ValidationError::InvalidCoords { input, reason } => {
        write!(f, "Invalid artifact coordinates '{}': {}", input, reason)
      }
    }
  }
}

impl std::error::Error for ValidationError {}

impl std::error::Error for ConfigError {}

/// Result type alias for bom-decomposer
pub type DecomposeResult<T> = Result<T, DecomposeError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> DecomposeResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> DecomposeResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<DecomposeError>,
{
  fn context(self, ctx: impl Into<String>) -> DecomposeResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> DecomposeResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Convert anyhow::Error to DecomposeError (for embedders using anyhow-based sources)
impl From<anyhow::Error> for DecomposeError {
  fn from(err: anyhow::Error) -> Self {
    DecomposeError::message(err.to_string())
  }
}
