use crate::core::error::{ConfigError, DecomposeError, DecomposeResult, ResultExt};
use crate::install::LocalRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for bom-decomposer
/// Searched in order: decomposer.toml, .decomposer.toml, .config/decomposer.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecomposerConfig {
  #[serde(default)]
  pub repository: RepositoryConfig,
  #[serde(default)]
  pub resolution: ResolutionConfig,
  #[serde(default)]
  pub relocations: Vec<RelocationConfig>,
}

/// Target repository for materialized fixtures
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryConfig {
  /// Repository root directory (relative paths resolve against the config directory)
  #[serde(default)]
  pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionConfig {
  /// Resolve artifacts on the rayon pool during decomposition (default: true)
  #[serde(default = "default_parallel")]
  pub parallel: bool,
}

fn default_parallel() -> bool {
  true
}

impl Default for ResolutionConfig {
  fn default() -> Self {
    Self {
      parallel: default_parallel(),
    }
  }
}

/// Release relocation rule
///
/// # Example
///
/// ```toml
/// [[relocations]]
/// group = "jakarta.websocket"
/// marker = "eclipse-ee4j"
/// scm = "https://github.com/jakartaee/websocket"
/// tag_suffix = "-RELEASE"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelocationConfig {
  /// Group whose artifacts this rule applies to
  pub group: String,

  /// Substring of the default origin that marks it as mis-attributed
  pub marker: String,

  /// Scm connection of the real upstream repository
  pub scm: String,

  /// Appended to the artifact version to form the release tag
  #[serde(default)]
  pub tag_suffix: String,
}

impl RelocationConfig {
  /// Validate the relocation rule
  pub fn validate(&self) -> DecomposeResult<()> {
    for (field, value) in [("group", &self.group), ("marker", &self.marker), ("scm", &self.scm)] {
      if value.trim().is_empty() {
        return Err(DecomposeError::Config(ConfigError::MissingField {
          field: format!("{} for relocation of '{}'", field, self.group),
        }));
      }
    }
    Ok(())
  }
}

impl DecomposerConfig {
  /// Find config file in search order: decomposer.toml, .decomposer.toml, .config/decomposer.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = vec![
      path.join("decomposer.toml"),
      path.join(".decomposer.toml"),
      path.join(".config").join("decomposer.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config from decomposer.toml (searches multiple locations)
  pub fn load(path: &Path) -> DecomposeResult<Self> {
    let config_path = Self::find_config_path(path).ok_or_else(|| {
      DecomposeError::Config(ConfigError::NotFound {
        search_root: path.to_path_buf(),
      })
    })?;

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let mut config = Self::from_toml_str(&content)
      .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(root) = &config.repository.root
      && root.is_relative()
    {
      config.repository.root = Some(path.join(root));
    }

    Ok(config)
  }

  /// Parse and validate config from TOML text
  pub fn from_toml_str(content: &str) -> DecomposeResult<Self> {
    let config: DecomposerConfig = toml_edit::de::from_str(content).context("Failed to parse config")?;
    config.validate()?;
    Ok(config)
  }

  /// Validate every relocation rule
  pub fn validate(&self) -> DecomposeResult<()> {
    for rule in &self.relocations {
      rule.validate()?;
    }
    Ok(())
  }

  /// Save config to decomposer.toml (default location)
  pub fn save(&self, path: &Path) -> DecomposeResult<()> {
    let config_path = path.join("decomposer.toml");
    let content = toml_edit::ser::to_string_pretty(self).context("Failed to serialize config to TOML")?;
    fs::write(&config_path, content).with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    Ok(())
  }

  /// Check if config exists at the given path
  pub fn exists(path: &Path) -> bool {
    Self::find_config_path(path).is_some()
  }

  /// Configured target repository, if any
  pub fn repository(&self) -> Option<LocalRepository> {
    self.repository.root.as_ref().map(LocalRepository::new)
  }
}
