//! Utility functions for repository path handling and checksums

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Convert a dotted group into nested directories
///
/// `org.acme.tools` → `org/acme/tools`. Empty segments (leading, trailing or
/// doubled dots) are dropped.
pub fn group_to_path(group: &str) -> PathBuf {
  group
    .split('.')
    .filter(|segment| !segment.is_empty())
    .collect()
}

/// Append an extra extension to a file path (`a.jar` → `a.jar.sha256`)
pub fn with_added_extension(path: &Path, extension: &str) -> PathBuf {
  let mut os = path.as_os_str().to_owned();
  os.push(".");
  os.push(extension);
  PathBuf::from(os)
}

/// Lower-case hex SHA-256 of `bytes`
pub fn sha256_hex(bytes: &[u8]) -> String {
  format!("{:x}", Sha256::digest(bytes))
}
