//! Release identity model and project releases
//!
//! - **id**: `ReleaseOrigin`, `ReleaseVersion`, `ReleaseId` (the canonical grouping key)
//! - **coords**: structured artifact coordinates and their textual form
//! - **project**: `ProjectDependency`, `ProjectRelease` and its builder
//!
//! # Invariants
//!
//! 1. **Ids are values**
//!    - Equality and hashing come from fields, never from identity
//!    - Rendering is `origin@version`, stable for logs and map keys
//!
//! 2. **A release only holds its own dependencies**
//!    - Every dependency's release id equals the release's id
//!    - Coordinates are unique, insertion order is kept

pub mod coords;
pub mod id;
pub mod project;

pub use coords::{AGGREGATOR_TYPE, ArtifactCoords, DEFAULT_TYPE};
pub use id::{ReleaseId, ReleaseOrigin, ReleaseVersion};
pub use project::{ProjectDependency, ProjectRelease, ProjectReleaseBuilder};
