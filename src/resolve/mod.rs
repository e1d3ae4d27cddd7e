//! Release identity resolution engine
//!
//! - **metadata**: `MetadataSource` collaborator trait and an in-memory implementation
//! - **heuristic**: default release id derived from published scm metadata
//! - **resolver**: detector chain + default heuristic
//! - **decompose**: resolve an artifact list and group it into project releases

pub mod decompose;
pub mod heuristic;
pub mod metadata;
pub mod resolver;

pub use decompose::{Decomposition, decompose};
pub use heuristic::DefaultHeuristic;
pub use metadata::{MetadataSource, ScmMetadata, StaticMetadataSource};
pub use resolver::ReleaseIdResolver;
