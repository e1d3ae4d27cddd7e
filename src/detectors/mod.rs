//! Release-id override detectors
//!
//! Every detector implements the `ReleaseIdDetector` trait. The resolver walks
//! the chain in registration order and takes the first `Some`.
//!
//! # Built-in Detectors
//!
//! - **jakarta-websocket**: redirects `jakarta.websocket` artifacts published with
//!   `eclipse-ee4j` scm metadata to `jakartaee/websocket`, tagged `<version>-RELEASE`
//!
//! Additional `relocation:<group>` detectors come from `[[relocations]]` in
//! decomposer.toml and are appended after the built-in ones.

mod chain;
mod jakarta_websocket;
mod relocation;
mod trait_def;

// Re-export public API
pub use chain::{DetectorChain, default_chain};
pub use jakarta_websocket::JakartaWebsocketDetector;
pub use relocation::RelocationDetector;
pub use trait_def::ReleaseIdDetector;
