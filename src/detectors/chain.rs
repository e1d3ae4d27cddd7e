//! Ordered detector registry

use super::trait_def::ReleaseIdDetector;
use std::sync::Arc;

/// Detectors in registration order. First match wins.
#[derive(Clone)]
pub struct DetectorChain {
  detectors: Vec<Arc<dyn ReleaseIdDetector>>,
}

impl DetectorChain {
  /// Create an empty chain
  pub fn new() -> Self {
    Self { detectors: Vec::new() }
  }

  /// Append a detector to the end of the chain
  pub fn add_detector(&mut self, detector: Arc<dyn ReleaseIdDetector>) {
    self.detectors.push(detector);
  }

  /// Get all registered detectors
  pub fn detectors(&self) -> &[Arc<dyn ReleaseIdDetector>] {
    &self.detectors
  }

  pub fn len(&self) -> usize {
    self.detectors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.detectors.is_empty()
  }
}

impl Default for DetectorChain {
  fn default() -> Self {
    Self::new()
  }
}

/// Create a chain with all built-in detectors
pub fn default_chain() -> DetectorChain {
  let mut chain = DetectorChain::new();

  chain.add_detector(Arc::new(super::jakarta_websocket::JakartaWebsocketDetector::new()));

  chain
}
