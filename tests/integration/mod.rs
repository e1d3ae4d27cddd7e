//! Integration tests for bom-decomposer

mod test_install;
mod test_resolve;
mod test_roundtrip;
