pub mod actions;
pub mod mocks;
pub mod session_builders;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use mocks::{FlakyKeyValueStore, MockCatalogFetcher};
#[allow(unused_imports)]
pub use session_builders::SessionBuilder;
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
