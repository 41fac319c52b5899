//! Configuration module for the deep-link tester.

pub mod catalog;
pub mod environments;
pub mod feedback;
pub mod persistence;
pub mod qr;
pub mod testing;

mod debug; // Private: read through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use catalog::CATALOG;
pub use environments::{DEFAULT_ENVIRONMENT_INDEX, ENVIRONMENTS};
pub use feedback::FEEDBACK;
pub use persistence::PERSISTENCE;
pub use qr::QR;
pub use testing::TESTING;
