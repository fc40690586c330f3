//! Library surface for the EV Payback Calculator.
//!
//! Re-exports the workspace crates under stable module names so the binaries
//! and integration tests consume a single coherent API.

pub use payback_config as config;
pub use payback_core::{constants, money};
pub use payback_export as export;
pub use payback_simulation as simulation;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
