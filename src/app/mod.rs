//! Application wiring.
//!
//! - shell.rs: platform seams (`Shell`, `Platform`) and the parts bundle
//! - coordinator.rs: owns the components and handles `AppEvent`s

pub mod coordinator;
pub mod shell;

pub use coordinator::Coordinator;
pub use shell::{Platform, PlatformParts, Shell};
