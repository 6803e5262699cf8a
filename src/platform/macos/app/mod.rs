//! Concrete platform types handed to the coordinator.

pub mod shell;

pub use shell::{MacPlatform, MacShell};
