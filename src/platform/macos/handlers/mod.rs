//! Main-loop event handling.

pub mod dispatcher;

pub use dispatcher::{
    capture_window_closed, dispatch_events, install_coordinator, shutdown_coordinator,
    start_dispatch_timer, with_coordinator,
};
