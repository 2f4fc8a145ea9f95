//! Utility modules for syscall-defgen

pub mod logging;

pub use logging::init_logging;
