//! Shared utilities for Vouch.

pub mod logging;
pub mod plural;

pub use logging::{init_logging, LogFormat};
pub use plural::give_me_an_s;
