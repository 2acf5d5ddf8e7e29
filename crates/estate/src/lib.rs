//! Real estate trading game shell
//!
//! Wires the game core to a platform: storage backends for native and web
//! builds, logging, and a [`Session`] that saves after every action.

pub mod logging;
pub mod platform;
pub mod session;
pub mod tooltip;

#[cfg(feature = "web")]
pub mod web;

pub use session::Session;
pub use tooltip::Tooltip;

#[cfg(feature = "native")]
pub use logging::init_logging;
