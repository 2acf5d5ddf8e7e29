//! Platform abstraction layer for native/web compatibility.
//!
//! The game core saves through [`estate_core::KeyValueStore`]; this module
//! supplies one implementation per target:
//! - native: one JSON file per key under a data directory
//! - web: browser LocalStorage

#[cfg(feature = "native")]
pub mod native;

#[cfg(feature = "web")]
pub mod web;

#[cfg(feature = "native")]
pub use native::NativeStorage;

#[cfg(feature = "web")]
pub use web::WebStorage;
