//! Plain data models for the bootstrapper
//!
//! Nothing in here touches the DOM, so all of it is testable natively.

pub mod config;
pub mod drag;

pub use config::*;
pub use drag::*;
