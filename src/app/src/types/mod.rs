//! Domain-based type organization
//!
//! - common: resource names and shared wire helpers
//! - door: door state and the toggle action
//! - network: WiFi configuration and its form
//! - location: coordinates, timezone table and the location form
//! - ui: confirmation indicator state

pub mod common;
pub mod door;
pub mod location;
pub mod network;
pub mod ui;

pub use common::*;
pub use door::*;
pub use location::*;
pub use network::*;
pub use ui::*;
