//! Plugin registry for the bgview blood-glucose monitoring application.
//!
//! [`PluginRegistry`] keeps the ordered catalog of plugins, derives the
//! enabled set from [`Settings`], filters the shown set for a [`Sandbox`]
//! and fans lifecycle hooks out across them.
pub mod config;
pub mod error;
pub mod plugin_system;
pub mod sandbox;

pub use config::{ConfigFormat, EnableConfig, Settings};
pub use error::{Error, Result};
pub use plugin_system::{DefaultPlugins, Plugin, PluginRegistry, PluginSystemError, PluginType};
pub use sandbox::{BasicSandbox, ExtendedSandbox, Sandbox};

#[cfg(test)]
mod tests;
