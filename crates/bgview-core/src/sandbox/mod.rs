//! # bgview Sandbox
//!
//! The sandbox is the rendering context handed to plugins on every lifecycle
//! call. The application owns the real sandbox (readings, treatments,
//! profile, chart handles); the registry only needs two things from it:
//!
//! - the optional `show_plugins` hint used by the visibility filter, and
//! - each plugin's extended settings, which are folded into a per-plugin
//!   [`ExtendedSandbox`] before a hook is invoked.
//!
//! [`BasicSandbox`] is an in-memory implementation for the CLI and tests.
use std::any::Any;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::plugin_system::traits::Plugin;

/// Rendering context contract consumed by the registry.
pub trait Sandbox {
    /// Names of plugins the caller asked to show, if it supplied a hint.
    fn show_plugins(&self) -> Option<&[String]>;

    /// Settings scoped to the named plugin. `Value::Null` when none exist.
    fn extended_settings(&self, plugin_name: &str) -> Value;

    /// Access to the concrete sandbox, for plugins that know its type.
    fn as_any(&self) -> &dyn Any;
}

impl<'s> dyn Sandbox + 's {
    /// Build the plugin-scoped view passed into that plugin's hooks.
    ///
    /// The base sandbox is borrowed, never modified.
    pub fn with_extended_settings(&self, plugin: &dyn Plugin) -> ExtendedSandbox<'_> {
        ExtendedSandbox {
            base: self,
            plugin_name: plugin.name().to_string(),
            settings: self.extended_settings(plugin.name()),
        }
    }
}

/// A sandbox augmented with one plugin's own settings.
pub struct ExtendedSandbox<'a> {
    base: &'a dyn Sandbox,
    plugin_name: String,
    settings: Value,
}

impl<'a> ExtendedSandbox<'a> {
    /// The caller's sandbox
    pub fn base(&self) -> &'a dyn Sandbox {
        self.base
    }

    /// Downcast the caller's sandbox to its concrete type
    pub fn base_as<T: 'static>(&self) -> Option<&'a T> {
        self.base.as_any().downcast_ref::<T>()
    }

    /// The plugin this view was built for
    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    /// The plugin's extended settings, `Value::Null` when there are none
    pub fn settings(&self) -> &Value {
        &self.settings
    }

    /// Get one extended setting, deserialized into `T`
    pub fn setting<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.settings
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Get one extended setting with a fallback
    pub fn setting_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.setting(key).unwrap_or(default)
    }

    pub fn show_plugins(&self) -> Option<&'a [String]> {
        self.base.show_plugins()
    }
}

impl std::fmt::Debug for ExtendedSandbox<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtendedSandbox")
            .field("plugin_name", &self.plugin_name)
            .field("settings", &self.settings)
            .field("show_plugins", &self.base.show_plugins())
            .finish()
    }
}

/// In-memory sandbox holding a show hint and per-plugin extended settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicSandbox {
    show_plugins: Option<Vec<String>>,
    extended: Map<String, Value>,
}

impl BasicSandbox {
    /// Create a sandbox with no hint and no extended settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the show hint
    pub fn with_show_plugins<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.show_plugins = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Replace all extended settings
    pub fn with_extended(mut self, extended: Map<String, Value>) -> Self {
        self.extended = extended;
        self
    }

    /// Set the extended settings of one plugin
    pub fn set_extended_settings(&mut self, plugin_name: &str, value: Value) {
        self.extended.insert(plugin_name.to_string(), value);
    }

    /// Drop the show hint
    pub fn clear_show_plugins(&mut self) {
        self.show_plugins = None;
    }

    pub fn extended(&self) -> &Map<String, Value> {
        &self.extended
    }
}

impl Sandbox for BasicSandbox {
    fn show_plugins(&self) -> Option<&[String]> {
        self.show_plugins.as_deref()
    }

    fn extended_settings(&self, plugin_name: &str) -> Value {
        self.extended.get(plugin_name).cloned().unwrap_or(Value::Null)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
