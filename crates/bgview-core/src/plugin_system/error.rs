//! # bgview Plugin System Errors
//!
//! Defines [`PluginSystemError`], raised when a hook body fails during a
//! fan-out, when a default set cannot be assembled, or when a plugin type
//! tag cannot be parsed.
//!
//! Lookups, absent hooks and malformed event-type results are not errors;
//! the registry skips them.
use std::fmt;

use crate::plugin_system::traits::HookError;

/// The lifecycle hook a dispatch was running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    SetProperties,
    CheckNotifications,
    UpdateVisualisation,
    GetEventTypes,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HookKind::SetProperties => "setProperties",
            HookKind::CheckNotifications => "checkNotifications",
            HookKind::UpdateVisualisation => "updateVisualisation",
            HookKind::GetEventTypes => "getEventTypes",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PluginSystemError {
    #[error("Hook '{hook}' failed in plugin '{plugin_id}': {source}")]
    HookFailed {
        plugin_id: String,
        hook: HookKind,
        #[source]
        source: HookError,
    },

    #[error("Plugin factory has no implementation for default plugin '{name}'")]
    MissingDefault { name: String },

    #[error("Unknown plugin type: '{0}'")]
    UnknownPluginType(String),
}

impl PluginSystemError {
    /// The plugin the error refers to, if any.
    pub fn plugin_id(&self) -> Option<&str> {
        match self {
            PluginSystemError::HookFailed { plugin_id, .. } => Some(plugin_id),
            PluginSystemError::MissingDefault { name } => Some(name),
            PluginSystemError::UnknownPluginType(_) => None,
        }
    }
}
