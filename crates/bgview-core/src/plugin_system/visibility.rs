//! Visibility: which enabled plugins are on screen for a given sandbox.
use std::sync::Arc;

use crate::plugin_system::registry::PluginRegistry;
use crate::plugin_system::traits::{Plugin, PluginType};
use crate::sandbox::Sandbox;

/// Plugins that are always shown when enabled: core on-screen indicators,
/// or plugins that only hold settings.
pub const SPECIAL_PLUGINS: &[&str] = &[
    "rawbg",
    "delta",
    "direction",
    "timeago",
    "upbat",
    "errorcodes",
    "profile",
];

/// Whether `name` is on the always-shown list
pub fn is_special(name: &str) -> bool {
    SPECIAL_PLUGINS.contains(&name)
}

fn is_shown(plugin: &Arc<dyn Plugin>, sbx: Option<&dyn Sandbox>) -> bool {
    if is_special(plugin.name()) {
        return true;
    }
    sbx.and_then(|s| s.show_plugins())
        .is_some_and(|hint| hint.iter().any(|n| n == plugin.name()))
}

impl PluginRegistry {
    /// Enabled plugins that are special or named in the sandbox's show hint,
    /// in catalog order.
    pub fn shown_plugins(&self, sbx: Option<&dyn Sandbox>) -> Vec<Arc<dyn Plugin>> {
        self.enabled
            .iter()
            .filter(|p| is_shown(p, sbx))
            .cloned()
            .collect()
    }

    /// Visit every shown plugin in catalog order
    pub fn for_each_shown_plugin<F>(&self, sbx: Option<&dyn Sandbox>, mut visitor: F)
    where
        F: FnMut(&Arc<dyn Plugin>),
    {
        self.shown_plugins(sbx).iter().for_each(|p| visitor(p));
    }

    /// Whether any shown plugin has the given type.
    ///
    /// Always false without a sandbox.
    pub fn has_shown_type(&self, plugin_type: PluginType, sbx: Option<&dyn Sandbox>) -> bool {
        if sbx.is_none() {
            return false;
        }
        self.enabled
            .iter()
            .filter(|p| is_shown(p, sbx))
            .any(|p| p.plugin_type() == Some(plugin_type))
    }
}
