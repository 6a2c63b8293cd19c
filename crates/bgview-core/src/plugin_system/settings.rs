//! Client settings projection.
use serde_json::{Map, Value};

use crate::plugin_system::defaults::CLIENT_DEFAULT_PLUGINS;
use crate::plugin_system::registry::PluginRegistry;

/// Extended settings key copied to clients regardless of the plugin lists
pub const DEVICESTATUS_KEY: &str = "devicestatus";

/// Restrict extended settings to what a client deployment needs.
///
/// The result has one key per client default plugin and one for
/// `devicestatus`. Keys missing from `all` map to `null`.
pub fn project_client_settings(all: &Map<String, Value>) -> Map<String, Value> {
    CLIENT_DEFAULT_PLUGINS
        .iter()
        .copied()
        .chain(std::iter::once(DEVICESTATUS_KEY))
        .map(|key| (key.to_string(), all.get(key).cloned().unwrap_or(Value::Null)))
        .collect()
}

impl PluginRegistry {
    /// See [`project_client_settings`].
    pub fn extended_client_settings(&self, all: &Map<String, Value>) -> Map<String, Value> {
        project_client_settings(all)
    }
}
