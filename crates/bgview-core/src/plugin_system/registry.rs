use std::fmt;
use std::sync::Arc;

use crate::plugin_system::defaults::DefaultPlugins;
use crate::plugin_system::enablement::EnabledSet;
use crate::plugin_system::traits::Plugin;

/// Registry for managing plugins
///
/// Holds the catalog (every registered plugin, in registration order), the
/// enabled set computed by the most recent [`init`](PluginRegistry::init)
/// and the default sets used by
/// [`register_client_defaults`](PluginRegistry::register_client_defaults) and
/// [`register_server_defaults`](PluginRegistry::register_server_defaults).
///
/// Registration order is dispatch order. Names are expected to be unique but
/// this is not enforced: registering a name twice keeps both entries, and both
/// take part in every fan-out.
pub struct PluginRegistry {
    /// Registered plugins, in registration order
    plugins: Vec<Arc<dyn Plugin>>,
    /// Result of the last enablement pass
    pub(crate) enabled: EnabledSet,
    /// Default sets for client and server deployments
    defaults: DefaultPlugins,
}

impl PluginRegistry {
    /// Create an empty registry whose default sets are hook-less descriptors.
    pub fn new() -> Self {
        Self::with_defaults(DefaultPlugins::descriptors())
    }

    /// Create an empty registry with the given default sets.
    pub fn with_defaults(defaults: DefaultPlugins) -> Self {
        Self {
            plugins: Vec::new(),
            enabled: EnabledSet::default(),
            defaults,
        }
    }

    /// Append plugins to the catalog, keeping their order.
    pub fn register<I>(&mut self, plugins: I) -> &mut Self
    where
        I: IntoIterator<Item = Arc<dyn Plugin>>,
    {
        for plugin in plugins {
            if self.has_plugin(plugin.name()) {
                log::warn!(
                    "Plugin '{}' is already registered; keeping both entries",
                    plugin.name()
                );
            }
            log::debug!("Registering plugin: {}", plugin.name());
            self.plugins.push(plugin);
        }
        self
    }

    /// Register the client default set, in its listed order.
    pub fn register_client_defaults(&mut self) -> &mut Self {
        let client = self.defaults.client().to_vec();
        self.register(client)
    }

    /// Register the server default set, in its listed order.
    pub fn register_server_defaults(&mut self) -> &mut Self {
        let server = self.defaults.server().to_vec();
        self.register(server)
    }

    /// First registered plugin with the given name
    pub fn find(&self, name: &str) -> Option<Arc<dyn Plugin>> {
        self.plugins.iter().find(|p| p.name() == name).cloned()
    }

    /// Check if a plugin is registered by name
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }

    /// Visit every registered plugin in registration order
    pub fn for_each_plugin<F>(&self, mut visitor: F)
    where
        F: FnMut(&Arc<dyn Plugin>),
    {
        self.plugins.iter().for_each(|p| visitor(p));
    }

    /// Iterate over every registered plugin in registration order
    pub fn iter_plugins(&self) -> impl Iterator<Item = &Arc<dyn Plugin>> {
        self.plugins.iter()
    }

    /// Names of every registered plugin in registration order
    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// The default sets this registry registers from
    pub fn defaults(&self) -> &DefaultPlugins {
        &self.defaults
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub(crate) fn catalog(&self) -> &[Arc<dyn Plugin>] {
        &self.plugins
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.plugin_names())
            .field("enabled", &self.enabled.names())
            .finish()
    }
}
