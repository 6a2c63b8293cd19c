//! Enablement: which catalog entries are active for the current configuration.
//!
//! Every [`PluginRegistry::init`] computes a fresh [`EnabledSet`] from the
//! whole catalog and replaces the previous one. Nothing carries over between
//! passes, so a plugin dropped from the enable list is disabled even if it
//! was enabled before.
use std::sync::Arc;

use crate::config::EnableConfig;
use crate::plugin_system::registry::PluginRegistry;
use crate::plugin_system::traits::Plugin;

/// Plugins enabled by one enablement pass, in catalog order.
#[derive(Clone, Default)]
pub struct EnabledSet {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl EnabledSet {
    /// Select the catalog entries whose name is in the configuration's enable list.
    pub fn compute<C>(catalog: &[Arc<dyn Plugin>], config: &C) -> Self
    where
        C: EnableConfig + ?Sized,
    {
        let plugins = catalog
            .iter()
            .filter(|p| config.is_enabled(p.name()))
            .cloned()
            .collect();
        Self { plugins }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Plugin>> {
        self.plugins.iter()
    }

    pub fn as_slice(&self) -> &[Arc<dyn Plugin>] {
        &self.plugins
    }

    pub fn contains(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl std::fmt::Debug for EnabledSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl PluginRegistry {
    /// Recompute the enabled set from `config`.
    ///
    /// A plugin is enabled iff its name appears in the enable list. Running
    /// this twice with the same configuration yields the same set.
    pub fn init<C>(&mut self, config: &C) -> &EnabledSet
    where
        C: EnableConfig + ?Sized,
    {
        self.enabled = EnabledSet::compute(self.catalog(), config);
        log::debug!(
            "Enabled {} of {} plugins: {}",
            self.enabled.len(),
            self.len(),
            self.enabled_plugin_names()
        );
        &self.enabled
    }

    /// The enabled set from the last [`init`](Self::init); empty before the first pass
    pub fn enabled_plugins(&self) -> &EnabledSet {
        &self.enabled
    }

    /// Visit every enabled plugin in catalog order
    pub fn for_each_enabled_plugin<F>(&self, mut visitor: F)
    where
        F: FnMut(&Arc<dyn Plugin>),
    {
        self.enabled.iter().for_each(|p| visitor(p));
    }

    /// Whether a plugin with this name was enabled by the last pass
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }

    /// Enabled plugin names joined by single spaces, in catalog order
    pub fn enabled_plugin_names(&self) -> String {
        self.enabled.names().join(" ")
    }
}
