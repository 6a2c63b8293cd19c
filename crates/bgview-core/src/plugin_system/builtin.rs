//! Hook-less descriptor plugins.
//!
//! A [`DescriptorPlugin`] carries a name and a type tag and nothing else.
//! `boluscalc` (a display toggle) and `profile` (a settings holder) are
//! exactly that in the real application; for the other defaults a
//! descriptor stands in where only registration and visibility matter,
//! such as the inspection CLI.
use std::sync::Arc;

use crate::plugin_system::defaults::PluginFactory;
use crate::plugin_system::traits::{Plugin, PluginType};

/// Type tags of the default plugins.
const DEFAULT_PLUGIN_TYPES: &[(&str, PluginType)] = &[
    ("rawbg", PluginType::PillMinor),
    ("delta", PluginType::PillMajor),
    ("direction", PluginType::BgValueOnly),
    ("timeago", PluginType::PillStatus),
    ("upbat", PluginType::PillStatus),
    ("ar2", PluginType::Forecast),
    ("simplealarms", PluginType::Notification),
    ("errorcodes", PluginType::Notification),
    ("iob", PluginType::PillMajor),
    ("cob", PluginType::PillMinor),
    ("careportal", PluginType::Drawer),
    ("pump", PluginType::PillStatus),
    ("openaps", PluginType::PillStatus),
    ("boluswizardpreview", PluginType::PillAlt),
    ("cannulaage", PluginType::PillMinor),
    ("sensorage", PluginType::PillMinor),
    ("insulinage", PluginType::PillMinor),
    ("basalprofile", PluginType::PillMinor),
    ("treatmentnotify", PluginType::Notification),
    ("boluscalc", PluginType::Drawer),
    ("profile", PluginType::Fake),
];

/// Type tag of a default plugin, `None` for names outside the default sets
pub fn default_plugin_type(name: &str) -> Option<PluginType> {
    DEFAULT_PLUGIN_TYPES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, t)| *t)
}

/// A plugin with a name, an optional type and no hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorPlugin {
    name: String,
    plugin_type: Option<PluginType>,
}

impl DescriptorPlugin {
    pub fn new(name: impl Into<String>, plugin_type: Option<PluginType>) -> Self {
        Self {
            name: name.into(),
            plugin_type,
        }
    }

    /// Descriptor for a default plugin, typed from the default type table
    pub fn for_default(name: &str) -> Arc<dyn Plugin> {
        Arc::new(Self::new(name, default_plugin_type(name)))
    }
}

impl Plugin for DescriptorPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn plugin_type(&self) -> Option<PluginType> {
        self.plugin_type
    }
}

/// Creates a [`DescriptorPlugin`] for every default plugin name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorFactory;

impl PluginFactory for DescriptorFactory {
    fn create(&self, name: &str) -> Option<Arc<dyn Plugin>> {
        default_plugin_type(name).map(|_| DescriptorPlugin::for_default(name))
    }
}
