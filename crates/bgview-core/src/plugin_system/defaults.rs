//! Default plugin sets for client and server deployments.
//!
//! The lists fix the registration order, and with it the dispatch order,
//! of each deployment.
use std::sync::Arc;

use crate::plugin_system::builtin::DescriptorPlugin;
use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::traits::Plugin;

/// Plugins registered by a client (browser) deployment, in order.
pub const CLIENT_DEFAULT_PLUGINS: &[&str] = &[
    "rawbg",
    "delta",
    "direction",
    "timeago",
    "upbat",
    "ar2",
    "errorcodes",
    "iob",
    "cob",
    "careportal",
    "pump",
    "openaps",
    "boluswizardpreview",
    "cannulaage",
    "sensorage",
    "insulinage",
    "basalprofile",
    // display toggle only
    "boluscalc",
    // holds extended settings only
    "profile",
];

/// Plugins registered by a server deployment, in order.
pub const SERVER_DEFAULT_PLUGINS: &[&str] = &[
    "rawbg",
    "delta",
    "direction",
    "ar2",
    "simplealarms",
    "errorcodes",
    "iob",
    "cob",
    "pump",
    "openaps",
    "boluswizardpreview",
    "cannulaage",
    "sensorage",
    "insulinage",
    "treatmentnotify",
    "timeago",
];

/// Factory trait for creating plugin instances by name.
pub trait PluginFactory {
    /// Create a new instance of the named plugin, or `None` if unknown.
    fn create(&self, name: &str) -> Option<Arc<dyn Plugin>>;
}

impl<F> PluginFactory for F
where
    F: Fn(&str) -> Option<Arc<dyn Plugin>>,
{
    fn create(&self, name: &str) -> Option<Arc<dyn Plugin>> {
        self(name)
    }
}

/// Instantiated client and server default sets.
///
/// Each list holds its own instances; a plugin in both lists is created twice.
#[derive(Clone, Default)]
pub struct DefaultPlugins {
    client: Vec<Arc<dyn Plugin>>,
    server: Vec<Arc<dyn Plugin>>,
}

impl DefaultPlugins {
    /// Build both default sets from `factory`.
    ///
    /// Fails on the first default name the factory cannot create.
    pub fn build(factory: &dyn PluginFactory) -> Result<Self, PluginSystemError> {
        Ok(Self {
            client: build_list(factory, CLIENT_DEFAULT_PLUGINS)?,
            server: build_list(factory, SERVER_DEFAULT_PLUGINS)?,
        })
    }

    /// Default sets made of hook-less [`DescriptorPlugin`]s.
    pub fn descriptors() -> Self {
        Self {
            client: CLIENT_DEFAULT_PLUGINS.iter().map(|n| DescriptorPlugin::for_default(n)).collect(),
            server: SERVER_DEFAULT_PLUGINS.iter().map(|n| DescriptorPlugin::for_default(n)).collect(),
        }
    }

    pub fn client(&self) -> &[Arc<dyn Plugin>] {
        &self.client
    }

    pub fn server(&self) -> &[Arc<dyn Plugin>] {
        &self.server
    }
}

fn build_list(
    factory: &dyn PluginFactory,
    names: &[&str],
) -> Result<Vec<Arc<dyn Plugin>>, PluginSystemError> {
    names
        .iter()
        .map(|name| {
            factory.create(name).ok_or_else(|| PluginSystemError::MissingDefault {
                name: name.to_string(),
            })
        })
        .collect()
}

impl std::fmt::Debug for DefaultPlugins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = |list: &[Arc<dyn Plugin>]| list.iter().map(|p| p.name().to_string()).collect::<Vec<_>>();
        f.debug_struct("DefaultPlugins")
            .field("client", &names(&self.client))
            .field("server", &names(&self.server))
            .finish()
    }
}
