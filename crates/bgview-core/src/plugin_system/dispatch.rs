//! Lifecycle dispatch across the enabled or shown plugins.
//!
//! Each fan-out runs sequentially in catalog order and only calls plugins
//! that provide the hook. A hook error stops the fan-out: plugins after the
//! failing one are not called, and the error is returned to the caller.
use std::sync::Arc;

use serde_json::Value;

use crate::plugin_system::error::{HookKind, PluginSystemError};
use crate::plugin_system::registry::PluginRegistry;
use crate::plugin_system::traits::{HookError, Plugin};
use crate::sandbox::Sandbox;

fn hook_failed(plugin: &dyn Plugin, hook: HookKind) -> impl FnOnce(HookError) -> PluginSystemError {
    let plugin_id = plugin.name().to_string();
    move |source| {
        log::error!("Hook '{}' failed in plugin '{}': {}", hook, plugin_id, source);
        PluginSystemError::HookFailed {
            plugin_id,
            hook,
            source,
        }
    }
}

impl PluginRegistry {
    /// Let every enabled plugin compute its properties into the sandbox.
    pub fn set_properties(&self, sbx: &dyn Sandbox) -> Result<(), PluginSystemError> {
        for plugin in self.enabled.iter() {
            if let Some(hook) = plugin.properties_hook() {
                let extended = sbx.with_extended_settings(plugin.as_ref());
                hook.set_properties(&extended)
                    .map_err(hook_failed(plugin.as_ref(), HookKind::SetProperties))?;
            }
        }
        Ok(())
    }

    /// Let every enabled plugin check for notifications.
    pub fn check_notifications(&self, sbx: &dyn Sandbox) -> Result<(), PluginSystemError> {
        for plugin in self.enabled.iter() {
            if let Some(hook) = plugin.notifications_hook() {
                let extended = sbx.with_extended_settings(plugin.as_ref());
                hook.check_notifications(&extended)
                    .map_err(hook_failed(plugin.as_ref(), HookKind::CheckNotifications))?;
            }
        }
        Ok(())
    }

    /// Let every shown plugin update its visualisation.
    ///
    /// Enabled plugins that are not shown are never asked to render.
    pub fn update_visualisations(&self, sbx: &dyn Sandbox) -> Result<(), PluginSystemError> {
        let shown: Vec<Arc<dyn Plugin>> = self.shown_plugins(Some(sbx));
        for plugin in &shown {
            if let Some(hook) = plugin.visualisation_hook() {
                let extended = sbx.with_extended_settings(plugin.as_ref());
                hook.update_visualisation(&extended)
                    .map_err(hook_failed(plugin.as_ref(), HookKind::UpdateVisualisation))?;
            }
        }
        Ok(())
    }

    /// Collect the event types of every enabled plugin, in catalog order.
    ///
    /// Only array results contribute; anything else is skipped.
    pub fn get_all_event_types(&self, sbx: &dyn Sandbox) -> Result<Vec<Value>, PluginSystemError> {
        let mut all = Vec::new();
        for plugin in self.enabled.iter() {
            let Some(hook) = plugin.event_types_hook() else {
                continue;
            };
            let extended = sbx.with_extended_settings(plugin.as_ref());
            match hook
                .get_event_types(&extended)
                .map_err(hook_failed(plugin.as_ref(), HookKind::GetEventTypes))?
            {
                Value::Array(event_types) => all.extend(event_types),
                other => log::trace!(
                    "Ignoring non-array event types from plugin '{}': {}",
                    plugin.name(),
                    other
                ),
            }
        }
        Ok(all)
    }
}
