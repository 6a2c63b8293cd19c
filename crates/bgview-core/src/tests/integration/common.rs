use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::plugin_system::error::HookKind;
use crate::plugin_system::traits::{
    EventTypesHook, HookError, HookResult, NotificationsHook, Plugin, PluginType, PropertiesHook,
    VisualisationHook,
};
use crate::sandbox::ExtendedSandbox;

/// One recorded hook invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// Plugin name as seen through the extended sandbox
    pub plugin: String,
    pub hook: HookKind,
    /// Extended settings the plugin received
    pub settings: Value,
}

/// Shared, ordered record of hook invocations across plugins
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, hook: HookKind, sbx: &ExtendedSandbox<'_>) {
        self.0.lock().unwrap().push(Call {
            plugin: sbx.plugin_name().to_string(),
            hook,
            settings: sbx.settings().clone(),
        });
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    /// Names of plugins called for `hook`, in call order
    pub fn plugins_for(&self, hook: HookKind) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.hook == hook)
            .map(|c| c.plugin)
            .collect()
    }
}

/// Configurable plugin for registry tests
pub struct MockPlugin {
    name: String,
    plugin_type: Option<PluginType>,
    hooks: Vec<HookKind>,
    event_types: Value,
    fail_on: Option<HookKind>,
    log: CallLog,
}

impl MockPlugin {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            plugin_type: None,
            hooks: Vec::new(),
            event_types: Value::Array(Vec::new()),
            fail_on: None,
            log: CallLog::new(),
        }
    }

    pub fn typed(mut self, plugin_type: PluginType) -> Self {
        self.plugin_type = Some(plugin_type);
        self
    }

    pub fn with_hooks(mut self, hooks: &[HookKind]) -> Self {
        self.hooks.extend_from_slice(hooks);
        self
    }

    pub fn with_all_hooks(self) -> Self {
        self.with_hooks(&[
            HookKind::SetProperties,
            HookKind::CheckNotifications,
            HookKind::UpdateVisualisation,
            HookKind::GetEventTypes,
        ])
    }

    /// Value returned by the event-types hook (also enables that hook)
    pub fn event_types(mut self, value: Value) -> Self {
        if !self.hooks.contains(&HookKind::GetEventTypes) {
            self.hooks.push(HookKind::GetEventTypes);
        }
        self.event_types = value;
        self
    }

    pub fn failing(mut self, hook: HookKind) -> Self {
        self.fail_on = Some(hook);
        self
    }

    pub fn log(mut self, log: &CallLog) -> Self {
        self.log = log.clone();
        self
    }

    pub fn arc(self) -> Arc<dyn Plugin> {
        Arc::new(self)
    }

    fn has(&self, hook: HookKind) -> bool {
        self.hooks.contains(&hook)
    }

    fn run(&self, hook: HookKind, sbx: &ExtendedSandbox<'_>) -> HookResult<()> {
        self.log.record(hook, sbx);
        if self.fail_on == Some(hook) {
            return Err(HookError::new(format!("{} refused {}", self.name, hook)));
        }
        Ok(())
    }
}

impl Plugin for MockPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn plugin_type(&self) -> Option<PluginType> {
        self.plugin_type
    }

    fn properties_hook(&self) -> Option<&dyn PropertiesHook> {
        self.has(HookKind::SetProperties).then_some(self as &dyn PropertiesHook)
    }

    fn notifications_hook(&self) -> Option<&dyn NotificationsHook> {
        self.has(HookKind::CheckNotifications).then_some(self as &dyn NotificationsHook)
    }

    fn visualisation_hook(&self) -> Option<&dyn VisualisationHook> {
        self.has(HookKind::UpdateVisualisation).then_some(self as &dyn VisualisationHook)
    }

    fn event_types_hook(&self) -> Option<&dyn EventTypesHook> {
        self.has(HookKind::GetEventTypes).then_some(self as &dyn EventTypesHook)
    }
}

impl PropertiesHook for MockPlugin {
    fn set_properties(&self, sbx: &ExtendedSandbox<'_>) -> HookResult<()> {
        self.run(HookKind::SetProperties, sbx)
    }
}

impl NotificationsHook for MockPlugin {
    fn check_notifications(&self, sbx: &ExtendedSandbox<'_>) -> HookResult<()> {
        self.run(HookKind::CheckNotifications, sbx)
    }
}

impl VisualisationHook for MockPlugin {
    fn update_visualisation(&self, sbx: &ExtendedSandbox<'_>) -> HookResult<()> {
        self.run(HookKind::UpdateVisualisation, sbx)
    }
}

impl EventTypesHook for MockPlugin {
    fn get_event_types(&self, sbx: &ExtendedSandbox<'_>) -> HookResult<Value> {
        self.run(HookKind::GetEventTypes, sbx)?;
        Ok(self.event_types.clone())
    }
}

/// Names of a list of plugins, for compact assertions
pub fn names(plugins: &[Arc<dyn Plugin>]) -> Vec<String> {
    plugins.iter().map(|p| p.name().to_string()).collect()
}
