use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::plugin_system::error::PluginSystemError;
use crate::sandbox::ExtendedSandbox;

/// Display categories a plugin can declare.
///
/// The tag drives type-based visibility queries such as "is any major pill
/// on screen right now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginType {
    /// Large pill next to the current reading
    PillMajor,
    /// Small pill in the secondary row
    PillMinor,
    /// Status pill (uploader battery, pump, loop)
    PillStatus,
    /// Alternate pill shown in place of the reading
    PillAlt,
    /// Decorates the reading itself (direction arrow)
    BgValueOnly,
    /// Raises notifications, renders nothing
    Notification,
    /// Contributes forecast points to the chart
    Forecast,
    /// Lives in a drawer/form (care portal, bolus calculator)
    Drawer,
    /// Only used by reports
    Report,
    /// Holds settings, never rendered
    Fake,
}

impl PluginType {
    /// All known categories.
    pub const ALL: [PluginType; 10] = [
        PluginType::PillMajor,
        PluginType::PillMinor,
        PluginType::PillStatus,
        PluginType::PillAlt,
        PluginType::BgValueOnly,
        PluginType::Notification,
        PluginType::Forecast,
        PluginType::Drawer,
        PluginType::Report,
        PluginType::Fake,
    ];

    /// The kebab-case tag used in settings and client payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginType::PillMajor => "pill-major",
            PluginType::PillMinor => "pill-minor",
            PluginType::PillStatus => "pill-status",
            PluginType::PillAlt => "pill-alt",
            PluginType::BgValueOnly => "bg-value-only",
            PluginType::Notification => "notification",
            PluginType::Forecast => "forecast",
            PluginType::Drawer => "drawer",
            PluginType::Report => "report",
            PluginType::Fake => "fake",
        }
    }
}

impl fmt::Display for PluginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluginType {
    type Err = PluginSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        PluginType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == tag)
            .ok_or_else(|| PluginSystemError::UnknownPluginType(s.to_string()))
    }
}

/// Error raised from inside a plugin hook body.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct HookError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type returned by hook bodies
pub type HookResult<T> = std::result::Result<T, HookError>;

/// Computes derived properties into the sandbox.
pub trait PropertiesHook: Send + Sync {
    fn set_properties(&self, sbx: &ExtendedSandbox<'_>) -> HookResult<()>;
}

/// Checks whether the plugin wants to raise a notification.
pub trait NotificationsHook: Send + Sync {
    fn check_notifications(&self, sbx: &ExtendedSandbox<'_>) -> HookResult<()>;
}

/// Renders the plugin's on-screen representation.
pub trait VisualisationHook: Send + Sync {
    fn update_visualisation(&self, sbx: &ExtendedSandbox<'_>) -> HookResult<()>;
}

/// Reports the treatment event types the plugin contributes.
///
/// Only a JSON array is treated as a contribution; any other value is
/// ignored by the dispatcher.
pub trait EventTypesHook: Send + Sync {
    fn get_event_types(&self, sbx: &ExtendedSandbox<'_>) -> HookResult<Value>;
}

/// Which hooks a plugin provides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub properties: bool,
    pub notifications: bool,
    pub visualisation: bool,
    pub event_types: bool,
}

impl Capabilities {
    /// Short labels of the hooks that are present, in a fixed order.
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.properties {
            labels.push("properties");
        }
        if self.notifications {
            labels.push("notifications");
        }
        if self.visualisation {
            labels.push("visualisation");
        }
        if self.event_types {
            labels.push("event-types");
        }
        labels
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.labels();
        if labels.is_empty() {
            f.write_str("-")
        } else {
            f.write_str(&labels.join(","))
        }
    }
}

/// Core trait that all plugins must implement
///
/// Every hook accessor defaults to `None`. A plugin opts into a lifecycle
/// call by returning `Some(self)` from the matching accessor after
/// implementing the hook trait.
pub trait Plugin: Send + Sync {
    /// The name of the plugin, used for lookup, enable lists and visibility hints
    fn name(&self) -> &str;

    /// Optional display category
    fn plugin_type(&self) -> Option<PluginType> {
        None
    }

    fn properties_hook(&self) -> Option<&dyn PropertiesHook> {
        None
    }

    fn notifications_hook(&self) -> Option<&dyn NotificationsHook> {
        None
    }

    fn visualisation_hook(&self) -> Option<&dyn VisualisationHook> {
        None
    }

    fn event_types_hook(&self) -> Option<&dyn EventTypesHook> {
        None
    }

    /// Summary of the hooks this plugin provides
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            properties: self.properties_hook().is_some(),
            notifications: self.notifications_hook().is_some(),
            visualisation: self.visualisation_hook().is_some(),
            event_types: self.event_types_hook().is_some(),
        }
    }
}

impl fmt::Debug for dyn Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plugin")
            .field("name", &self.name())
            .field("plugin_type", &self.plugin_type())
            .field("capabilities", &self.capabilities())
            .finish()
    }
}
