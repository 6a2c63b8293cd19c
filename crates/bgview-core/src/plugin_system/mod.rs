//! # bgview Plugin System
//!
//! The registry and dispatch engine behind the monitoring UI and server.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`traits`]**: the [`Plugin`] capability contract and its optional hook
//!   traits.
//! - **[`registry`]**: the ordered catalog ([`PluginRegistry`]), registration
//!   and lookup.
//! - **[`enablement`]**: per-configuration enabled set ([`EnabledSet`]).
//! - **[`visibility`]**: the shown subset for a sandbox, including the
//!   always-shown [`SPECIAL_PLUGINS`].
//! - **[`dispatch`]**: capability-checked lifecycle fan-out.
//! - **[`defaults`]**: client and server default sets ([`DefaultPlugins`]).
//! - **[`builtin`]**: hook-less descriptor plugins for the default names.
//! - **[`settings`]**: client-scoped projection of extended settings.
//! - **[`error`]**: [`PluginSystemError`](error::PluginSystemError).
//!
//! Registration order is dispatch order everywhere: the enabled set, the
//! shown set and aggregated results all follow the catalog.
pub mod builtin;
pub mod defaults;
pub mod dispatch;
pub mod enablement;
pub mod error;
pub mod registry;
pub mod settings;
pub mod traits;
pub mod visibility;

pub use defaults::{DefaultPlugins, PluginFactory, CLIENT_DEFAULT_PLUGINS, SERVER_DEFAULT_PLUGINS};
pub use enablement::EnabledSet;
pub use error::{HookKind, PluginSystemError};
pub use registry::PluginRegistry;
pub use traits::{
    Capabilities, EventTypesHook, HookError, HookResult, NotificationsHook, Plugin, PluginType,
    PropertiesHook, VisualisationHook,
};
pub use visibility::SPECIAL_PLUGINS;
