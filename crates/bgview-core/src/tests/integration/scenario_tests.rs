use std::io::Write;
use std::sync::Arc;

use serde_json::json;
use tempfile::tempdir;

use crate::config::Settings;
use crate::plugin_system::builtin::DescriptorFactory;
use crate::plugin_system::defaults::{DefaultPlugins, PluginFactory};
use crate::plugin_system::error::HookKind;
use crate::plugin_system::registry::PluginRegistry;
use crate::plugin_system::traits::{Plugin, PluginType};
use crate::sandbox::{BasicSandbox, Sandbox};
use crate::tests::integration::common::{names, CallLog, MockPlugin};

#[test]
fn test_allow_list_and_hint_scenario() {
    // A is special (rawbg), B and C are not
    let mut registry = PluginRegistry::new();
    let b = MockPlugin::new("careportal").typed(PluginType::Drawer).arc();
    let b_type = b.plugin_type().unwrap();
    registry.register(vec![
        MockPlugin::new("rawbg").typed(PluginType::PillMinor).arc(),
        b,
        MockPlugin::new("iob").typed(PluginType::PillMajor).arc(),
    ]);

    registry.init(&Settings::with_enable(["rawbg", "iob"]));
    let sbx = BasicSandbox::new().with_show_plugins(["iob"]);

    assert_eq!(names(registry.enabled_plugins().as_slice()), vec!["rawbg", "iob"]);
    assert_eq!(names(&registry.shown_plugins(Some(&sbx))), vec!["rawbg", "iob"]);
    assert!(!registry.has_shown_type(b_type, Some(&sbx)));
}

#[test]
fn test_client_deployment_from_settings_file() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("settings.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(
        br#"{
            "enable": "careportal iob cob rawbg delta direction timeago pump",
            "showPlugins": "iob pump",
            "extendedSettings": {
                "pump": { "fields": "reservoir" },
                "devicestatus": { "advanced": true }
            }
        }"#,
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    let mut registry = PluginRegistry::new();
    registry.register_client_defaults();
    registry.init(&settings);

    assert_eq!(
        registry.enabled_plugin_names(),
        "rawbg delta direction timeago iob cob careportal pump"
    );

    let sbx = settings.sandbox();
    assert_eq!(
        names(&registry.shown_plugins(Some(&sbx))),
        vec!["rawbg", "delta", "direction", "timeago", "iob", "pump"]
    );
    assert!(registry.has_shown_type(PluginType::PillMajor, Some(&sbx)));
    assert!(!registry.has_shown_type(PluginType::Drawer, Some(&sbx)));

    let client = registry.extended_client_settings(&settings.extended_settings);
    assert_eq!(client["pump"], json!({ "fields": "reservoir" }));
    assert_eq!(client["devicestatus"], json!({ "advanced": true }));
}

#[test]
fn test_server_deployment_lifecycle_with_real_hooks() {
    let log = CallLog::new();
    let factory = {
        let log = log.clone();
        move |name: &str| -> Option<Arc<dyn Plugin>> {
            match name {
                "ar2" => Some(
                    MockPlugin::new("ar2")
                        .typed(PluginType::Forecast)
                        .with_hooks(&[HookKind::SetProperties, HookKind::CheckNotifications])
                        .log(&log)
                        .arc(),
                ),
                "simplealarms" => Some(
                    MockPlugin::new("simplealarms")
                        .typed(PluginType::Notification)
                        .with_hooks(&[HookKind::CheckNotifications])
                        .log(&log)
                        .arc(),
                ),
                "careportal" => Some(
                    MockPlugin::new("careportal")
                        .typed(PluginType::Drawer)
                        .event_types(json!([{ "val": "BG Check" }]))
                        .log(&log)
                        .arc(),
                ),
                "treatmentnotify" => Some(
                    MockPlugin::new("treatmentnotify")
                        .typed(PluginType::Notification)
                        .with_hooks(&[HookKind::CheckNotifications])
                        .failing(HookKind::CheckNotifications)
                        .log(&log)
                        .arc(),
                ),
                other => DescriptorFactory.create(other),
            }
        }
    };

    let mut registry = PluginRegistry::with_defaults(DefaultPlugins::build(&factory).unwrap());
    registry.register_server_defaults();
    registry.init(&Settings::with_enable(["ar2", "simplealarms", "delta"]));

    let sbx = BasicSandbox::new();
    let sbx: &dyn Sandbox = &sbx;
    registry.set_properties(sbx).unwrap();
    registry.check_notifications(sbx).unwrap();
    // careportal is not a server default
    assert!(registry.get_all_event_types(sbx).unwrap().is_empty());

    assert_eq!(log.plugins_for(HookKind::SetProperties), vec!["ar2"]);
    assert_eq!(
        log.plugins_for(HookKind::CheckNotifications),
        vec!["ar2", "simplealarms"]
    );

    // enabling treatmentnotify makes the notification pass fail at that plugin
    registry.init(&Settings::with_enable(["ar2", "simplealarms", "treatmentnotify"]));
    let err = registry.check_notifications(sbx).unwrap_err();
    assert_eq!(err.plugin_id(), Some("treatmentnotify"));
}

#[test]
fn test_settings_reload_recomputes_visibility() {
    let mut registry = PluginRegistry::new();
    registry.register_client_defaults();

    let sbx = BasicSandbox::new().with_show_plugins(["iob", "cob"]);
    registry.init(&Settings::with_enable(["iob", "cob", "delta"]));
    assert_eq!(names(&registry.shown_plugins(Some(&sbx))), vec!["delta", "iob", "cob"]);

    registry.init(&Settings::with_enable(["cob"]));
    assert_eq!(names(&registry.shown_plugins(Some(&sbx))), vec!["cob"]);
}
