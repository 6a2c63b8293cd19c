use std::path::PathBuf;

use bgview_core::{PluginRegistry, Result, Settings};
use clap::{Parser, Subcommand};
use serde_json::Value;

/// bgview: inspect which plugins a deployment enables and shows
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Settings file (.json, .yaml, .yml or .toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Use the server default set instead of the client one
    #[arg(long, global = true)]
    pub server: bool,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered plugins with their enabled state, type and hooks
    List,
    /// Print enabled plugin names, space separated
    Enabled,
    /// Print plugins shown for the configured show hint
    Shown,
    /// Print the extended settings a client receives
    ClientSettings,
    /// Print the event types contributed by enabled plugins
    EventTypes,
}

/// Register the selected default set and run the enablement pass.
fn build_registry(args: &CliArgs, settings: &Settings) -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    if args.server {
        registry.register_server_defaults();
    } else {
        registry.register_client_defaults();
    }
    registry.init(settings);
    registry
}

fn load_settings(args: &CliArgs) -> Result<Settings> {
    match &args.config {
        Some(path) => Ok(Settings::load(path)?),
        None => {
            log::info!("No settings file given, nothing will be enabled");
            Ok(Settings::default())
        }
    }
}

pub fn run(args: &CliArgs) -> Result<()> {
    let settings = load_settings(args)?;
    let registry = build_registry(args, &settings);
    let sbx = settings.sandbox();

    match args.command {
        Commands::List => {
            registry.for_each_plugin(|plugin| {
                let state = if registry.is_enabled(plugin.name()) { "enabled" } else { "disabled" };
                let plugin_type = plugin
                    .plugin_type()
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<20} {:<9} {:<14} {}",
                    plugin.name(),
                    state,
                    plugin_type,
                    plugin.capabilities()
                );
            });
        }
        Commands::Enabled => println!("{}", registry.enabled_plugin_names()),
        Commands::Shown => {
            let shown: Vec<String> = registry
                .shown_plugins(Some(&sbx))
                .iter()
                .map(|p| p.name().to_string())
                .collect();
            println!("{}", shown.join(" "));
        }
        Commands::ClientSettings => {
            let client = registry.extended_client_settings(&settings.extended_settings);
            println!("{:#}", Value::Object(client));
        }
        Commands::EventTypes => {
            let event_types = registry.get_all_event_types(&sbx)?;
            println!("{:#}", Value::Array(event_types));
        }
    }
    Ok(())
}
