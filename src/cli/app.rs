//! Main app runner

use std::env;
use std::process::ExitCode;

use serde::Serialize;

use crate::application::ports::{ConfigStore, NotificationBackend};
use crate::application::DeliverNotificationUseCase;
use crate::domain::config::{AppConfig, BackendKind};
use crate::domain::error::ConfigError;
use crate::domain::notification::{NotificationDescriptor, NotificationId};
use crate::infrastructure::{create_backend, platform_name, XdgConfigStore};

use super::args::{Cli, Commands, ShowArgs};
use super::config_cmd::handle_config_command;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Environment variable overriding the configured app name
pub const APP_NAME_ENV: &str = "NATIVE_NOTIFY_APP_NAME";

/// Settings resolved from defaults, config file, environment, and flags
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub app_name: String,
    pub backend: BackendKind,
    pub json: bool,
}

impl RunOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            app_name: config.app_name_or_default().to_string(),
            backend: config.backend_or_default(),
            json: config.json_or_default(),
        }
    }
}

/// Platform and backend summary printed by `info`
#[derive(Debug, Clone, Serialize)]
pub struct InfoReport {
    pub app_name: String,
    pub version: &'static str,
    pub platform: &'static str,
    pub backend: BackendKind,
    pub available: bool,
    pub permission: String,
}

/// Parse arguments into a config, pick a backend, and run the command
pub async fn run(cli: Cli) -> ExitCode {
    let presenter = Presenter::with_verbose(cli.verbose);
    let store = XdgConfigStore::with_optional_path(cli.config.clone());

    let cli_config = AppConfig {
        app_name: None, // app name comes from env/file only
        backend: cli.backend.map(|b| BackendKind::from(b).to_string()),
        json: cli.json.then_some(true),
    };
    let config = load_merged_config(&store, cli_config, &presenter).await;
    let options = RunOptions::from_config(&config);

    let backend = create_backend(options.backend);
    presenter.debug(&format!(
        "platform={} backend={} available={}",
        platform_name(),
        options.backend,
        backend.is_available()
    ));

    match execute(cli.command, &backend, &store, &options, &presenter).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Merge: defaults < file < env < cli
pub async fn load_merged_config<S: ConfigStore>(
    store: &S,
    cli_config: AppConfig,
    presenter: &Presenter,
) -> AppConfig {
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.warn(&format!("Ignoring config file: {}", e));
            AppConfig::empty()
        }
    };

    let env_config = AppConfig {
        app_name: env::var(APP_NAME_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Run a single command against `backend`.
///
/// Notification commands never fail; only config management can.
pub async fn execute<B, S>(
    command: Commands,
    backend: &B,
    store: &S,
    options: &RunOptions,
    presenter: &Presenter,
) -> Result<(), ConfigError>
where
    B: NotificationBackend,
    S: ConfigStore,
{
    match command {
        Commands::Available => {
            let available = backend.is_available();
            print_value(presenter, options.json, &available, &available.to_string());
        }
        Commands::RequestPermission => {
            let granted = backend.request_permission().await;
            print_value(presenter, options.json, &granted, &granted.to_string());
        }
        Commands::PermissionStatus => {
            let status = backend.permission_status().await;
            print_value(presenter, options.json, &status, status.as_str());
        }
        Commands::Show(args) => {
            let descriptor = build_descriptor(&args, presenter);
            let result = backend.show_notification(&descriptor).await;
            if options.json {
                presenter.output_json(&result);
            } else {
                presenter.output(&format!("success: {}", result.success));
                if let Some(error) = result.error_message() {
                    presenter.output(&format!("error: {}", error));
                }
            }
        }
        Commands::Remove { id } => {
            let id = id.map(NotificationId::from);
            presenter.debug(&format!(
                "removing notification {}",
                id.as_ref().map(NotificationId::as_str).unwrap_or("(none)")
            ));
            backend.remove_notification(id.as_ref());
        }
        Commands::RemoveAll => {
            presenter.debug("removing all notifications");
            backend.remove_all_notifications();
        }
        Commands::Deliver(args) => {
            let descriptor = build_descriptor(&args, presenter);
            let outcome = DeliverNotificationUseCase::new(backend)
                .execute(&descriptor)
                .await;
            print_value(presenter, options.json, &outcome, &outcome.describe());
        }
        Commands::Info => {
            let report = InfoReport {
                app_name: options.app_name.clone(),
                version: env!("CARGO_PKG_VERSION"),
                platform: platform_name(),
                backend: options.backend,
                available: backend.is_available(),
                permission: backend.permission_status().await.to_string(),
            };
            if options.json {
                presenter.output_json(&report);
            } else {
                presenter.key_value("app_name", &report.app_name);
                presenter.key_value("version", report.version);
                presenter.key_value("platform", report.platform);
                presenter.key_value("backend", report.backend.as_str());
                presenter.key_value("available", &report.available.to_string());
                presenter.key_value("permission", &report.permission);
            }
        }
        Commands::Config { action } => handle_config_command(action, store, presenter).await?,
    }

    Ok(())
}

fn print_value<T: Serialize>(presenter: &Presenter, json: bool, value: &T, text: &str) {
    if json {
        presenter.output_json(value);
    } else {
        presenter.output(text);
    }
}

/// Combine `--descriptor` JSON with the individual flags.
///
/// A descriptor that fails to parse is dropped with a warning; the flags
/// still apply.
pub fn build_descriptor(args: &ShowArgs, presenter: &Presenter) -> NotificationDescriptor {
    let base = match args.descriptor.as_deref() {
        Some(raw) => NotificationDescriptor::from_json(raw).unwrap_or_else(|e| {
            presenter.warn(&format!("Ignoring malformed descriptor: {}", e));
            NotificationDescriptor::new()
        }),
        None => NotificationDescriptor::new(),
    };
    base.merge(args.flag_descriptor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::UnsupportedPlatformNotifier;

    #[test]
    fn descriptor_flags_override_json() {
        let args = ShowArgs {
            title: Some("flag".to_string()),
            descriptor: Some(r#"{"title":"json","body":"from json"}"#.to_string()),
            ..Default::default()
        };
        let descriptor = build_descriptor(&args, &Presenter::new());
        assert_eq!(descriptor.title.as_deref(), Some("flag"));
        assert_eq!(descriptor.body.as_deref(), Some("from json"));
    }

    #[test]
    fn malformed_descriptor_falls_back_to_flags() {
        let args = ShowArgs {
            body: Some("still here".to_string()),
            descriptor: Some("{oops".to_string()),
            ..Default::default()
        };
        let descriptor = build_descriptor(&args, &Presenter::new());
        assert_eq!(descriptor.body.as_deref(), Some("still here"));
        assert!(descriptor.title.is_none());
    }

    #[test]
    fn run_options_from_defaults() {
        let options = RunOptions::from_config(&AppConfig::defaults());
        assert_eq!(options.app_name, "native-notify");
        assert_eq!(options.backend, BackendKind::Auto);
        assert!(!options.json);
    }

    #[tokio::test]
    async fn cli_flags_win_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        store
            .save(&AppConfig {
                backend: Some("auto".to_string()),
                json: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();

        let cli_config = AppConfig {
            backend: Some("unsupported".to_string()),
            json: Some(true),
            ..Default::default()
        };
        let config = load_merged_config(&store, cli_config, &Presenter::new()).await;
        assert_eq!(config.backend_or_default(), BackendKind::Unsupported);
        assert!(config.json_or_default());
    }

    #[tokio::test]
    async fn broken_config_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "backend = [").unwrap();
        let store = XdgConfigStore::with_path(path);

        let config = load_merged_config(&store, AppConfig::empty(), &Presenter::new()).await;
        assert_eq!(config.backend_or_default(), BackendKind::Auto);
    }

    #[tokio::test]
    async fn notification_commands_always_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let backend = UnsupportedPlatformNotifier::new();
        let options = RunOptions::from_config(&AppConfig::defaults());
        let presenter = Presenter::new();

        let commands = vec![
            Commands::Available,
            Commands::RequestPermission,
            Commands::PermissionStatus,
            Commands::Show(ShowArgs::default()),
            Commands::Remove { id: None },
            Commands::RemoveAll,
            Commands::Deliver(ShowArgs::default()),
            Commands::Info,
        ];
        for command in commands {
            let result = execute(command, &backend, &store, &options, &presenter).await;
            assert!(result.is_ok());
        }
    }
}
