//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::config::BackendKind;
use crate::domain::notification::NotificationDescriptor;
use crate::infrastructure::config::CONFIG_PATH_ENV;

/// native-notify - platform notifications with a graceful fallback
#[derive(Parser, Debug)]
#[command(name = "native-notify")]
#[command(version)]
#[command(about = "Query and drive the platform notification backend")]
#[command(long_about = None)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of the XDG location
    #[arg(long, value_name = "PATH", global = true, env = CONFIG_PATH_ENV)]
    pub config: Option<PathBuf>,

    /// Notification backend to use
    #[arg(long, value_name = "KIND", global = true)]
    pub backend: Option<BackendArg>,

    /// Print diagnostic messages to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report whether native notifications are available
    Available,
    /// Ask the user for notification permission
    RequestPermission,
    /// Show the current notification permission status
    PermissionStatus,
    /// Show a notification
    Show(ShowArgs),
    /// Remove a notification by id
    Remove {
        /// Notification id
        id: Option<String>,
    },
    /// Remove all notifications posted by this application
    RemoveAll,
    /// Check availability and permission, then show a notification
    Deliver(ShowArgs),
    /// Show platform and backend information
    Info,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Notification content flags shared by `show` and `deliver`
#[derive(Args, Debug, Clone, Default)]
pub struct ShowArgs {
    /// Notification id
    #[arg(long)]
    pub id: Option<String>,

    /// Notification title
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Notification subtitle
    #[arg(short = 's', long)]
    pub subtitle: Option<String>,

    /// Notification body
    #[arg(short = 'b', long)]
    pub body: Option<String>,

    /// Sound name to play
    #[arg(long)]
    pub sound: Option<String>,

    /// Suppress the notification sound
    #[arg(long)]
    pub silent: bool,

    /// Full descriptor as a JSON object (flags override its fields)
    #[arg(long, value_name = "JSON")]
    pub descriptor: Option<String>,
}

impl ShowArgs {
    /// Descriptor built from the individual flags only
    pub fn flag_descriptor(&self) -> NotificationDescriptor {
        NotificationDescriptor {
            id: self.id.clone().map(Into::into),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            body: self.body.clone(),
            sound: self.sound.clone(),
            silent: self.silent.then_some(true),
            ..Default::default()
        }
    }
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Auto,
    Unsupported,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Auto => BackendKind::Auto,
            BackendArg::Unsupported => BackendKind::Unsupported,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["app_name", "backend", "json"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
