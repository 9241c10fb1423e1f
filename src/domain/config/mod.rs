//! Configuration domain module

mod app_config;
mod backend;

pub use app_config::AppConfig;
pub use backend::BackendKind;
