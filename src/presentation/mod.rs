pub mod config;

pub use config::{DeploymentStage, Settings, SettingsError};
