#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::sink::DEFAULT_BLOB_PATH;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_blob_path_template, validate_name_template, validate_path, Validate,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionSettings {
    #[serde(default)]
    pub greeting: GreetingSettings,
    #[serde(default)]
    pub sink: SinkSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GreetingSettings {
    /// 未設定時使用 "Hello, {name}"
    pub template: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinkSettings {
    #[serde(default = "default_write_blobs")]
    pub write_blobs: bool,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_blob_path")]
    pub blob_path: String,
}

fn default_write_blobs() -> bool {
    true
}

fn default_output_path() -> String {
    "./output".to_string()
}

fn default_blob_path() -> String {
    DEFAULT_BLOB_PATH.to_string()
}

impl Default for SinkSettings {
    fn default() -> Self {
        Self {
            write_blobs: default_write_blobs(),
            output_path: default_output_path(),
            blob_path: default_blob_path(),
        }
    }
}

impl ConfigProvider for FunctionSettings {
    fn greeting_template(&self) -> Option<&str> {
        self.greeting.template.as_deref()
    }

    fn write_blobs(&self) -> bool {
        self.sink.write_blobs
    }

    fn output_path(&self) -> &str {
        &self.sink.output_path
    }

    fn blob_path_template(&self) -> &str {
        &self.sink.blob_path
    }
}

impl Validate for FunctionSettings {
    fn validate(&self) -> Result<()> {
        if let Some(template) = &self.greeting.template {
            validate_name_template("greeting.template", template)?;
        }

        if self.sink.write_blobs {
            validate_path("sink.output_path", &self.sink.output_path)?;
            validate_blob_path_template("sink.blob_path", &self.sink.blob_path)?;
        }

        tracing::debug!("✅ Function settings validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = FunctionSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.blob_path_template(), "eventhub-output/{rand-guid}.txt");
        assert!(settings.write_blobs());
        assert!(settings.greeting_template().is_none());
    }

    #[test]
    fn test_blob_path_ignored_when_blobs_disabled() {
        let mut settings = FunctionSettings::default();
        settings.sink.blob_path = "fixed.txt".to_string();
        assert!(settings.validate().is_err());

        settings.sink.write_blobs = false;
        assert!(settings.validate().is_ok());
    }
}
