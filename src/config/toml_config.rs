use crate::config::FunctionSettings;
use crate::utils::error::{FunctionError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use std::path::Path;

impl FunctionSettings {
    /// 從 TOML 檔案載入配置；不驗證，命令列覆蓋後再呼叫 `validate`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FunctionError::IoError)?;
        Self::parse_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，並完成驗證
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings = Self::parse_toml_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// 只解析與替換環境變數
    pub fn parse_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FunctionError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// 替換環境變數 (例如 ${OUTPUT_DIR})
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| FunctionError::ConfigError {
        message: format!("Invalid regex pattern: {}", e),
    })?;

    let mut result = String::with_capacity(content.len());
    let mut last = 0;

    for caps in re.captures_iter(content) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let value = std::env::var(name.as_str()).map_err(|_| FunctionError::MissingConfigError {
            field: format!("environment variable {}", name.as_str()),
        })?;

        result.push_str(&content[last..whole.start()]);
        result.push_str(&value);
        last = whole.end();
    }

    result.push_str(&content[last..]);
    Ok(result)
}
