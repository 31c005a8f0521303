use crate::utils::error::{FunctionError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 每筆訊息都換新值的佔位符；`{index}`、`{timestamp}` 跨批次會重複
pub const UNIQUE_KEY_PLACEHOLDER: &str = "{rand-guid}";

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FunctionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FunctionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_blob_path_template(field_name: &str, template: &str) -> Result<()> {
    validate_path(field_name, template)?;

    if template.starts_with('/') || template.starts_with('\\') {
        return Err(FunctionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: "Blob path must be relative to the output location".to_string(),
        });
    }

    if template.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(FunctionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: "Blob path cannot contain '..' segments".to_string(),
        });
    }

    if !template.contains(UNIQUE_KEY_PLACEHOLDER) {
        return Err(FunctionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: format!("Blob path must contain {}", UNIQUE_KEY_PLACEHOLDER),
        });
    }

    Ok(())
}

pub fn validate_name_template(field_name: &str, template: &str) -> Result<()> {
    if !template.contains("{name}") {
        return Err(FunctionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: "Greeting template must contain {name}".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_blob_path_template() {
        assert!(validate_blob_path_template("blob_path", "eventhub-output/{rand-guid}.txt").is_ok());
        assert!(validate_blob_path_template("blob_path", "batch/{timestamp}-{index}-{rand-guid}.txt").is_ok());
        // 只靠 index / timestamp 的鍵在下一批會重複
        assert!(validate_blob_path_template("blob_path", "batch/{index}.txt").is_err());
        assert!(validate_blob_path_template("blob_path", "batch/{timestamp}-{index}.txt").is_err());
        assert!(validate_blob_path_template("blob_path", "fixed.txt").is_err());
        assert!(validate_blob_path_template("blob_path", "/abs/{rand-guid}.txt").is_err());
        assert!(validate_blob_path_template("blob_path", "../{rand-guid}.txt").is_err());
    }

    #[test]
    fn test_validate_name_template() {
        assert!(validate_name_template("greeting.template", "Hi {name}!").is_ok());
        assert!(validate_name_template("greeting.template", "Hi there").is_err());
    }
}
