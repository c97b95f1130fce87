use crate::utils::error::{MenuError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Maximum length accepted for a user-entered custom label. Longer values
/// are rejected at save time rather than truncated.
pub const MAX_LABEL_LENGTH: usize = 200;

pub fn validate_slug(field_name: &str, slug: &str) -> Result<()> {
    if slug.trim().is_empty() {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: slug.to_string(),
            reason: "Identifier cannot be empty or whitespace-only".to_string(),
        });
    }

    if slug.contains('|') {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: slug.to_string(),
            reason: "Identifier cannot contain '|' (reserved pair separator)".to_string(),
        });
    }

    Ok(())
}

pub fn validate_label(field_name: &str, label: &str) -> Result<()> {
    if label.len() > MAX_LABEL_LENGTH {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}…", label.chars().take(32).collect::<String>()),
            reason: format!("Label exceeds {} characters", MAX_LABEL_LENGTH),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
