use crate::shared::error::{AppError, AppResult};

pub fn non_empty(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("Missing required field: {}", field)));
    }
    Ok(())
}

/// Same check for optional patch fields: absent is fine, blank is not.
pub fn non_empty_opt(field: &str, value: Option<&String>) -> AppResult<()> {
    match value {
        Some(v) => non_empty(field, v),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert!(non_empty("email", "a@b.c").is_ok());
        assert!(matches!(
            non_empty("email", "   "),
            Err(AppError::Validation(msg)) if msg == "Missing required field: email"
        ));
        assert!(non_empty_opt("slug", None).is_ok());
        assert!(non_empty_opt("slug", Some(&String::new())).is_err());
    }
}
