//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(var: &str, value: &str) {
        // SAFETY: each test uses its own variable name.
        unsafe { std::env::set_var(var, value) };
    }

    fn unset(var: &str) {
        // SAFETY: each test uses its own variable name.
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "QUOTEBOOK_TEST_ENV_PARSE_VALID";
        set(var_name, "120");
        let result: u64 = env_parse_with_default(var_name, 60);
        assert_eq!(result, 120);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "QUOTEBOOK_TEST_ENV_PARSE_INVALID";
        set(var_name, "hourly");
        let result: u64 = env_parse_with_default(var_name, 60);
        assert_eq!(result, 60);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "QUOTEBOOK_TEST_ENV_PARSE_MISSING";
        unset(var_name);
        let result: usize = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_env_parse_empty_value() {
        let var_name = "QUOTEBOOK_TEST_ENV_PARSE_EMPTY";
        set(var_name, "");
        let result: usize = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
        unset(var_name);
    }
}
