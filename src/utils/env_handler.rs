use std::env;

/// Reads an environment variable, treating unset and non-unicode values alike.
pub fn get_env_var(s: &str) -> Option<String> {
    env::var_os(s).and_then(|v| v.into_string().ok())
}
