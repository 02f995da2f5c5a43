use anyhow::{Context, Result};

use crate::errors::config_context;

pub const EMAIL_VAR: &str = "UTR_EMAIL";
pub const PASSWORD_VAR: &str = "UTR_PASSWORD";

/// Account used to authenticate against the ratings directory
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Read credentials from `UTR_EMAIL` / `UTR_PASSWORD`
    pub fn from_env() -> Result<Self> {
        let email = read_var(EMAIL_VAR)?;
        let password = read_var(PASSWORD_VAR)?;
        Ok(Self::new(email, password))
    }
}

// Keep the password out of debug logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

fn read_var(name: &str) -> Result<String> {
    let value = std::env::var(name).with_context(|| config_context(name))?;
    if value.trim().is_empty() {
        anyhow::bail!("{} is set but empty", name);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password() {
        let credentials = Credentials::new("me@example.com", "hunter2");
        let printed = format!("{:?}", credentials);
        assert!(printed.contains("me@example.com"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_unset_variable() {
        let name = format!("TEAM_RATINGS_UNSET_{}", std::process::id());
        let err = read_var(&name).unwrap_err();
        assert_eq!(err.to_string(), config_context(&name));
    }

    #[test]
    fn test_blank_variable() {
        let name = format!("TEAM_RATINGS_BLANK_{}", std::process::id());
        unsafe { std::env::set_var(&name, "   ") };

        let err = read_var(&name).unwrap_err();
        assert!(err.to_string().contains("empty"));

        unsafe { std::env::remove_var(&name) };
    }

    #[test]
    fn test_set_variable() {
        let name = format!("TEAM_RATINGS_SET_{}", std::process::id());
        unsafe { std::env::set_var(&name, "me@example.com") };

        assert_eq!(read_var(&name).unwrap(), "me@example.com");

        unsafe { std::env::remove_var(&name) };
    }
}
