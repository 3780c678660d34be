use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

#[derive(Clone, Debug)]
pub struct SmtpSettings {
    pub host: String,
    pub username: String,
    pub password: String,
    pub from: String,
}

#[derive(Clone, Debug)]
pub struct ContactSettings {
    /// Inbox that receives every relayed inquiry.
    pub recipient: String,
    /// Page the relay redirects back to, `?status=` is appended to it.
    pub page: String,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub bind_addr: String,
    pub static_dir: PathBuf,
    pub contact: ContactSettings,
    pub smtp: Option<SmtpSettings>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset so an empty line in .env doesn't slip through
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        // no default: an unset value would route contact mail to the log mailer
        let environment = require("ENVIRONMENT")?;

        let smtp = if environment == "development" {
            None
        } else {
            Some(SmtpSettings {
                host: require("SMTP_HOST")?,
                username: require("SMTP_USERNAME")?,
                password: require("SMTP_PASSWORD")?,
                from: require("SMTP_FROM")?,
            })
        };

        Ok(AppConfig {
            environment,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:3000".to_string()),
            static_dir: PathBuf::from(get("STATIC_DIR").unwrap_or_else(|| "../frontend/dist".to_string())),
            contact: ContactSettings {
                recipient: get("CONTACT_RECIPIENT").unwrap_or_else(|| "studio@studiox.com".to_string()),
                page: get("CONTACT_PAGE").unwrap_or_else(|| "contact.html".to_string()),
            },
            smtp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn environment_must_be_set() {
        let err = AppConfig::from_lookup(|_| None).unwrap_err();
        assert_eq!(err, ConfigError::Missing("ENVIRONMENT"));

        let err = AppConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("ENVIRONMENT"));
    }

    #[test]
    fn development_uses_defaults_without_smtp() {
        let config = AppConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "development")])).unwrap();
        assert_eq!(config.environment, "development");
        assert!(config.smtp.is_none());
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.contact.recipient, "studio@studiox.com");
        assert_eq!(config.contact.page, "contact.html");
    }

    #[test]
    fn production_requires_smtp_settings() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "relay"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("SMTP_PASSWORD"));
    }

    #[test]
    fn blank_values_are_treated_as_missing() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("SMTP_HOST", "   "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("SMTP_HOST"));
    }

    #[test]
    fn production_reads_all_settings() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "relay"),
            ("SMTP_PASSWORD", "secret"),
            ("SMTP_FROM", "Studio X <noreply@studiox.com>"),
            ("CONTACT_RECIPIENT", "hello@studiox.com"),
            ("BIND_ADDR", "0.0.0.0:8080"),
        ]))
        .unwrap();
        assert_eq!(config.environment, "production");
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.contact.recipient, "hello@studiox.com");
        let smtp = config.smtp.unwrap();
        assert_eq!(smtp.host, "smtp.example.com");
        assert_eq!(smtp.from, "Studio X <noreply@studiox.com>");
    }
}
