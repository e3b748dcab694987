//! Client configuration for the products API.

use std::env::{self, VarError};

use url::Url;

use crate::error::ConfigError;

/// Products collection endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.oluwasetemi.dev/products";

/// Environment variable that overrides [`DEFAULT_ENDPOINT`].
pub const ENDPOINT_ENV_VAR: &str = "PRODUCT_API_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub endpoint: Url,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT: invalid URL"),
        }
    }
}

impl ClientConfig {
    /// Builds a config pointing at `endpoint`.
    pub fn with_endpoint(endpoint: &str) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            value: endpoint.to_string(),
            source,
        })?;
        Ok(Self { endpoint })
    }

    /// Reads `PRODUCT_API_URL`, falling back to the default endpoint when
    /// unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(ENDPOINT_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => Self::with_endpoint(value.trim()),
            Ok(_) | Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(value)) => Err(ConfigError::NotUnicode {
                var: ENDPOINT_ENV_VAR,
                value,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Sets or clears `PRODUCT_API_URL` for one test and restores it on drop.
    struct EndpointVar(Option<std::ffi::OsString>);

    impl EndpointVar {
        fn set(value: Option<&std::ffi::OsStr>) -> Self {
            let previous = env::var_os(ENDPOINT_ENV_VAR);
            match value {
                Some(value) => env::set_var(ENDPOINT_ENV_VAR, value),
                None => env::remove_var(ENDPOINT_ENV_VAR),
            }
            Self(previous)
        }
    }

    impl Drop for EndpointVar {
        fn drop(&mut self) {
            match self.0.take() {
                Some(previous) => env::set_var(ENDPOINT_ENV_VAR, previous),
                None => env::remove_var(ENDPOINT_ENV_VAR),
            }
        }
    }

    #[test]
    fn test_default_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_with_endpoint_rejects_garbage() {
        let err = ClientConfig::with_endpoint("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { ref value, .. } if value == "not a url"));
    }

    #[test]
    fn test_with_endpoint_accepts_local_server() {
        let config = ClientConfig::with_endpoint("http://127.0.0.1:8080/products").unwrap();
        assert_eq!(config.endpoint.port(), Some(8080));
        assert_eq!(config.endpoint.path(), "/products");
    }

    #[test]
    #[serial]
    fn test_from_env_unset_uses_default() {
        let _var = EndpointVar::set(None);
        assert_eq!(ClientConfig::from_env().unwrap(), ClientConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_blank_uses_default() {
        let _var = EndpointVar::set(Some("   ".as_ref()));
        assert_eq!(ClientConfig::from_env().unwrap(), ClientConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_override() {
        let _var = EndpointVar::set(Some(" http://localhost:3000/products ".as_ref()));
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.endpoint.as_str(), "http://localhost:3000/products");
    }

    #[test]
    #[serial]
    fn test_from_env_garbage_is_an_error() {
        let _var = EndpointVar::set(Some("not a url".as_ref()));
        assert!(matches!(
            ClientConfig::from_env(),
            Err(ConfigError::InvalidEndpoint { ref value, .. }) if value == "not a url"
        ));
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_from_env_non_utf8_is_an_error() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![b'h', b't', 0xff, 0xfe]);
        let _var = EndpointVar::set(Some(raw.as_os_str()));
        assert!(matches!(
            ClientConfig::from_env(),
            Err(ConfigError::NotUnicode { var: ENDPOINT_ENV_VAR, .. })
        ));
    }
}
