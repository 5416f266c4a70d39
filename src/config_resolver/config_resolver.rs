use std::env;
use std::fs;
use std::path::Path;

/// Resolved ServiceNex configuration.
///
/// Constructed fresh on every invocation from the process environment and
/// mounted secret files; immutable after construction. Missing values stay
/// `None` and are handled by the caller, so resolution itself never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub download_url: Option<String>,
    pub installation_id: String,
    pub environment: String,
}

pub struct ConfigResolver;

impl ConfigResolver {
    /// Resolves the full configuration.
    ///
    /// `installation_id` defaults to the local hostname and `environment`
    /// to `production`. An unset endpoint is left `None`; the send step
    /// fails at the transport layer in that case, not here.
    pub fn resolve() -> Configuration {
        Configuration {
            endpoint: env::var("SERVICENEX_ENDPOINT").ok(),
            api_key: Self::read_secret("SERVICENEX_API_KEY", "SERVICENEX_API_KEY_FILE"),
            download_url: Self::read_secret("DOWNLOAD_URL", "DOWNLOAD_URL_FILE"),
            installation_id: env::var("INSTALLATION_ID")
                .unwrap_or_else(|_| Self::local_hostname()),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()),
        }
    }

    /// Reads a secret-like value.
    ///
    /// The direct environment variable wins when it is set and non-empty;
    /// otherwise a second variable names a file path whose trimmed contents
    /// are used. This dual-path lookup supports both inline and
    /// mounted-secret deployment styles.
    pub fn read_secret(var: &str, file_var: &str) -> Option<String> {
        if let Ok(value) = env::var(var) {
            if !value.is_empty() {
                return Some(value);
            }
        }

        let path = env::var(file_var).ok()?;
        if path.is_empty() || !Path::new(&path).is_file() {
            return None;
        }

        fs::read_to_string(&path)
            .ok()
            .map(|contents| contents.trim().to_string())
    }

    pub fn local_hostname() -> String {
        hostname::get()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|_| "unknown".to_string())
    }
}
