/// This module notifies ServiceNex when an installation is completed and
/// the container starts.
///
/// The whole procedure is one shot: resolve configuration, detect the host
/// application version, assemble the payload, POST it once with a fixed
/// timeout and report the outcome as a boolean. Nothing here is fatal;
/// every failure path degrades to a logged line and `false`.
use crate::config_resolver::config_resolver::{ConfigResolver, Configuration};
use crate::release_info::release_info_loader::{cached_release_info, ReleaseInfo};
use crate::shared::notification_payload::NotificationPayload;
use crate::version_detector::version_detector::detect_version;
use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use reqwest::StatusCode;
use std::env;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_DOWNLOAD_URL: &str = "https://airflow.apache.org/docs/apache-airflow/3.0.2/";
pub const DEFAULT_DOCUMENTATION_URL: &str = "https://airflow.apache.org/docs/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct InstallationNotifier {
    client: reqwest::Client,
}

impl InstallationNotifier {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Notifies ServiceNex about this installation.
    ///
    /// Configuration is always structurally present (the resolver never
    /// fails), so an unset endpoint does not abort the procedure; the
    /// request simply fails at the transport layer and is reported as any
    /// other failure.
    pub async fn notify(&self, sidecar_path: &Path) -> bool {
        let config = ConfigResolver::resolve();
        let version = detect_version();
        let release_info = cached_release_info(sidecar_path);
        let payload = build_payload(&config, &version, release_info);

        // Safe logging (no sensitive data)
        println!("[ServiceNex] Sending installation notification...");

        match self.send(&config, &payload).await {
            Ok(status) if status == StatusCode::OK || status == StatusCode::CREATED => {
                println!(
                    "{}",
                    format!(
                        "[ServiceNex] ✓ Installation notification succeeded (status: {})",
                        status.as_u16()
                    )
                    .green()
                );
                true
            }
            Ok(status) => {
                println!(
                    "{}",
                    format!(
                        "[ServiceNex] ✗ Installation notification failed (status: {})",
                        status.as_u16()
                    )
                    .red()
                );
                false
            }
            Err(_) => {
                println!("{}", "[ServiceNex] ✗ Installation notification error".red());
                false
            }
        }
    }

    async fn send(
        &self,
        config: &Configuration,
        payload: &NotificationPayload,
    ) -> Result<StatusCode> {
        let endpoint = config.endpoint.clone().unwrap_or_default();
        let api_key = config.api_key.clone().unwrap_or_default();

        let response = self
            .client
            .post(&endpoint)
            .header("X-API-Key", api_key)
            .header("Content-Type", "application/json")
            .json(payload)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        Ok(response.status())
    }
}

/// Assembles the flat notification payload from the resolved configuration,
/// detected version and release metadata.
pub fn build_payload(
    config: &Configuration,
    version: &str,
    release_info: &ReleaseInfo,
) -> NotificationPayload {
    let hostname = ConfigResolver::local_hostname();
    let now = Utc::now();
    let deployed_at = now.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let initialized_at = now.format("%Y-%m-%dT%H:%M:%S").to_string();
    let service_code = env::var("SERVICE_CODE").unwrap_or_else(|_| "Airflow".to_string());

    NotificationPayload {
        installation_id: config.installation_id.clone(),
        service_code: service_code.clone(),
        version: version.to_string(),
        hostname: hostname.clone(),
        environment: config.environment.clone(),
        deployed_at,
        release_type: env::var("RELEASE_TYPE").unwrap_or_else(|_| "minor".to_string()),
        download_url: config
            .download_url
            .clone()
            .unwrap_or_else(|| DEFAULT_DOWNLOAD_URL.to_string()),
        documentation_url: env::var("DOCUMENTATION_URL")
            .unwrap_or_else(|_| DEFAULT_DOCUMENTATION_URL.to_string()),
        summary: format!("{service_code} {version} installation detected on {hostname}"),
        details: format!(
            "{service_code} installation completed. {service_code} initialized at {initialized_at}"
        ),
        features: release_info.features.clone(),
        bug_fixes: release_info.bug_fixes.clone(),
        dependencies: release_info.dependencies.clone(),
    }
}

/// Convenience entry point used by the binary.
pub async fn notify_installation(sidecar_path: &Path) -> bool {
    InstallationNotifier::new().notify(sidecar_path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn test_config() -> Configuration {
        Configuration {
            endpoint: Some("https://example.test/hook".to_string()),
            api_key: Some("key".to_string()),
            download_url: None,
            installation_id: "install-42".to_string(),
            environment: "staging".to_string(),
        }
    }

    #[test]
    fn payload_serializes_with_wire_field_names() {
        let payload = build_payload(&test_config(), "3.0.2", &ReleaseInfo::default());
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "installationId",
            "serviceCode",
            "version",
            "hostname",
            "environment",
            "deployedAt",
            "releaseType",
            "downloadUrl",
            "documentationUrl",
            "summary",
            "details",
            "features",
            "bugFixes",
            "dependencies",
        ] {
            assert!(object.contains_key(key), "missing payload field: {key}");
        }
        assert_eq!(object.len(), 14);
    }

    #[test]
    fn deployed_at_is_utc_seconds_precision_with_trailing_z() {
        let payload = build_payload(&test_config(), "3.0.2", &ReleaseInfo::default());
        assert!(
            NaiveDateTime::parse_from_str(&payload.deployed_at, "%Y-%m-%dT%H:%M:%SZ").is_ok(),
            "unexpected deployedAt format: {}",
            payload.deployed_at
        );
    }

    #[test]
    fn summary_embeds_version_and_hostname() {
        let payload = build_payload(&test_config(), "9.9.9", &ReleaseInfo::default());
        assert!(payload.summary.contains("9.9.9"));
        assert!(payload.summary.contains(&payload.hostname));
    }

    #[test]
    fn download_url_falls_back_to_default() {
        let payload = build_payload(&test_config(), "3.0.2", &ReleaseInfo::default());
        assert_eq!(payload.download_url, DEFAULT_DOWNLOAD_URL);

        let mut config = test_config();
        config.download_url = Some("https://downloads.example.test/airflow".to_string());
        let payload = build_payload(&config, "3.0.2", &ReleaseInfo::default());
        assert_eq!(payload.download_url, "https://downloads.example.test/airflow");
    }
}
