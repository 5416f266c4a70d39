/// This module provides a prioritized version lookup for the host
/// application the notifier is bundled with.
///
/// Providers are probed in order and the first one that produces a value
/// wins. The chain ends with a hardcoded default, so detection always
/// returns a string and never fails.
use std::env;
use std::process::Command;

pub const DEFAULT_VERSION: &str = "3.0.2";

pub trait VersionProvider {
    fn provide(&self) -> Option<String>;
}

/// Probes the host runtime itself by invoking `airflow version` and taking
/// the first stdout line. A missing binary, non-zero exit or empty output
/// all count as "capability unavailable".
pub struct HostRuntimeProvider;

impl VersionProvider for HostRuntimeProvider {
    fn provide(&self) -> Option<String> {
        let output = Command::new("airflow").arg("version").output().ok()?;
        if !output.status.success() {
            return None;
        }
        let version = String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()?
            .trim()
            .to_string();
        if version.is_empty() { None } else { Some(version) }
    }
}

/// Falls back to the `AIRFLOW_VERSION` environment variable.
pub struct EnvVersionProvider;

impl VersionProvider for EnvVersionProvider {
    fn provide(&self) -> Option<String> {
        env::var("AIRFLOW_VERSION").ok()
    }
}

/// Last resort: the hardcoded default.
pub struct DefaultVersionProvider;

impl VersionProvider for DefaultVersionProvider {
    fn provide(&self) -> Option<String> {
        Some(DEFAULT_VERSION.to_string())
    }
}

/// Walks the default provider chain: host runtime probe, environment
/// variable, hardcoded default.
pub fn detect_version() -> String {
    let providers: [&dyn VersionProvider; 3] = [
        &HostRuntimeProvider,
        &EnvVersionProvider,
        &DefaultVersionProvider,
    ];
    detect_version_with(&providers).unwrap_or_else(|| DEFAULT_VERSION.to_string())
}

/// Probes an explicit provider chain, first hit wins.
pub fn detect_version_with(providers: &[&dyn VersionProvider]) -> Option<String> {
    providers.iter().find_map(|provider| provider.provide())
}
