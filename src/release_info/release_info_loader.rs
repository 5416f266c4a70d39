use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Static release metadata describing the release being announced.
///
/// Read-only for the lifetime of the process. Any key missing from the
/// sidecar defaults to an empty sequence; entries are opaque JSON values.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseInfo {
    #[serde(default)]
    pub features: Vec<serde_json::Value>,
    #[serde(default)]
    pub bug_fixes: Vec<serde_json::Value>,
    #[serde(default)]
    pub dependencies: Vec<serde_json::Value>,
}

static RELEASE_INFO: OnceCell<ReleaseInfo> = OnceCell::new();

/// Default sidecar location: release_info.json next to the executable.
pub fn default_sidecar_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("release_info.json")))
        .unwrap_or_else(|| PathBuf::from("release_info.json"))
}

/// Loads release metadata from the sidecar file.
///
/// A missing file and a file that fails to parse both degrade to the
/// all-empty default with a diagnostic line; loading never fails.
pub fn load_release_info(path: &Path) -> ReleaseInfo {
    if !path.exists() {
        println!("[ServiceNex] release_info.json not found {}", path.display());
        return ReleaseInfo::default();
    }

    match read_sidecar(path) {
        Ok(info) => info,
        Err(error) => {
            println!("[ServiceNex] Error reading release_info.json: {error:#}");
            ReleaseInfo::default()
        }
    }
}

fn read_sidecar(path: &Path) -> Result<ReleaseInfo> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read release info file: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to deserialize release info file: {}", path.display()))
}

/// Memoized accessor: the sidecar is read once per process and the result
/// cached for the remainder of execution.
pub fn cached_release_info(path: &Path) -> &'static ReleaseInfo {
    RELEASE_INFO.get_or_init(|| load_release_info(path))
}
