use serde::Serialize;

/// Flat wire payload for the installation notification.
///
/// Constructed fresh per call, never mutated afterwards, and serialized
/// directly as the request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub installation_id: String,
    pub service_code: String,
    pub version: String,
    pub hostname: String,
    pub environment: String,
    pub deployed_at: String,
    pub release_type: String,
    pub download_url: String,
    pub documentation_url: String,
    pub summary: String,
    pub details: String,
    pub features: Vec<serde_json::Value>,
    pub bug_fixes: Vec<serde_json::Value>,
    pub dependencies: Vec<serde_json::Value>,
}
