pub const PRODUCT_NAME: &str = "ServiceNex Notifier";
pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 1;
pub const VERSION_PATCH: u32 = 0;
pub const VERSION_ALIAS: &str = "Burrito";
pub const LICENSE: &str = "MIT";
pub const COPYRIGHT: &str = "ServiceNex";
pub const COPYRIGHT_YEARS: &str = "2025-2026";
