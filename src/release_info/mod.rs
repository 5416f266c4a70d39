//! Release metadata module
//!
//! This module loads the static release_info.json sidecar bundled
//! alongside the notifier.

pub mod release_info_loader;
