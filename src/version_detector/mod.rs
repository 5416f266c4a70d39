//! Version detection module
//!
//! This module detects the installed host application version through a
//! prioritized chain of providers.

pub mod version_detector;
