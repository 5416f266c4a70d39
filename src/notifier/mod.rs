//! Installation notification module
//!
//! This module assembles the notification payload and performs the single
//! outbound POST to the ServiceNex collection endpoint.

pub mod installation_notifier;
