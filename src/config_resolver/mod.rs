//! Configuration resolution module
//!
//! This module resolves the ServiceNex configuration from process
//! environment variables and mounted secret files.

pub mod config_resolver;
