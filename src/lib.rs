pub mod clap_parser;
pub mod config_resolver;
pub mod notifier;
pub mod release_info;
pub mod shared;
pub mod version;
pub mod version_detector;
