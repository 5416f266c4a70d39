use clap::Parser;
use colored::Colorize;
use servicenex_notifier::clap_parser::Args;
use servicenex_notifier::notifier::installation_notifier::notify_installation;
use servicenex_notifier::release_info::release_info_loader::default_sidecar_path;
use servicenex_notifier::version::{
    COPYRIGHT, COPYRIGHT_YEARS, LICENSE, PRODUCT_NAME, VERSION_ALIAS, VERSION_MAJOR, VERSION_MINOR,
    VERSION_PATCH,
};
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    print_separator();
    print_header();
    print_separator();

    let sidecar_path = args
        .release_info
        .map(PathBuf::from)
        .unwrap_or_else(default_sidecar_path);

    let result = notify_installation(&sidecar_path).await;

    print_separator();
    if result {
        println!("{}", "✓ SUCCESS".green().bold());
    } else {
        println!("{}", "✗ FAILED".red().bold());
    }
    print_separator();
}

fn print_header() {
    let version = format!(
        "{} version {}.{}.{} ({})",
        PRODUCT_NAME, VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH, VERSION_ALIAS
    )
    .red()
    .bold();
    println!("{}", version);

    let license = format!("License: {}", LICENSE).red();
    println!("{}", license);

    let copyright = format!("Copyright © {}. {}.", COPYRIGHT, COPYRIGHT_YEARS).red();
    println!("{}", copyright);
}

fn print_separator() {
    let template = "=";
    let n = 60;
    let repeated_string = template.repeat(n);
    println!("{}", repeated_string);
}
