use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "ServiceNex installation notifier")]
pub struct Args {
    /// Path to the release metadata sidecar.
    /// Defaults to release_info.json next to the executable.
    #[arg(long, short)]
    pub release_info: Option<String>,
}
