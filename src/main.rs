use clap::Parser;
use interview_exp::core::config;
use interview_exp::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "interview-exp",
    about = "Browse community interview experiences in the terminal"
)]
struct Args {
    /// Full URL of the list endpoint (overrides config and INTERVIEW_EXP_URL)
    #[arg(long)]
    url: Option<String>,

    /// Skip the network and browse the built-in sample experiences
    #[arg(long)]
    offline: bool,

    /// Config file to use instead of ~/.interview-exp/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to interview-exp.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("interview-exp.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{}, using defaults", e);
            eprintln!("warning: {e}, using defaults");
            config::AppConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.url.as_deref());

    log::info!(
        "interview-exp starting up (endpoint: {}, offline: {})",
        resolved.endpoint_url,
        args.offline
    );

    let source = tui::build_source(&resolved, args.offline);
    tui::run(resolved, source)
}
