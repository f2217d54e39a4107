use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use qna::core::config;
use qna::tui;

#[derive(Parser)]
#[command(name = "qna", about = "Terminal chat client for a remote QnA answering service")]
struct Args {
    /// Base URL of the answering service (overrides config file and env)
    #[arg(short, long)]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to qna.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("qna.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("warning: {e}, falling back to defaults");
        config::QnaConfig::default()
    });
    let resolved = config::resolve(&file_config, args.server.as_deref());

    log::info!("QnA starting up, server: {}", resolved.base_url);

    tui::run(resolved)
}
