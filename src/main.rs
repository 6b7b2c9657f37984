use chuckle::core::config::{self, ChuckleConfig, CliOverrides};
use chuckle::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "chuckle", about = "Fetch a batch of jokes and filter them as you type")]
struct Args {
    /// Joke endpoint to GET (expects a JSON body with `id` and `value`)
    #[arg(short, long)]
    url: Option<String>,

    /// Number of jokes to fetch in the batch
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Quiet period before the filter is applied, in milliseconds
    #[arg(short, long)]
    debounce_ms: Option<u64>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_url: self.url.clone(),
            joke_count: self.count,
            filter_debounce_ms: self.debounce_ms,
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to chuckle.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("chuckle.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, falling back to defaults", e);
        ChuckleConfig::default()
    });
    let resolved = config::resolve(&file_config, &args.overrides());

    log::info!(
        "Chuckle starting up: url={}, count={}, debounce={:?}",
        resolved.api_url,
        resolved.joke_count,
        resolved.filter_debounce
    );

    tui::run(resolved)
}
