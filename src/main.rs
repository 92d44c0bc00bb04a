mod analyzer;
mod config;
mod model;
mod pipeline;
mod report;
mod source;

use clap::Parser;
use config::load_config;
use model::SignalError;
use pipeline::SignalPipeline;
use source::YahooSource;
use tracing::{error, info, warn};

/// Moving-average crossover gauge for index entry points.
///
/// Compares a short-term moving average of the configured index against a
/// long-term one and reports whether today's difference sits outside its
/// historical confidence bands.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Long-term moving-average window, in trading sessions
    #[arg(index = 1)]
    long_window: usize,

    /// Short-term moving-average window, must be smaller than the long one
    #[arg(index = 2)]
    short_window: usize,

    /// Path to the configuration file (symbol and date range)
    #[arg(long, default_value = "config.json")]
    config: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config = match load_config(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Gauging {} with {}/{} session windows...",
        config.symbol, args.long_window, args.short_window
    );

    let source = YahooSource::new();
    let pipeline = SignalPipeline::new(source, config);

    match pipeline.compute_signal(args.long_window, args.short_window).await {
        Ok(result) => {
            report::print_table(&result);
            println!("Happy Investing!");
        }
        Err(SignalError::InvalidInput(msg)) => {
            warn!("{}", msg);
            std::process::exit(2);
        }
        Err(e) => {
            error!("Signal computation failed: {}", e);
            std::process::exit(1);
        }
    }
}
