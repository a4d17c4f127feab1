use clap::Parser;
use tracing::level_filters::LevelFilter;

use better_gql_generator::cli::Cli;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logger(&cli);
    better_gql_generator::cli::run(cli)
}

fn setup_logger(cli: &Cli) {
    let mut log_level_warnings: Vec<String> = vec![];
    let log_level = if cli.silent {
        LevelFilter::OFF
    } else if cli.verbose {
        LevelFilter::DEBUG
    } else {
        let env_val = std::env::var("LOG_LEVEL").map(|s| s.trim().to_string());
        match env_val.as_deref() {
            Ok("TRACE" | "trace") => LevelFilter::TRACE,
            Ok("DEBUG" | "debug") => LevelFilter::DEBUG,
            Ok("INFO" | "info") => LevelFilter::INFO,
            Ok("WARN" | "warn") => LevelFilter::WARN,
            Ok("ERROR" | "error") => LevelFilter::ERROR,
            Ok(other) => {
                log_level_warnings.push(format!(
                    "Invalid `LOG_LEVEL` environment variable value: `{other}`"
                ));
                DEFAULT_LOG_LEVEL
            }
            Err(_) => DEFAULT_LOG_LEVEL,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    tracing::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        tracing::warn!("{warning}");
    }
}
