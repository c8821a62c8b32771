use std::path::PathBuf;

use clap::Parser;
use dotenv::dotenv;
use rt_bot::core::config::DEFAULT_CONFIG_PATH;
use rt_bot::core::logger::{self, DEFAULT_LOG_PATH};
use rt_bot::{Runtime, RuntimeOptions};

#[derive(Debug, Parser)]
#[command(name = "hashtag-rt-bot", version, about = "Search Twitter for a hashtag and collect the matching tweets")]
struct Args {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Activity log, appended to on every run
    #[arg(long, default_value = DEFAULT_LOG_PATH)]
    log_file: PathBuf,

    /// Fail the run when the search hits an error instead of keeping partial results
    #[arg(long)]
    strict: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    logger::init_console(args.verbose);

    if let Err(e) = dotenv() {
        log::debug!("No .env file loaded: {}", e);
    }

    let runtime = Runtime::init(&RuntimeOptions {
        config_path: args.config,
        log_path: args.log_file,
        strict: args.strict,
    })?;

    let tweets = runtime.run().await?;
    for tweet in &tweets {
        println!(
            "{} | {} | {}",
            tweet.id,
            tweet.created_at.format("%Y-%m-%d %H:%M:%S"),
            tweet.text.replace('\n', " ")
        );
    }

    Ok(())
}
