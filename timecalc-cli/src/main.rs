use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use timecalc_core::{Config, Duration, EvalError, run};

#[derive(Parser, Debug)]
#[clap(
    name = "timecalc",
    version,
    about = "Add and subtract compact durations such as 1d2h3m4.5s, left to right"
)]
struct Cli {
    #[clap(
        long,
        help = "Print diagnostics to stderr (also enabled by a non-empty DEBUG_LOG)"
    )]
    debug: bool,

    #[clap(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Durations and +/- operators, e.g. 1m30s - 1m + 30s"
    )]
    tokens: Vec<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing()?;

    // Load the .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env().with_debug(cli.debug);
    if config.debug {
        debug!(tokens = ?cli.tokens, "evaluating expression");
    }

    let (line, code) = render(run(&cli.tokens, config));
    println!("{line}");
    Ok(code)
}

/// The single stdout line and exit code for an evaluation result.
fn render(result: Result<Option<Duration>, EvalError>) -> (String, ExitCode) {
    match result {
        Ok(Some(duration)) => (duration.to_string(), ExitCode::SUCCESS),
        Ok(None) => ("None".to_owned(), ExitCode::SUCCESS),
        Err(EvalError::Syntax { .. }) => ("syntax error".to_owned(), ExitCode::FAILURE),
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_filter(filter_fn(|metadata| {
            if *metadata.level() <= tracing::Level::WARN {
                return true;
            }

            *metadata.level() <= tracing::Level::DEBUG
                && metadata.target().starts_with("timecalc")
        }));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}
