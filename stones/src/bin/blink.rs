use miette::Context;
use stones::error::StoneError;
use tracing_subscriber::{filter::LevelFilter, fmt::format::FmtSpan, EnvFilter};

#[tracing::instrument]
fn main() -> miette::Result<()> {
    init();

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .map_err(StoneError::from)?;

    let output = stones::run(&line).context("count stones")?;
    println!("{}", output);
    Ok(())
}

fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .try_init();
}

/// `info` unless `RUST_LOG` names its own directives.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}
