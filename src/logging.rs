use log::LevelFilter;
use std::io::Write;

/// Initialize logging to stderr, keeping stdout clean for the report.
pub fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Get log level from environment variable, default to INFO
    let log_level = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info".to_string())
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);

    let log_level = if verbose { LevelFilter::Debug } else { log_level };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {} - {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .try_init()?;

    log::debug!("Log level: {}", log_level);

    Ok(())
}
