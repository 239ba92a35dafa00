use eyre::Result;

use githead::{Error, HttpProber, ScanEngine};

fn main() -> Result<()> {
    let args = githead::cli::parse();

    if let Err(e) = githead::init_logging(args.verbose) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let config = githead::RunConfig::load(&args.config)?;
    log::info!(
        "[main] config_loaded: threads={} timeout={}s collection={}",
        config.threads,
        config.timeout.as_secs(),
        config.collection_file.display()
    );

    // A missing collection file is surfaced to the engine as an empty list,
    // which it rejects as EmptyCollection.
    let targets = match githead::load_targets(&config.collection_file) {
        Ok(targets) => targets,
        Err(Error::SourceNotFound(path)) => {
            log::error!("[main] collection file not found: {}", path.display());
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };

    let prober = HttpProber::new(config.timeout, &config.headers)?;
    let engine = ScanEngine::new(prober);
    let report = engine.run(&targets, config.threads)?;

    githead::print_report(&report);

    Ok(())
}
