use std::sync::Arc;

use clap::Parser;
use tracing::info;

use iss_tracker::{
    api::{self, AppState},
    config::{Cli, Commands, ServeArgs},
    feed::EphemerisSource,
    logging::init_logging,
    report::write_report,
    store::{populate_if_empty, EpochStore},
    time::now_utc,
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[cfg(feature = "redis-store")]
fn open_store(args: &ServeArgs) -> Result<Arc<dyn EpochStore>> {
    info!(url = %args.redis_url, "using redis epoch store");
    Ok(Arc::new(iss_tracker::store::RedisStore::open(&args.redis_url)?))
}

#[cfg(not(feature = "redis-store"))]
fn open_store(_args: &ServeArgs) -> Result<Arc<dyn EpochStore>> {
    info!("using in-memory epoch store");
    Ok(Arc::new(iss_tracker::store::MemoryStore::new()))
}

fn serve(args: &ServeArgs, feed: Arc<dyn EphemerisSource>) -> Result<()> {
    let store = open_store(args)?;

    if store.is_empty()? {
        info!(source = %feed.describe(), "loading ephemeris into the epoch store");
        let document = feed.fetch()?;
        populate_if_empty(store.as_ref(), document.state_vectors())?;
    }

    let state = AppState::new(store, feed);
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(api::serve(&args.bind, state))?;
    Ok(())
}

fn report(feed: &dyn EphemerisSource) -> Result<()> {
    let document = feed.fetch()?;
    let reference = now_utc()?;
    write_report(&mut std::io::stdout().lock(), &document, reference)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.loglevel);

    let feed = cli.ephemeris_source();
    match &cli.command {
        Commands::Serve(args) => serve(args, feed),
        Commands::Report => report(feed.as_ref()),
    }
}
