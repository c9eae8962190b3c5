use std::io::Write;

use clap::Parser;
use log::{debug, info};

use studentdb::cli::Args;
use studentdb::config::Config;
use studentdb::error::{Result, StoreError};
use studentdb::output;
use studentdb::store::RecordStore;

/// Set up SIGPIPE handling for Unix systems
/// This prevents "broken pipe" errors when output is piped to commands like `head`
#[cfg(unix)]
fn setup_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn setup_sigpipe() {
    // Windows doesn't have SIGPIPE
}

fn main() {
    setup_sigpipe();

    if let Err(e) = run() {
        eprintln!("studentdb: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(&args)?;

    let level = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut out = output::open_output(&config)?;
    writeln!(out, "Initializing student database system...")?;

    let mut store = RecordStore::create(config.capacity)?;

    // A full store rejects the insert but the run carries on
    for spec in &config.records {
        match store.insert(spec.id, &spec.name, spec.gpa) {
            Ok(()) => {}
            Err(StoreError::CapacityExceeded { capacity }) => {
                debug!("record {} not added: capacity {} reached", spec.id, capacity);
            }
            Err(e) => return Err(e),
        }
    }
    info!("{} of {} slots in use", store.len(), store.capacity());

    output::write_listing(&mut out, &store)?;

    writeln!(out, "\nSearching for student with ID {}...", config.find_id)?;
    output::write_lookup(&mut out, config.find_id, store.find_by_id(config.find_id))?;

    store.release();
    writeln!(out, "\nDatabase system shut down.")?;
    out.flush()?;

    Ok(())
}
