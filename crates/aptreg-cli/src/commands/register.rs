//! The `aptreg register` command.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use aptreg_core::config::load_config_from;
use aptreg_core::prompt::ConsolePrompter;
use aptreg_core::session::Session;
use aptreg_core::store::CsvStore;

pub fn execute(
    store_path: Option<PathBuf>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?.with_overrides(store_path, seed);

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    tracing::debug!(
        store = %config.store_path.display(),
        seeded = config.seed.is_some(),
        "starting registration session"
    );

    let console = ConsolePrompter::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(console, CsvStore::new(&config.store_path), rng);
    session.run()?;

    Ok(())
}
