//! Single entry point: one discovery pass, then the catalog write.

mod logging;

use std::path::PathBuf;

use scout_engine::{
    builtin_providers, CatalogWriter, FetchSettings, MirrorScout, ProbeSettings,
    ReqwestPageFetcher, ReqwestProber,
};
use scout_logging::scout_info;

/// The catalog lands one directory above the run location.
const OUTPUT_DIR: &str = "..";
const OUTPUT_FILENAME: &str = "sites.jsonc";

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::Terminal);

    let scout = MirrorScout::new(
        ReqwestPageFetcher::new(FetchSettings::default()),
        ReqwestProber::new(ProbeSettings::default()),
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let sites = runtime.block_on(scout.discover(builtin_providers()));

    let writer = CatalogWriter::new(PathBuf::from(OUTPUT_DIR));
    let target = writer.write(OUTPUT_FILENAME, &sites)?;
    scout_info!("Updated {} with {} alive entries.", target.display(), sites.len());

    Ok(())
}
