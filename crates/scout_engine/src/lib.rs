//! Scout engine: mirror discovery pipeline and catalog persistence.
mod catalog;
mod descriptor;
mod extract;
mod fetch;
mod persist;
mod pipeline;
mod probe;
mod types;

pub use catalog::{builtin_providers, MirrorProvider};
pub use descriptor::{size_token, SiteDescriptor};
pub use extract::extract_candidates;
pub use fetch::{FetchSettings, PageFetcher, ReqwestPageFetcher};
pub use persist::{ensure_output_dir, render_catalog, CatalogWriter, PersistError};
pub use pipeline::MirrorScout;
pub use probe::{LivenessProber, ProbeSettings, ReqwestProber};
pub use types::{FailureKind, FetchError};
