//! The discovery pipeline: catalog -> fetch -> extract -> probe -> descriptor.

use regex::Regex;
use scout_logging::{scout_debug, scout_warn};

use crate::extract::extract_candidates;
use crate::{LivenessProber, MirrorProvider, PageFetcher, SiteDescriptor};

/// Runs the whole discovery pass over a provider table.
///
/// Providers are processed one at a time, and candidates within a provider
/// are probed one at a time. A provider whose index fetch fails contributes
/// zero descriptors and does not abort the run.
pub struct MirrorScout<F, P> {
    fetcher: F,
    prober: P,
}

impl<F, P> MirrorScout<F, P>
where
    F: PageFetcher,
    P: LivenessProber,
{
    pub fn new(fetcher: F, prober: P) -> Self {
        Self { fetcher, prober }
    }

    pub async fn discover(&self, providers: &[MirrorProvider]) -> Vec<SiteDescriptor> {
        let mut sites = Vec::new();
        for provider in providers {
            self.discover_provider(provider, &mut sites).await;
        }
        sites
    }

    async fn discover_provider(&self, provider: &MirrorProvider, sites: &mut Vec<SiteDescriptor>) {
        let page = match self.fetcher.fetch_index(provider.index_url).await {
            Ok(page) => page,
            Err(err) => {
                scout_warn!("Failed to fetch {}: {}", provider.index_url, err);
                return;
            }
        };

        let pattern = match Regex::new(provider.pattern) {
            Ok(pattern) => pattern,
            Err(err) => {
                scout_warn!("Bad pattern for {}: {}", provider.name, err);
                return;
            }
        };

        let candidates = extract_candidates(&pattern, &page);
        scout_debug!(
            "{}: {} candidate url(s) extracted",
            provider.name,
            candidates.len()
        );

        for url in candidates {
            // Dead candidates are dropped without logging.
            if self.prober.is_alive(&url).await {
                sites.push(SiteDescriptor::for_live_url(provider, &url));
            }
        }
    }
}
