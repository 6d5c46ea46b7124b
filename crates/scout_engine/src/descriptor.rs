//! The output record for one confirmed-live mirror file.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::MirrorProvider;

/// One entry of the output catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDescriptor {
    pub name: String,
    pub url: String,
    pub country: String,
}

impl SiteDescriptor {
    /// Build the descriptor for a candidate URL that passed the liveness
    /// probe. The display name is the provider name plus the size token
    /// embedded in the URL, or the literal "file" when there is none.
    pub fn for_live_url(provider: &MirrorProvider, url: &str) -> Self {
        let label = size_token(url).unwrap_or("file");
        Self {
            name: format!("{} {}", provider.name, label),
            url: url.to_string(),
            country: provider.country.to_string(),
        }
    }
}

/// Locate a size token such as "100MB" or "1GB" inside a URL. The unit set
/// is case-sensitive: MB, GB, Mb, Gb.
pub fn size_token(url: &str) -> Option<&str> {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    let token = TOKEN.get_or_init(|| {
        Regex::new(r"([0-9]+)(MB|GB|Mb|Gb)").expect("size token pattern compiles")
    });
    token.find(url).map(|m| m.as_str())
}
