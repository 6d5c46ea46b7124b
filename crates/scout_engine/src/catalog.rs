//! The static table of known speed-test mirror providers.

/// One known hosting provider: where its index page lives and what its
/// download-file URLs look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorProvider {
    /// Human-readable display name, e.g. "Hetzner Germany".
    pub name: &'static str,
    /// Country code used in the output catalog.
    pub country: &'static str,
    /// Index page listing the provider's test files.
    pub index_url: &'static str,
    /// Regex matching candidate file URLs inside the index page.
    pub pattern: &'static str,
}

// The Azure entry probes a different host than the page it scrapes, and the
// AWS character class reads `A-ZaZ`; both are kept as found upstream.
const BUILTIN: &[MirrorProvider] = &[
    MirrorProvider {
        name: "Hetzner Germany",
        country: "DE",
        index_url: "https://speed.hetzner.de/",
        pattern: r"https://speed\.hetzner\.de/[0-9A-Za-z]+\.bin",
    },
    MirrorProvider {
        name: "ThinkBroadband UK",
        country: "UK",
        index_url: "http://ipv4.download.thinkbroadband.com/",
        pattern: r"http://ipv4\.download\.thinkbroadband\.com/[0-9A-Za-z]+\.zip",
    },
    MirrorProvider {
        name: "OVH France",
        country: "FR",
        index_url: "http://proof.ovh.net/files/",
        pattern: r"http://proof\.ovh\.net/files/[0-9A-Za-z]+\.(dat|zip)",
    },
    MirrorProvider {
        name: "Tele2 Sweden",
        country: "SE",
        index_url: "http://speedtest.tele2.net/",
        pattern: r"http://speedtest\.tele2\.net/[0-9A-Za-z]+\.zip",
    },
    MirrorProvider {
        name: "Leaseweb NL",
        country: "NL",
        index_url: "https://mirror.nl.leaseweb.net/speedtest/",
        pattern: r"https://mirror\.nl\.leaseweb\.net/speedtest/[0-9A-Za-z]+\.(bin|zip)",
    },
    MirrorProvider {
        name: "Leaseweb DE",
        country: "DE",
        index_url: "https://mirror.de.leaseweb.net/speedtest/",
        pattern: r"https://mirror\.de\.leaseweb\.net/speedtest/[0-9A-Za-z]+\.(bin|zip)",
    },
    MirrorProvider {
        name: "Leaseweb US",
        country: "US",
        index_url: "https://mirror.us.leaseweb.net/speedtest/",
        pattern: r"https://mirror\.us\.leaseweb\.net/speedtest/[0-9A-Za-z]+\.(bin|zip)",
    },
    MirrorProvider {
        name: "Leaseweb SG",
        country: "SG",
        index_url: "https://mirror.sg.leaseweb.net/speedtest/",
        pattern: r"https://mirror\.sg\.leaseweb\.net/speedtest/[0-9A-Za-z]+\.(bin|zip)",
    },
    MirrorProvider {
        name: "Linode US",
        country: "US",
        index_url: "https://speedtest.newark.linode.com/",
        pattern: r"https://speedtest\.newark\.linode\.com/[0-9A-Za-z\-]+\.bin",
    },
    MirrorProvider {
        name: "Linode DE",
        country: "DE",
        index_url: "https://speedtest.frankfurt.linode.com/",
        pattern: r"https://speedtest\.frankfurt\.linode\.com/[0-9A-Za-z\-]+\.bin",
    },
    MirrorProvider {
        name: "Linode UK",
        country: "UK",
        index_url: "https://speedtest.london.linode.com/",
        pattern: r"https://speedtest\.london\.linode\.com/[0-9A-Za-z\-]+\.bin",
    },
    MirrorProvider {
        name: "Linode JP",
        country: "JP",
        index_url: "https://speedtest.tokyo2.linode.com/",
        pattern: r"https://speedtest\.tokyo2\.linode\.com/[0-9A-Za-z\-]+\.bin",
    },
    MirrorProvider {
        name: "Linode SG",
        country: "SG",
        index_url: "https://speedtest.singapore.linode.com/",
        pattern: r"https://speedtest\.singapore\.linode\.com/[0-9A-Za-z\-]+\.bin",
    },
    MirrorProvider {
        name: "Azure Global",
        country: "GLOBAL",
        index_url: "https://www.azurespeed.com/Azure/Download",
        pattern: r"https://azurespeedtestfiles\.blob\.core\.windows\.net/blobtestfiles/test[0-9a-zA-Z]+\.db",
    },
    MirrorProvider {
        name: "AWS S3 US East",
        country: "US",
        index_url: "https://speedtest.s3.amazonaws.com/",
        pattern: r"https://speedtest\.s3\.amazonaws\.com/[0-9A-ZaZ]+\.bin",
    },
    MirrorProvider {
        name: "DigitalOcean NYC1",
        country: "US",
        index_url: "https://s3.amazonaws.com/speedtest-nyc1.digitalocean.com/",
        pattern: r"https://s3\.amazonaws\.com/speedtest-nyc1\.digitalocean\.com/[0-9A-Za-z]+\.test",
    },
];

/// The built-in provider table. Immutable, defined at startup.
pub fn builtin_providers() -> &'static [MirrorProvider] {
    BUILTIN
}
