//! Cloudflare DNS Provider

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::create_http_client;

pub(crate) use types::{CloudflareDnsRecord, CloudflareResponse, CloudflareResultInfo};

/// Public Cloudflare v4 API endpoint.
pub const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Maximum `per_page` accepted by the DNS Records API.
pub(crate) const MAX_PAGE_SIZE_RECORDS: u32 = 100;

/// Cloudflare DNS Provider bound to one API token and one zone.
pub struct CloudflareProvider {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) zone_id: String,
    pub(crate) base_url: String,
}

impl CloudflareProvider {
    /// Create a provider talking to the public Cloudflare API.
    pub fn new(api_token: impl Into<String>, zone_id: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_token, zone_id, CF_API_BASE)
    }

    /// Create a provider talking to a custom API base URL (proxies, mock servers).
    pub fn with_base_url(
        api_token: impl Into<String>,
        zone_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            client: create_http_client("cloudflare")?,
            api_token: api_token.into(),
            zone_id: zone_id.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Path of the zone's record collection.
    pub(crate) fn records_path(&self) -> String {
        format!("/zones/{}/dns_records", self.zone_id)
    }
}

impl std::fmt::Debug for CloudflareProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareProvider")
            .field(
                "api_token",
                &crate::utils::log_sanitizer::mask_secret(&self.api_token),
            )
            .field("zone_id", &self.zone_id)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
