//! Cloudflare API wire types

use serde::{Deserialize, Serialize};

/// Cloudflare API response envelope.
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse<T> {
    pub success: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub errors: Vec<CloudflareError>,
    pub result_info: Option<CloudflareResultInfo>,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareResultInfo {
    pub page: u32,
    #[allow(dead_code)]
    pub per_page: u32,
    #[serde(default)]
    pub total_count: u32,
    /// Missing on endpoints that are not paginated.
    pub total_pages: Option<u32>,
}

impl CloudflareResultInfo {
    /// Whether pages after this one exist.
    pub fn has_more(&self) -> bool {
        self.total_pages.is_some_and(|total| self.page < total)
    }
}

/// Cloudflare DNS record (response)
#[derive(Debug, Deserialize)]
pub struct CloudflareDnsRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub priority: Option<u16>,
    pub proxied: Option<bool>,
    pub created_on: Option<String>,
    pub modified_on: Option<String>,
}

/// Body of `POST /zones/{zone_id}/dns_records`
#[derive(Debug, Serialize)]
pub struct CreateRecordBody<'a> {
    #[serde(rename = "type")]
    pub record_type: &'static str,
    pub name: &'a str,
    pub content: &'a str,
    pub ttl: u32,
    pub proxied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

/// `result` of `DELETE /zones/{zone_id}/dns_records/{id}`
#[derive(Debug, Deserialize)]
pub struct CloudflareDeleteResult {
    pub id: String,
}

/// `result` of `GET /user/tokens/verify`
#[derive(Debug, Deserialize)]
pub struct CloudflareTokenStatus {
    pub status: String,
}
