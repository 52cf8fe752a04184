use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

/// Default TTL (seconds) applied to new records when the caller does not pick one.
pub const DEFAULT_TTL: u32 = 3600;

// ============ DNS Record Types ============

/// DNS record type identifier.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.), which is also
/// the representation the Cloudflare API uses for the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
    /// Service locator record.
    Srv,
    /// Name server record.
    Ns,
    /// Pointer (reverse lookup) record.
    Ptr,
    /// Certificate Authority Authorization record.
    Caa,
}

impl DnsRecordType {
    /// Every supported type, in menu order.
    pub const ALL: [Self; 9] = [
        Self::A,
        Self::Aaaa,
        Self::Cname,
        Self::Mx,
        Self::Txt,
        Self::Srv,
        Self::Ns,
        Self::Ptr,
        Self::Caa,
    ];

    /// Uppercase wire name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Srv => "SRV",
            Self::Ns => "NS",
            Self::Ptr => "PTR",
            Self::Caa => "CAA",
        }
    }

    /// Parse a type name case-insensitively.
    pub fn parse(record_type: &str, provider: &str) -> Result<Self> {
        let wanted = record_type.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ProviderError::UnsupportedRecordType {
                provider: provider.to_string(),
                record_type: record_type.to_string(),
            })
    }

    /// Whether Cloudflare can proxy records of this type.
    pub fn is_proxiable(self) -> bool {
        matches!(self, Self::A | Self::Aaaa | Self::Cname)
    }

    /// Whether records of this type carry a `priority` field.
    pub fn has_priority(self) -> bool {
        matches!(self, Self::Mx | Self::Srv)
    }
}

impl std::fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DNS record as returned by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Provider-specific record identifier.
    pub id: String,
    /// Zone identifier this record belongs to.
    pub zone_id: String,
    /// Record type.
    pub record_type: DnsRecordType,
    /// Record name as reported by the provider (usually the fully-qualified hostname).
    pub name: String,
    /// Record value; its format depends on the type.
    pub content: String,
    /// Time to live in seconds (`1` means "automatic" on Cloudflare).
    pub ttl: u32,
    /// Whether Cloudflare's proxy is enabled.
    pub proxied: bool,
    /// Priority for MX/SRV records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,

    /// When the record was created, if known.
    #[serde(with = "crate::utils::datetime")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<chrono::DateTime<chrono::Utc>>,

    /// When the record was last modified, if known.
    #[serde(with = "crate::utils::datetime")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<chrono::DateTime<chrono::Utc>>,
}

/// Request to create a new DNS record.
///
/// `name` and `content` are passed through untouched; the provider validates them.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDnsRecordRequest {
    /// Record type.
    pub record_type: DnsRecordType,
    /// Record name (e.g. `"www.example.com"`).
    pub name: String,
    /// Record value.
    pub content: String,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Enable Cloudflare's proxy.
    pub proxied: bool,
    /// Priority for MX/SRV records.
    pub priority: Option<u16>,
}

impl CreateDnsRecordRequest {
    /// Build a request with the default TTL, proxy disabled and no priority.
    pub fn new(
        record_type: DnsRecordType,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            record_type,
            name: name.into(),
            content: content.into(),
            ttl: DEFAULT_TTL,
            proxied: false,
            priority: None,
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_proxied(mut self, proxied: bool) -> Self {
        self.proxied = proxied;
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Option<u16>) -> Self {
        self.priority = priority;
        self
    }
}

/// What a provider reports back after deleting a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedRecord {
    /// ID of the deleted record.
    pub id: String,
}
