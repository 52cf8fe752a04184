use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{CreateDnsRecordRequest, DeletedRecord, DnsRecord};

/// Raw API error before mapping (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP status of the response, if there was one.
    pub status: Option<u16>,
    /// Provider-specific error code.
    pub code: Option<String>,
    /// Original error message.
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: None,
            code: Some(code.into()),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Extra information available to the error mapper (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Record name, for `RecordExists`.
    pub record_name: Option<String>,
    /// Record id, for `RecordNotFound`.
    pub record_id: Option<String>,
    /// Zone id, for `ZoneNotFound`.
    pub zone_id: Option<String>,
}

/// Maps raw API errors onto [`ProviderError`] (internal).
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier.
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error to the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Fallback when no code matched: classify by HTTP status.
    fn status_error(&self, raw: RawApiError) -> ProviderError {
        match raw.status {
            Some(401) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                status: raw.status,
                raw_message: Some(raw.message),
            },
            Some(403) => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                status: raw.status,
                raw_message: Some(raw.message),
            },
            _ => ProviderError::Unknown {
                provider: self.provider_name().to_string(),
                status: raw.status,
                raw_code: raw.code,
                raw_message: raw.message,
            },
        }
    }
}

/// Record operations against one DNS zone.
///
/// An instance is bound to a credential and a zone at construction time, so every
/// call carries that context explicitly instead of reading process-wide state.
/// Calls are independent: nothing is cached between them.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Zone this instance operates on.
    fn zone_id(&self) -> &str;

    /// Check that the credential is accepted by the remote API.
    ///
    /// Returns `Ok(false)` when the credential is recognised but not active.
    async fn verify_token(&self) -> Result<bool>;

    /// List every record in the zone, in the order the remote service returns them.
    async fn list_records(&self) -> Result<Vec<DnsRecord>>;

    /// Create one record and return it with its assigned id.
    async fn create_record(&self, req: &CreateDnsRecordRequest) -> Result<DnsRecord>;

    /// Delete one record by id. Deleting an unknown id is an error.
    async fn delete_record(&self, record_id: &str) -> Result<DeletedRecord>;
}
