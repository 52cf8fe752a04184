use serde::{Deserialize, Serialize};

/// Coarse classification of a [`ProviderError`].
///
/// Callers that only need to know whether the credential was rejected or
/// something else went wrong on the wire match on this instead of the
/// individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The bearer token was rejected (HTTP 401/403 or an authentication error code).
    Auth,
    /// Any other failure: network, timeout, non-2xx response, malformed reply.
    Transport,
}

/// Unified error type for all DNS provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. Variants produced from an HTTP response carry the
/// response `status` so it can be shown to the user alongside the remote message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The provided credentials are invalid or expired.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status of the response, if any.
        status: Option<u16>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The token is valid but lacks permission for the requested operation.
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status of the response, if any.
        status: Option<u16>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A DNS record with the same name/type already exists.
    RecordExists {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status of the response, if any.
        status: Option<u16>,
        /// Name of the conflicting record.
        record_name: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The specified DNS record was not found.
    RecordNotFound {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status of the response, if any.
        status: Option<u16>,
        /// ID of the record that was not found.
        record_id: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter was rejected (bad TTL, malformed IP address, ...).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status of the response, if any.
        status: Option<u16>,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The record type string is not one of the supported types.
    UnsupportedRecordType {
        /// Provider that produced the error.
        provider: String,
        /// The unsupported record type string.
        record_type: String,
    },

    /// The zone's record quota has been exceeded.
    QuotaExceeded {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status of the response, if any.
        status: Option<u16>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    ///
    /// Requests are never retried automatically; the caller decides what to do.
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The configured zone was not found (or the route does not exist).
    ZoneNotFound {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status of the response, if any.
        status: Option<u16>,
        /// Zone identifier that was not found.
        zone_id: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    ///
    /// Catch-all for non-2xx responses whose error code is not mapped to a specific variant.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status of the response, if any.
        status: Option<u16>,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// Classify this error as an authentication or a transport failure.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCredentials { .. } | Self::PermissionDenied { .. } => ErrorCategory::Auth,
            _ => ErrorCategory::Transport,
        }
    }

    /// Shorthand for `category() == ErrorCategory::Auth`.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        self.category() == ErrorCategory::Auth
    }

    /// HTTP status code of the failed response, when the error came from one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidCredentials { status, .. }
            | Self::PermissionDenied { status, .. }
            | Self::RecordExists { status, .. }
            | Self::RecordNotFound { status, .. }
            | Self::InvalidParameter { status, .. }
            | Self::QuotaExceeded { status, .. }
            | Self::ZoneNotFound { status, .. }
            | Self::Unknown { status, .. } => *status,
            Self::RateLimited { .. } => Some(429),
            Self::NetworkError { .. }
            | Self::Timeout { .. }
            | Self::UnsupportedRecordType { .. }
            | Self::ParseError { .. } => None,
        }
    }

    /// Whether this is expected behaviour (user input, missing resource, ...), used to pick
    /// the log level.
    ///
    /// `true` means log at `warn`, `false` at `error`.
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::RecordExists { .. }
                | Self::RecordNotFound { .. }
                | Self::InvalidParameter { .. }
                | Self::UnsupportedRecordType { .. }
                | Self::QuotaExceeded { .. }
                | Self::ZoneNotFound { .. }
        )
    }
}

/// Writes `" (HTTP 404)"` when a status is known.
fn write_status(f: &mut std::fmt::Formatter<'_>, status: Option<u16>) -> std::fmt::Result {
    match status {
        Some(code) => write!(f, " (HTTP {code})"),
        None => Ok(()),
    }
}

/// Writes `": message"` when a message is known.
fn write_message(f: &mut std::fmt::Formatter<'_>, message: Option<&String>) -> std::fmt::Result {
    match message {
        Some(msg) => write!(f, ": {msg}"),
        None => Ok(()),
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                status,
                raw_message,
            } => {
                write!(f, "[{provider}] Invalid credentials")?;
                write_status(f, *status)?;
                write_message(f, raw_message.as_ref())
            }
            Self::PermissionDenied {
                provider,
                status,
                raw_message,
            } => {
                write!(f, "[{provider}] Permission denied")?;
                write_status(f, *status)?;
                write_message(f, raw_message.as_ref())
            }
            Self::RecordExists {
                provider,
                status,
                record_name,
                raw_message,
            } => {
                write!(f, "[{provider}] Record '{record_name}' already exists")?;
                write_status(f, *status)?;
                write_message(f, raw_message.as_ref())
            }
            Self::RecordNotFound {
                provider,
                status,
                record_id,
                raw_message,
            } => {
                write!(f, "[{provider}] Record '{record_id}' not found")?;
                write_status(f, *status)?;
                write_message(f, raw_message.as_ref())
            }
            Self::InvalidParameter {
                provider,
                status,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}'")?;
                write_status(f, *status)?;
                write!(f, ": {detail}")
            }
            Self::UnsupportedRecordType {
                provider,
                record_type,
            } => {
                write!(f, "[{provider}] Unsupported record type: {record_type}")
            }
            Self::QuotaExceeded {
                provider,
                status,
                raw_message,
            } => {
                write!(f, "[{provider}] Quota exceeded")?;
                write_status(f, *status)?;
                write_message(f, raw_message.as_ref())
            }
            Self::RateLimited {
                provider,
                retry_after,
                raw_message,
            } => {
                write!(f, "[{provider}] Rate limited (HTTP 429")?;
                if let Some(secs) = retry_after {
                    write!(f, ", retry after {secs}s")?;
                }
                f.write_str(")")?;
                write_message(f, raw_message.as_ref())
            }
            Self::ZoneNotFound {
                provider,
                status,
                zone_id,
                raw_message,
            } => {
                write!(f, "[{provider}] Zone '{zone_id}' not found")?;
                write_status(f, *status)?;
                write_message(f, raw_message.as_ref())
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::Unknown {
                provider,
                status,
                raw_code,
                raw_message,
            } => {
                write!(f, "[{provider}]")?;
                if let Some(code) = status {
                    write!(f, " HTTP {code}")?;
                }
                if let Some(code) = raw_code {
                    write!(f, " (code {code})")?;
                }
                if status.is_some() || raw_code.is_some() {
                    write!(f, ":")?;
                }
                write!(f, " {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
