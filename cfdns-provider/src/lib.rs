//! # cfdns-provider
//!
//! Typed client for managing the DNS records of a single Cloudflare zone:
//! list, create and delete, behind the [`DnsProvider`] trait.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for static and cross-compiled builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cfdns_provider::{CloudflareProvider, CreateDnsRecordRequest, DnsProvider, DnsRecordType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = CloudflareProvider::new("api-token", "zone-id")?;
//!
//!     for (idx, record) in provider.list_records().await?.iter().enumerate() {
//!         println!("{}. {} {} -> {}", idx + 1, record.record_type, record.name, record.content);
//!     }
//!
//!     let request =
//!         CreateDnsRecordRequest::new(DnsRecordType::A, "test.example.com", "203.0.113.5");
//!     let created = provider.create_record(&request).await?;
//!     provider.delete_record(&created.id).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Use
//! [`ProviderError::category`] to tell a rejected credential
//! ([`ErrorCategory::Auth`]) from every other failure ([`ErrorCategory::Transport`]),
//! and [`ProviderError::status`] for the HTTP status of the failed response.
//!
//! Nothing is retried automatically: each operation issues its requests once,
//! sequentially.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ErrorCategory, ProviderError, Result};

pub use traits::DnsProvider;

pub use types::{CreateDnsRecordRequest, DEFAULT_TTL, DeletedRecord, DnsRecord, DnsRecordType};

pub use providers::{CF_API_BASE, CloudflareProvider};

pub use utils::log_sanitizer::mask_secret;
