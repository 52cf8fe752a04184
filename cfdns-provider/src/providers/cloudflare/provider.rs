//! Cloudflare `DnsProvider` trait implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{CreateDnsRecordRequest, DeletedRecord, DnsRecord, DnsRecordType};
use crate::utils::datetime::parse_rfc3339;

use super::types::{CloudflareDeleteResult, CloudflareTokenStatus, CreateRecordBody};
use super::{CloudflareDnsRecord, CloudflareProvider, MAX_PAGE_SIZE_RECORDS};

impl CloudflareProvider {
    /// Convert a Cloudflare record into a `DnsRecord`.
    pub(crate) fn cf_record_to_dns_record(&self, cf_record: CloudflareDnsRecord) -> Result<DnsRecord> {
        let record_type = DnsRecordType::parse(&cf_record.record_type, self.provider_name())?;

        Ok(DnsRecord {
            id: cf_record.id,
            zone_id: self.zone_id.clone(),
            record_type,
            name: cf_record.name,
            content: cf_record.content,
            ttl: cf_record.ttl,
            proxied: cf_record.proxied.unwrap_or(false),
            priority: cf_record.priority,
            created_on: cf_record.created_on.as_deref().and_then(parse_rfc3339),
            modified_on: cf_record.modified_on.as_deref().and_then(parse_rfc3339),
        })
    }

    fn zone_context(&self) -> ErrorContext {
        ErrorContext {
            zone_id: Some(self.zone_id.clone()),
            ..ErrorContext::default()
        }
    }
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    fn zone_id(&self) -> &str {
        &self.zone_id
    }

    async fn verify_token(&self) -> Result<bool> {
        let token: CloudflareTokenStatus =
            self.get("/user/tokens/verify", ErrorContext::default()).await?;
        log::debug!("Token status: {}", token.status);
        Ok(token.status == "active")
    }

    async fn list_records(&self) -> Result<Vec<DnsRecord>> {
        let path = self.records_path();
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            let (cf_records, info): (Vec<CloudflareDnsRecord>, _) = self
                .get_page(&path, page, MAX_PAGE_SIZE_RECORDS, self.zone_context())
                .await?;
            let fetched = cf_records.len();

            for cf_record in cf_records {
                match self.cf_record_to_dns_record(cf_record) {
                    Ok(record) => records.push(record),
                    // Zones may hold types this tool does not manage (HTTPS, LOC, ...).
                    Err(e) => log::warn!("Skipping record: {e}"),
                }
            }

            match info {
                Some(info) if info.has_more() && fetched > 0 => {
                    log::debug!(
                        "Fetched page {}/{} ({} records total)",
                        info.page,
                        info.total_pages.unwrap_or(info.page),
                        info.total_count
                    );
                    page += 1;
                }
                _ => break,
            }
        }

        Ok(records)
    }

    async fn create_record(&self, req: &CreateDnsRecordRequest) -> Result<DnsRecord> {
        let body = CreateRecordBody {
            record_type: req.record_type.as_str(),
            name: &req.name,
            content: &req.content,
            ttl: req.ttl,
            proxied: req.proxied,
            priority: req.priority,
        };
        let context = ErrorContext {
            record_name: Some(req.name.clone()),
            ..self.zone_context()
        };

        let cf_record: CloudflareDnsRecord =
            self.post(&self.records_path(), &body, context).await?;

        self.cf_record_to_dns_record(cf_record)
    }

    async fn delete_record(&self, record_id: &str) -> Result<DeletedRecord> {
        let context = ErrorContext {
            record_id: Some(record_id.to_string()),
            ..self.zone_context()
        };

        let result: CloudflareDeleteResult = self
            .delete(&format!("{}/{record_id}", self.records_path()), context)
            .await?;

        Ok(DeletedRecord { id: result.id })
    }
}
