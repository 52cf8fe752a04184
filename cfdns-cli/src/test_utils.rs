//! Test doubles for the console and the DNS provider.

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use cfdns_provider::{
    CreateDnsRecordRequest, DeletedRecord, DnsProvider, DnsRecord, DnsRecordType, ProviderError,
    Result,
};

use crate::util::Console;

const PROVIDER: &str = "mock";

pub fn record(id: &str, record_type: DnsRecordType, name: &str, content: &str) -> DnsRecord {
    DnsRecord {
        id: id.to_string(),
        zone_id: "zone-1".to_string(),
        record_type,
        name: name.to_string(),
        content: content.to_string(),
        ttl: 3600,
        proxied: false,
        priority: None,
        created_on: None,
        modified_on: None,
    }
}

pub fn auth_error() -> ProviderError {
    ProviderError::InvalidCredentials {
        provider: PROVIDER.to_string(),
        status: Some(401),
        raw_message: Some("Invalid API Token".to_string()),
    }
}

pub fn transport_error(status: u16, message: &str) -> ProviderError {
    ProviderError::Unknown {
        provider: PROVIDER.to_string(),
        status: Some(status),
        raw_code: None,
        raw_message: message.to_string(),
    }
}

/// Console fed from a fixed list of lines; records everything printed and prompted.
pub struct ScriptedConsole {
    input: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| (*l).to_string()).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn printed(&self, line: &str) -> bool {
        self.output.iter().any(|l| l == line)
    }

    pub fn printed_containing(&self, fragment: &str) -> bool {
        self.output.iter().any(|l| l.contains(fragment))
    }
}

impl Console for ScriptedConsole {
    fn println(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }
}

/// In-memory zone that counts calls.
#[derive(Default)]
pub struct MockProvider {
    records: Mutex<Vec<DnsRecord>>,
    created: Mutex<Vec<CreateDnsRecordRequest>>,
    deleted: Mutex<Vec<String>>,
    list_calls: Mutex<usize>,
    verify_calls: Mutex<usize>,
    delete_calls: Mutex<usize>,
    failure: Mutex<Option<ProviderError>>,
    token_inactive: Mutex<bool>,
    missing: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn with_records(records: Vec<DnsRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Make every remote call fail with `error`.
    pub fn fail_with(&self, error: ProviderError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Make deleting `id` fail as if the record were already gone.
    pub fn fail_delete_of(&self, id: &str) {
        self.missing.lock().unwrap().push(id.to_string());
    }

    pub fn set_token_inactive(&self) {
        *self.token_inactive.lock().unwrap() = true;
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    pub fn verify_calls(&self) -> usize {
        *self.verify_calls.lock().unwrap()
    }

    pub fn delete_calls(&self) -> usize {
        *self.delete_calls.lock().unwrap()
    }

    pub fn total_calls(&self) -> usize {
        self.list_calls() + self.verify_calls() + self.delete_calls() + self.created().len()
    }

    /// Requests that reached `create_record`, failed ones included.
    pub fn created(&self) -> Vec<CreateDnsRecordRequest> {
        self.created.lock().unwrap().clone()
    }

    /// Ids successfully deleted, in call order.
    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn record_ids(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.id.clone())
            .collect()
    }

    fn check_failure(&self) -> Result<()> {
        match self.failure.lock().unwrap().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DnsProvider for MockProvider {
    fn zone_id(&self) -> &str {
        "zone-1"
    }

    async fn verify_token(&self) -> Result<bool> {
        *self.verify_calls.lock().unwrap() += 1;
        self.check_failure()?;
        Ok(!*self.token_inactive.lock().unwrap())
    }

    async fn list_records(&self) -> Result<Vec<DnsRecord>> {
        *self.list_calls.lock().unwrap() += 1;
        self.check_failure()?;
        Ok(self.records.lock().unwrap().clone())
    }

    async fn create_record(&self, req: &CreateDnsRecordRequest) -> Result<DnsRecord> {
        self.created.lock().unwrap().push(req.clone());
        self.check_failure()?;

        let mut records = self.records.lock().unwrap();
        let mut created = record(
            &format!("new-{}", records.len() + 1),
            req.record_type,
            &req.name,
            &req.content,
        );
        created.ttl = req.ttl;
        created.proxied = req.proxied;
        created.priority = req.priority;
        records.push(created.clone());
        Ok(created)
    }

    async fn delete_record(&self, record_id: &str) -> Result<DeletedRecord> {
        *self.delete_calls.lock().unwrap() += 1;
        self.check_failure()?;

        let mut records = self.records.lock().unwrap();
        let position = records
            .iter()
            .position(|r| r.id == record_id)
            .filter(|_| !self.missing.lock().unwrap().iter().any(|m| m == record_id));
        let Some(position) = position else {
            return Err(ProviderError::RecordNotFound {
                provider: PROVIDER.to_string(),
                status: Some(404),
                record_id: record_id.to_string(),
                raw_message: Some("Record does not exist.".to_string()),
            });
        };

        records.remove(position);
        self.deleted.lock().unwrap().push(record_id.to_string());
        Ok(DeletedRecord {
            id: record_id.to_string(),
        })
    }
}
