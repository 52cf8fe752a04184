//! Record lines

use cfdns_provider::DnsRecord;

use crate::model::RecordSnapshot;
use crate::util::Console;

/// Cloudflare's "automatic" TTL.
const TTL_AUTO: u32 = 1;

/// `"ID: .., Type: .., Name: .., Content: .., TTL: .., Proxied: .."`
pub fn record_fields(record: &DnsRecord) -> String {
    let mut line = format!(
        "ID: {}, Type: {}, Name: {}, Content: {}",
        record.id, record.record_type, record.name, record.content
    );
    if let Some(priority) = record.priority {
        line.push_str(&format!(", Priority: {priority}"));
    }
    if record.ttl == TTL_AUTO {
        line.push_str(", TTL: auto");
    } else {
        line.push_str(&format!(", TTL: {}", record.ttl));
    }
    line.push_str(&format!(", Proxied: {}", record.proxied));
    line
}

pub fn record_line(index: usize, record: &DnsRecord) -> String {
    format!("{index}. {}", record_fields(record))
}

pub fn render_records(console: &mut dyn Console, snapshot: &RecordSnapshot) {
    if snapshot.is_empty() {
        console.println("No DNS records found.");
        return;
    }

    console.println("DNS Records:");
    for (i, record) in snapshot.records().iter().enumerate() {
        console.println(&record_line(i + 1, record));
    }
}

pub fn render_created(console: &mut dyn Console, record: &DnsRecord) {
    console.println("Added DNS record:");
    console.println(&record_fields(record));
}

pub fn render_deleted(console: &mut dyn Console, record_id: &str) {
    console.println(&format!("Deleted DNS record ID {record_id}"));
}
