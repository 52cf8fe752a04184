//! Shared helpers for the Cloudflare mock-server tests

#![allow(dead_code)]

use cfdns_provider::CloudflareProvider;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test_token_12345";
pub const TEST_ZONE: &str = "023e105f4ecef8ad9ca31a8372d0c353";

/// Path of the test zone's record collection.
pub fn records_path() -> String {
    format!("/zones/{TEST_ZONE}/dns_records")
}

/// Expected `Authorization` header value.
pub fn bearer() -> String {
    format!("Bearer {TEST_TOKEN}")
}

/// Provider pointed at the mock server.
pub fn provider_for(server: &MockServer) -> CloudflareProvider {
    CloudflareProvider::with_base_url(TEST_TOKEN, TEST_ZONE, server.uri())
        .expect("failed to build provider")
}

/// A Cloudflare record object as the API returns it.
pub fn cf_record(id: &str, record_type: &str, name: &str, content: &str) -> Value {
    json!({
        "id": id,
        "zone_id": TEST_ZONE,
        "zone_name": "example.com",
        "name": name,
        "type": record_type,
        "content": content,
        "proxiable": matches!(record_type, "A" | "AAAA" | "CNAME"),
        "proxied": false,
        "ttl": 3600,
        "locked": false,
        "created_on": "2024-01-15T10:30:00.123456Z",
        "modified_on": "2024-01-15T10:30:00.123456Z"
    })
}

/// Successful envelope around `result`.
pub fn success(result: Value) -> Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result
    })
}

/// Successful paginated envelope.
pub fn success_page(result: Value, page: u32, total_pages: u32, total_count: u32) -> Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result,
        "result_info": {
            "page": page,
            "per_page": 100,
            "count": result.as_array().map_or(0, Vec::len),
            "total_count": total_count,
            "total_pages": total_pages
        }
    })
}

/// Failed envelope with a single error.
pub fn failure(code: i64, message: &str) -> Value {
    json!({
        "success": false,
        "errors": [{ "code": code, "message": message }],
        "messages": [],
        "result": null
    })
}
