//! Cloudflare provider tests against a mock API server
//!
//! ```bash
//! cargo test -p cfdns-provider --test cloudflare_test
//! ```

mod common;

use std::sync::Mutex;

use cfdns_provider::{
    CreateDnsRecordRequest, DnsProvider, DnsRecordType, ErrorCategory, ProviderError,
};
use common::{
    TEST_ZONE, bearer, cf_record, failure, provider_for, records_path, success, success_page,
};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

// ============ list ============

#[tokio::test]
async fn list_records_preserves_remote_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(records_path()))
        .and(header("Authorization", bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_page(
            json!([
                cf_record("r-2", "TXT", "example.com", "v=spf1 -all"),
                cf_record("r-1", "A", "www.example.com", "192.0.2.1"),
                cf_record("r-3", "MX", "example.com", "mail.example.com"),
            ]),
            1,
            1,
            3,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let records = provider.list_records().await.unwrap();

    let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["r-2", "r-1", "r-3"]);
    assert_eq!(records[1].record_type, DnsRecordType::A);
    assert_eq!(records[1].name, "www.example.com");
    assert_eq!(records[1].content, "192.0.2.1");
    assert_eq!(records[1].ttl, 3600);
    assert!(!records[1].proxied);
    assert_eq!(records[1].zone_id, TEST_ZONE);
    assert!(records[1].created_on.is_some());
}

#[tokio::test]
async fn list_records_follows_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(records_path()))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_page(
            json!([cf_record("r-1", "A", "a.example.com", "192.0.2.1")]),
            1,
            2,
            2,
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(records_path()))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_page(
            json!([cf_record("r-2", "AAAA", "b.example.com", "2001:db8::1")]),
            2,
            2,
            2,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let records = provider.list_records().await.unwrap();

    let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["r-1", "r-2"]);
}

#[tokio::test]
async fn list_records_empty_zone() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(records_path()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success_page(json!([]), 1, 0, 0)),
        )
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    assert!(provider.list_records().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_records_skips_unmanaged_types() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(records_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_page(
            json!([
                cf_record("r-1", "A", "www.example.com", "192.0.2.1"),
                cf_record("r-2", "HTTPS", "example.com", "1 . alpn=h2"),
                cf_record("r-3", "PTR", "5.113.0.203.in-addr.arpa", "host.example.com"),
            ]),
            1,
            1,
            3,
        )))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let records = provider.list_records().await.unwrap();

    let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["r-1", "r-3"]);
    assert_eq!(records[1].record_type, DnsRecordType::Ptr);
}

#[tokio::test]
async fn list_records_with_rejected_token_is_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(records_path()))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(failure(10000, "Authentication error")),
        )
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.list_records().await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Auth);
    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("Authentication error"), "{err}");
}

#[tokio::test]
async fn list_records_forbidden_without_envelope_is_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(records_path()))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.list_records().await.unwrap_err();

    assert!(matches!(
        err,
        ProviderError::PermissionDenied { status: Some(403), raw_message: Some(ref m), .. }
            if m == "Forbidden"
    ));
    assert!(err.is_auth());
}

#[tokio::test]
async fn list_records_server_error_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(records_path()))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.list_records().await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Transport);
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("<html>oops</html>"), "{err}");
}

#[tokio::test]
async fn list_records_unknown_zone() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(records_path()))
        .respond_with(ResponseTemplate::new(400).set_body_json(failure(
            7003,
            "Could not route to /zones/bogus/dns_records, perhaps your object identifier is invalid?",
        )))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.list_records().await.unwrap_err();

    assert!(matches!(
        err,
        ProviderError::ZoneNotFound { ref zone_id, status: Some(400), .. } if zone_id == TEST_ZONE
    ));
}

#[tokio::test]
async fn rate_limit_is_reported_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(records_path()))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "12")
                .set_body_string("slow down"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.list_records().await.unwrap_err();

    assert!(matches!(
        err,
        ProviderError::RateLimited { retry_after: Some(12), .. }
    ));
    assert_eq!(
        err.to_string(),
        "[cloudflare] Rate limited (HTTP 429, retry after 12s): slow down"
    );
}

#[tokio::test]
async fn rate_limit_message_reaches_display() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(records_path()))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "success": false,
            "errors": [{ "code": 10013, "message": "Rate limited by zone quota XYZ" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.list_records().await.unwrap_err();

    let shown = err.to_string();
    assert!(shown.contains("HTTP 429"), "{shown}");
    assert!(shown.contains("Rate limited by zone quota XYZ"), "{shown}");
}

// ============ add ============

#[tokio::test]
async fn create_record_sends_full_body_and_returns_created_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(records_path()))
        .and(header("Authorization", bearer().as_str()))
        .and(body_json(json!({
            "type": "A",
            "name": "test.example.com",
            "content": "203.0.113.5",
            "ttl": 3600,
            "proxied": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(cf_record(
            "new-id",
            "A",
            "test.example.com",
            "203.0.113.5",
        ))))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let request = CreateDnsRecordRequest::new(DnsRecordType::A, "test.example.com", "203.0.113.5");
    let record = provider.create_record(&request).await.unwrap();

    assert_eq!(record.id, "new-id");
    assert_eq!(record.record_type, DnsRecordType::A);
    assert_eq!(record.name, "test.example.com");
    assert_eq!(record.content, "203.0.113.5");
    assert_eq!(record.ttl, 3600);
    assert!(!record.proxied);
}

#[tokio::test]
async fn create_record_includes_priority_when_set() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(records_path()))
        .and(body_partial_json(json!({ "type": "MX", "priority": 10 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(cf_record(
            "mx-id",
            "MX",
            "example.com",
            "mail.example.com",
        ))))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let request = CreateDnsRecordRequest::new(DnsRecordType::Mx, "example.com", "mail.example.com")
        .with_priority(Some(10));
    let record = provider.create_record(&request).await.unwrap();
    assert_eq!(record.record_type, DnsRecordType::Mx);
}

#[tokio::test]
async fn create_record_returns_requested_type_for_every_type() {
    let server = MockServer::start().await;

    for t in DnsRecordType::ALL {
        Mock::given(method("POST"))
            .and(path(records_path()))
            .and(body_partial_json(json!({ "type": t.as_str() })))
            .respond_with(ResponseTemplate::new(200).set_body_json(success(cf_record(
                &format!("id-{}", t.as_str()),
                t.as_str(),
                "t.example.com",
                "value",
            ))))
            .expect(1)
            .mount(&server)
            .await;
    }

    let provider = provider_for(&server);
    for t in DnsRecordType::ALL {
        let request = CreateDnsRecordRequest::new(t, "t.example.com", "value");
        let record = provider.create_record(&request).await.unwrap();
        assert_eq!(record.record_type, t);
    }
}

#[tokio::test]
async fn create_record_surfaces_remote_validation_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(records_path()))
        .respond_with(ResponseTemplate::new(400).set_body_json(failure(
            9005,
            "Content for A record is invalid. Must be a valid IPv4 address",
        )))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let request = CreateDnsRecordRequest::new(DnsRecordType::A, "bad.example.com", "not-an-ip");
    let err = provider.create_record(&request).await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Transport);
    assert_eq!(err.status(), Some(400));
    assert!(
        err.to_string()
            .contains("Content for A record is invalid. Must be a valid IPv4 address"),
        "{err}"
    );
}

#[tokio::test]
async fn create_record_duplicate() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(records_path()))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(failure(81057, "Record already exists.")),
        )
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let request = CreateDnsRecordRequest::new(DnsRecordType::A, "dup.example.com", "192.0.2.1");
    let err = provider.create_record(&request).await.unwrap_err();

    assert!(matches!(
        err,
        ProviderError::RecordExists { ref record_name, .. } if record_name == "dup.example.com"
    ));
}

// ============ delete ============

#[tokio::test]
async fn delete_record_returns_deleted_id() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{}/r-1", records_path())))
        .and(header("Authorization", bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({ "id": "r-1" }))))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let deleted = provider.delete_record("r-1").await.unwrap();
    assert_eq!(deleted.id, "r-1");
}

#[tokio::test]
async fn delete_missing_record_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{}/gone", records_path())))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(failure(81044, "Record does not exist.")),
        )
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.delete_record("gone").await.unwrap_err();

    assert!(matches!(
        err,
        ProviderError::RecordNotFound { ref record_id, status: Some(404), .. } if record_id == "gone"
    ));
}

// ============ verify ============

#[tokio::test]
async fn verify_token_active() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/tokens/verify"))
        .and(header("Authorization", bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({
            "id": "ed17574386854bf78a67040be0a770b0",
            "status": "active"
        }))))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    assert!(provider.verify_token().await.unwrap());
}

#[tokio::test]
async fn verify_token_disabled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/tokens/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({
            "id": "ed17574386854bf78a67040be0a770b0",
            "status": "disabled"
        }))))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    assert!(!provider.verify_token().await.unwrap());
}

#[tokio::test]
async fn verify_token_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/tokens/verify"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(failure(1000, "Invalid API Token")),
        )
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.verify_token().await.unwrap_err();
    assert!(err.is_auth());
}

// ============ add → list → delete → list ============

/// In-memory zone answering list/create/delete like the real API.
struct FakeZone {
    records: Mutex<Vec<Value>>,
    next_id: Mutex<u32>,
}

impl FakeZone {
    fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }
}

impl Respond for FakeZone {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut records = self.records.lock().unwrap();
        let collection = records_path();
        let url_path = request.url.path().to_string();

        match request.method.as_str() {
            "GET" if url_path == collection => {
                let count = u32::try_from(records.len()).unwrap();
                ResponseTemplate::new(200).set_body_json(success_page(
                    Value::Array(records.clone()),
                    1,
                    1,
                    count,
                ))
            }
            "POST" if url_path == collection => {
                let body: Value = serde_json::from_slice(&request.body).unwrap();
                let mut next_id = self.next_id.lock().unwrap();
                let mut record = cf_record(
                    &format!("rec-{next_id}"),
                    body["type"].as_str().unwrap(),
                    body["name"].as_str().unwrap(),
                    body["content"].as_str().unwrap(),
                );
                *next_id += 1;
                record["ttl"] = body["ttl"].clone();
                record["proxied"] = body["proxied"].clone();
                records.push(record.clone());
                ResponseTemplate::new(200).set_body_json(success(record))
            }
            "DELETE" => {
                let id = url_path.rsplit('/').next().unwrap_or_default().to_string();
                let before = records.len();
                records.retain(|r| r["id"] != id.as_str());
                if records.len() == before {
                    ResponseTemplate::new(404)
                        .set_body_json(failure(81044, "Record does not exist."))
                } else {
                    ResponseTemplate::new(200).set_body_json(success(json!({ "id": id })))
                }
            }
            _ => ResponseTemplate::new(405),
        }
    }
}

#[tokio::test]
async fn add_then_delete_round_trip() {
    let server = MockServer::start().await;

    Mock::given(header("Authorization", bearer().as_str()))
        .respond_with(FakeZone::new())
        .mount(&server)
        .await;

    let provider = provider_for(&server);

    let request = CreateDnsRecordRequest::new(DnsRecordType::A, "test.example.com", "203.0.113.5")
        .with_ttl(3600)
        .with_proxied(false);
    let created = provider.create_record(&request).await.unwrap();
    assert!(!created.id.is_empty());

    let listed = provider.list_records().await.unwrap();
    let found = listed
        .iter()
        .find(|r| r.id == created.id)
        .expect("created record should be listed");
    assert_eq!(found.name, "test.example.com");
    assert_eq!(found.content, "203.0.113.5");
    assert_eq!(found.ttl, 3600);
    assert!(!found.proxied);

    let deleted = provider.delete_record(&created.id).await.unwrap();
    assert_eq!(deleted.id, created.id);

    let listed = provider.list_records().await.unwrap();
    assert!(listed.iter().all(|r| r.id != created.id));

    // Deleting again is not idempotent.
    let err = provider.delete_record(&created.id).await.unwrap_err();
    assert!(matches!(err, ProviderError::RecordNotFound { .. }));
}
