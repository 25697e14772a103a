//! End-to-end export tests against a mock records service
//!
//! Each test stands up a mockito server for the token endpoint and the
//! records API, runs a full export through the HTTP adapters, and reads the
//! resulting ZIP back.

use base64::{engine::general_purpose, Engine as _};
use casefile::config::{parse_config, CasefileConfig};
use casefile::core::export::ExportRun;
use casefile::domain::{AuthError, CasefileError, FetchError};
use mockito::{Matcher, Server, ServerGuard};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

fn config_for(server: &ServerGuard, dir: &TempDir) -> CasefileConfig {
    let mut config = parse_config(
        r#"
[application]
client = "acme"

[auth]
endpoint = "https://auth.example.com/oauth/token"
client_id = "client-123"
client_secret = "s3cret"
audience = "https://api.example.com"
"#,
    )
    .unwrap();
    config.auth.endpoint = format!("{}/oauth/token", server.url());
    config.api.base_url = format!("{}/api/v1", server.url());
    config.api.timeout_seconds = 5;
    config.export.output_dir = dir.path().join("exports").display().to_string();
    config
}

async fn mock_token(server: &mut ServerGuard) {
    server
        .mock("POST", "/oauth/token")
        .match_body(Matcher::UrlEncoded(
            "grant_type".into(),
            "client_credentials".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token": "tok-1", "expires_in": 3600}"#)
        .create_async()
        .await;
}

async fn mock_json(server: &mut ServerGuard, path: &str, body: String) {
    server
        .mock("GET", path)
        .match_header("authorization", "Bearer tok-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;
}

async fn mock_document(
    server: &mut ServerGuard,
    organization_id: i64,
    document_id: i64,
    filename: &str,
    content: &[u8],
) {
    let body = serde_json::json!({
        "Content": general_purpose::STANDARD.encode(content),
        "Filename": filename,
    });
    mock_json(
        server,
        &format!("/api/v1/companies/{organization_id}/documents/{document_id}"),
        body.to_string(),
    )
    .await;
}

/// Sorted entry names and their contents
fn read_archive(path: &Path) -> Vec<(String, Vec<u8>)> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut entries = Vec::new();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).unwrap();
        let mut content = Vec::new();
        entry.read_to_end(&mut content).unwrap();
        entries.push((entry.name().to_string(), content));
    }
    entries.sort();
    entries
}

#[tokio::test]
async fn test_empty_organization_produces_no_folder() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();

    mock_token(&mut server).await;
    mock_json(
        &mut server,
        "/api/v1/companies",
        r#"[{"CompanyId": 1, "CompanyName": "Acme Corp"},
            {"CompanyId": 2, "CompanyName": "Beta LLC"}]"#
            .to_string(),
    )
    .await;
    mock_json(
        &mut server,
        "/api/v1/companies/1/documents",
        r#"[{"Id": 10, "Filename": "contract.pdf"}]"#.to_string(),
    )
    .await;
    mock_json(&mut server, "/api/v1/companies/2/documents", "[]".to_string()).await;
    mock_document(&mut server, 1, 10, "contract.pdf", b"%PDF-1.4 contract").await;

    let outcome = ExportRun::from_config(config_for(&server, &dir))
        .unwrap()
        .run()
        .await
        .unwrap();

    let archive = outcome.archive_path.clone().unwrap();
    assert!(archive
        .file_name()
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("acme_documents_"));
    assert_eq!(
        read_archive(&archive),
        vec![(
            "Acme Corp/contract_10.pdf".to_string(),
            b"%PDF-1.4 contract".to_vec()
        )]
    );
    assert_eq!(outcome.organizations_processed, 2);
    assert_eq!(outcome.documents_saved, 1);
    assert!(outcome.documents_failed.is_empty());
}

#[tokio::test]
async fn test_disallowed_characters_are_removed_from_folder() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();

    mock_token(&mut server).await;
    mock_json(
        &mut server,
        "/api/v1/companies",
        r#"[{"CompanyId": 3, "CompanyName": "Gamma/Inc"}]"#.to_string(),
    )
    .await;
    mock_json(
        &mut server,
        "/api/v1/companies/3/documents",
        r#"[{"Id": 20, "Filename": "notes.txt"}]"#.to_string(),
    )
    .await;
    mock_document(&mut server, 3, 20, "notes.txt", b"minutes").await;

    let outcome = ExportRun::from_config(config_for(&server, &dir))
        .unwrap()
        .run()
        .await
        .unwrap();

    let names: Vec<String> = read_archive(outcome.archive_path.as_ref().unwrap())
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["GammaInc/notes_20.txt".to_string()]);
}

#[tokio::test]
async fn test_failed_document_does_not_stop_siblings() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();

    mock_token(&mut server).await;
    mock_json(
        &mut server,
        "/api/v1/companies",
        r#"[{"CompanyId": 4, "CompanyName": "Delta"}]"#.to_string(),
    )
    .await;
    mock_json(
        &mut server,
        "/api/v1/companies/4/documents",
        r#"[{"Id": 30, "Filename": "x.pdf"}, {"Id": 31, "Filename": "y.pdf"}]"#.to_string(),
    )
    .await;
    server
        .mock("GET", "/api/v1/companies/4/documents/30")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;
    mock_document(&mut server, 4, 31, "y.pdf", b"y").await;

    let outcome = ExportRun::from_config(config_for(&server, &dir))
        .unwrap()
        .run()
        .await
        .unwrap();

    let names: Vec<String> = read_archive(outcome.archive_path.as_ref().unwrap())
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["Delta/y_31.pdf".to_string()]);
    assert_eq!(outcome.documents_saved, 1);
    assert_eq!(outcome.documents_failed.len(), 1);
    assert_eq!(outcome.documents_failed[0].document_id.get(), 30);
    assert!(!outcome.is_successful());
}

#[tokio::test]
async fn test_token_failure_creates_no_archive() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();

    server
        .mock("POST", "/oauth/token")
        .with_status(401)
        .with_body(r#"{"error": "invalid_client"}"#)
        .create_async()
        .await;
    let companies = server
        .mock("GET", "/api/v1/companies")
        .expect(0)
        .create_async()
        .await;

    let result = ExportRun::from_config(config_for(&server, &dir))
        .unwrap()
        .run()
        .await;

    companies.assert_async().await;
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        CasefileError::Authentication(AuthError::Rejected { status: 401, .. })
    ));
    assert_eq!(err.exit_code(), 3);
    assert!(!dir.path().join("exports").exists());
}

#[tokio::test]
async fn test_repeated_filenames_do_not_collide() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();

    mock_token(&mut server).await;
    mock_json(
        &mut server,
        "/api/v1/companies",
        r#"[{"CompanyId": 5, "CompanyName": "Epsilon"}]"#.to_string(),
    )
    .await;
    mock_json(
        &mut server,
        "/api/v1/companies/5/documents",
        r#"[{"Id": 40, "Filename": "report.pdf"}, {"Id": 41, "Filename": "report.pdf"}]"#
            .to_string(),
    )
    .await;
    mock_document(&mut server, 5, 40, "report.pdf", b"first").await;
    mock_document(&mut server, 5, 41, "report.pdf", b"second").await;

    let outcome = ExportRun::from_config(config_for(&server, &dir))
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(
        read_archive(outcome.archive_path.as_ref().unwrap()),
        vec![
            ("Epsilon/report_40.pdf".to_string(), b"first".to_vec()),
            ("Epsilon/report_41.pdf".to_string(), b"second".to_vec()),
        ]
    );
}

#[tokio::test]
async fn test_document_listing_failure_skips_organization() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();

    mock_token(&mut server).await;
    mock_json(
        &mut server,
        "/api/v1/companies",
        r#"[{"CompanyId": 6, "CompanyName": "Zeta"},
            {"CompanyId": 7, "CompanyName": "Eta"}]"#
            .to_string(),
    )
    .await;
    server
        .mock("GET", "/api/v1/companies/6/documents")
        .with_status(503)
        .create_async()
        .await;
    mock_json(
        &mut server,
        "/api/v1/companies/7/documents",
        r#"[{"Id": 70}]"#.to_string(),
    )
    .await;
    mock_document(&mut server, 7, 70, "deed.tiff", b"deed").await;

    let outcome = ExportRun::from_config(config_for(&server, &dir))
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(outcome.organizations_processed, 1);
    assert_eq!(outcome.organizations_skipped.len(), 1);
    assert_eq!(outcome.organizations_skipped[0].id.get(), 6);
    let names: Vec<String> = read_archive(outcome.archive_path.as_ref().unwrap())
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["Eta/deed_70.tiff".to_string()]);
}

#[tokio::test]
async fn test_organization_listing_failure_aborts() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();

    mock_token(&mut server).await;
    server
        .mock("GET", "/api/v1/companies")
        .with_status(500)
        .create_async()
        .await;

    let err = ExportRun::from_config(config_for(&server, &dir))
        .unwrap()
        .run()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CasefileError::Fetch(FetchError::ServerError { status: 500, .. })
    ));
    assert_eq!(err.exit_code(), 4);
    assert!(!dir.path().join("exports").exists());
}
