use std::sync::Arc;

use futures::future::join_all;
use mockito::Server;

use mod_info::config::DEFAULT_FALLBACK_URL;
use mod_info::release::assets::InstallerAssets;
use mod_info::release::cache::ReleaseCache;
use mod_info::release::client::GitHubReleaseClient;
use mod_info::release::service::LatestReleaseService;

const RELEASE_BODY: &str = r#"{
    "name": "SMAPI 4.1.0",
    "body": "Release notes",
    "tag_name": "4.1.0",
    "assets": [
        {"name": "SMAPI-4.1.0-installer.zip", "browser_download_url": "https://dl/main.zip"},
        {"name": "SMAPI-4.1.0-installer-for-developers.zip", "browser_download_url": "https://dl/dev.zip"}
    ]
}"#;

fn service(base_url: &str) -> LatestReleaseService {
    let api = GitHubReleaseClient::new(base_url).unwrap();
    LatestReleaseService::new(
        ReleaseCache::with_default_ttl(Arc::new(api)),
        InstallerAssets::new("SMAPI", DEFAULT_FALLBACK_URL).unwrap(),
        "Pathoschild/SMAPI",
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_lookups_hit_github_once() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/Pathoschild/SMAPI/releases/latest")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RELEASE_BODY)
        .expect(1)
        .create_async()
        .await;

    let service = service(&server.url());
    let results = join_all((0..5).map(|_| service.latest())).await;
    let again = service.latest().await.unwrap();

    mock.assert_async().await;
    for result in results {
        let summary = result.unwrap();
        assert_eq!(summary, again);
        assert_eq!(summary.name, "SMAPI 4.1.0");
        assert_eq!(summary.body, "Release notes");
        assert_eq!(summary.download_url, "https://dl/main.zip");
        assert_eq!(summary.dev_download_url, "https://dl/dev.zip");
    }
}

#[tokio::test]
async fn release_without_installers_falls_back_to_releases_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/Pathoschild/SMAPI/releases/latest")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name": "SMAPI 4.1.0", "body": null, "assets": []}"#)
        .create_async()
        .await;

    let summary = service(&server.url()).latest().await.unwrap();

    mock.assert_async().await;
    assert_eq!(summary.download_url, DEFAULT_FALLBACK_URL);
    assert_eq!(summary.dev_download_url, DEFAULT_FALLBACK_URL);
    assert_eq!(summary.body, "");
}

#[tokio::test]
async fn upstream_failure_is_not_cached() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/Pathoschild/SMAPI/releases/latest")
        .with_status(502)
        .expect(2)
        .create_async()
        .await;

    let service = service(&server.url());
    let first = service.latest().await;
    let second = service.latest().await;

    mock.assert_async().await;
    assert_eq!(
        first.unwrap_err().to_string(),
        "Invalid response: Unexpected status: 502 Bad Gateway"
    );
    assert!(second.is_err());
}
