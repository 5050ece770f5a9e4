use fsmbti::error::ShareError;
use fsmbti::share::{ShareConfig, build_share_client, download_qr};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LINK: &str = "https://quiz.example.com/fsmbti?team=qa";
const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn share_config(server: &MockServer) -> ShareConfig {
    ShareConfig {
        link: Some(LINK.into()),
        qr_endpoint: format!("{}/v1/create-qr-code/", server.uri()),
        qr_size: 200,
    }
}

#[tokio::test]
async fn downloads_qr_image_for_link() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/create-qr-code/"))
        .and(query_param("size", "200x200"))
        .and(query_param("data", LINK))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_BYTES))
        .expect(1)
        .mount(&server)
        .await;

    let tmp = TempDir::new().unwrap();
    let dest = tmp.path().join("qr/share.png");
    let url = share_config(&server).qr_url().unwrap().unwrap();

    let written = download_qr(&build_share_client(), &url, &dest).await.unwrap();

    assert_eq!(written, PNG_BYTES.len());
    assert_eq!(std::fs::read(&dest).unwrap(), PNG_BYTES);
}

#[tokio::test]
async fn service_error_is_reported_and_nothing_written() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/create-qr-code/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let tmp = TempDir::new().unwrap();
    let dest = tmp.path().join("share.png");
    let url = share_config(&server).qr_url().unwrap().unwrap();

    let err = download_qr(&build_share_client(), &url, &dest)
        .await
        .unwrap_err();

    assert!(matches!(err, ShareError::Status(503)));
    assert!(!dest.exists());
}
