use std::fs;
use std::io::Cursor;

use emoji_art_engine::{decode_image, FailureKind, FetchSettings, Fetcher, ReqwestFetcher};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbaImage::new(width, height);
    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(image)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

fn url(raw: &str) -> Url {
    Url::parse(raw).unwrap()
}

#[tokio::test]
async fn fetcher_returns_image_bytes() {
    let server = MockServer::start().await;
    let body = png_bytes(5, 4);
    Mock::given(method("GET"))
        .and(path("/photo.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.clone(), "image/png"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let target = url(&format!("{}/photo.png", server.uri()));

    let output = fetcher.fetch(&target).await.expect("fetch ok");
    assert_eq!(output.metadata.original_url, target.to_string());
    assert_eq!(output.metadata.final_url, output.metadata.original_url);
    assert_eq!(output.metadata.content_type.as_deref(), Some("image/png"));
    assert_eq!(output.metadata.byte_len, body.len() as u64);
    assert_eq!(output.bytes.as_ref(), body.as_slice());

    let decoded = decode_image(&output.bytes).unwrap();
    assert_eq!((decoded.width, decoded.height), (5, 4));
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let target = url(&format!("{}/missing.png", server.uri()));

    let err = fetcher.fetch(&target).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_rejects_body_over_configured_cap() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "image/png")
                .set_body_bytes(vec![0_u8; 11]),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: Some(10),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let target = url(&format!("{}/large", server.uri()));

    let err = fetcher.fetch(&target).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn fetcher_reads_file_urls() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("background.png");
    let body = png_bytes(2, 2);
    fs::write(&file, &body).unwrap();

    let fetcher = ReqwestFetcher::default();
    let target = Url::from_file_path(&file).unwrap();

    let output = fetcher.fetch(&target).await.expect("file fetch ok");
    assert_eq!(output.bytes.as_ref(), body.as_slice());
    assert_eq!(output.metadata.content_type, None);
}

#[tokio::test]
async fn missing_file_is_an_io_failure() {
    let temp = TempDir::new().unwrap();
    let target = Url::from_file_path(temp.path().join("nope.png")).unwrap();

    let err = ReqwestFetcher::default().fetch(&target).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Io);
}

#[tokio::test]
async fn unsupported_scheme_is_rejected() {
    let err = ReqwestFetcher::default()
        .fetch(&url("ftp://files.example/a.png"))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedScheme {
            scheme: "ftp".to_string()
        }
    );
}
