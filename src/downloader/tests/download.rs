use super::*;
use crate::report::RunCounters;

fn attachment_url(name: &str) -> String {
    format!("{TEST_BASE_URL}/secure/attachment/1/{name}")
}

#[tokio::test]
async fn test_download_writes_sanitized_name_and_report() {
    let temp_dir = tempdir().unwrap();
    let (downloader, fetcher) = create_scripted_downloader(temp_dir.path());
    let url = attachment_url("screenshot1.png");
    fetcher.respond(&url, 200, b"\x89PNG\r\n".to_vec());

    let mut counters = RunCounters {
        matched_issues: 3,
        downloaded: 0,
    };
    let path = downloader
        .download_attachment(&url, "Crash: <Editor> / save?", "screenshot1.png", &mut counters)
        .await
        .unwrap();

    assert_eq!(path, temp_dir.path().join("Crash_ _Editor_ _ save_.png"));
    assert_eq!(std::fs::read(&path).unwrap(), b"\x89PNG\r\n");
    assert_eq!(counters.downloaded, 1);

    let report = std::fs::read_to_string(temp_dir.path().join("report.txt")).unwrap();
    assert_eq!(
        report,
        "Total JiraTickets Count : 3\nTotal Count Of Downloading Images : 1\nRemaining Count Of Images : 2"
    );
}

#[tokio::test]
async fn test_download_overwrites_existing_file() {
    let temp_dir = tempdir().unwrap();
    let (downloader, fetcher) = create_scripted_downloader(temp_dir.path());
    let existing = temp_dir.path().join("Same headline.png");
    std::fs::write(&existing, b"old contents that are longer").unwrap();

    let url = attachment_url("screenshot-b.png");
    fetcher.respond(&url, 200, b"new".to_vec());

    let mut counters = RunCounters::default();
    downloader
        .download_attachment(&url, "Same headline", "screenshot-b.png", &mut counters)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&existing).unwrap(), b"new");
    assert_eq!(counters.downloaded, 1);
}

#[tokio::test]
async fn test_download_non_success_leaves_counters_and_disk_untouched() {
    let temp_dir = tempdir().unwrap();
    let (downloader, fetcher) = create_scripted_downloader(temp_dir.path());
    let url = attachment_url("screenshot.png");
    fetcher.respond(&url, 403, "forbidden");

    let mut counters = RunCounters {
        matched_issues: 1,
        downloaded: 0,
    };
    let result = downloader
        .download_attachment(&url, "Headline", "screenshot.png", &mut counters)
        .await;

    assert!(matches!(result, Err(Error::HttpStatus { status: 403, .. })));
    assert_eq!(counters.downloaded, 0);
    assert!(!temp_dir.path().join("Headline.png").exists());
    assert!(!temp_dir.path().join("report.txt").exists());
}

#[tokio::test]
async fn test_download_into_missing_directory_is_io_error() {
    let temp_dir = tempdir().unwrap();
    let (downloader, fetcher) = create_scripted_downloader(&temp_dir.path().join("missing"));
    let url = attachment_url("screenshot.png");
    fetcher.respond(&url, 200, b"data".to_vec());

    let mut counters = RunCounters::default();
    let result = downloader
        .download_attachment(&url, "Headline", "screenshot.png", &mut counters)
        .await;

    assert!(matches!(result, Err(Error::Io(_))));
    assert_eq!(counters.downloaded, 0);
}

#[tokio::test]
async fn test_download_without_extension_uses_bare_headline() {
    let temp_dir = tempdir().unwrap();
    let (downloader, fetcher) = create_scripted_downloader(temp_dir.path());
    let url = attachment_url("screenshot");
    fetcher.respond(&url, 200, b"raw".to_vec());

    let mut counters = RunCounters::default();
    let path = downloader
        .download_attachment(&url, "No extension", "screenshot", &mut counters)
        .await
        .unwrap();

    assert_eq!(path, temp_dir.path().join("No extension"));
}

#[tokio::test]
async fn test_report_tracks_successive_downloads() {
    let temp_dir = tempdir().unwrap();
    let (downloader, fetcher) = create_scripted_downloader(temp_dir.path());
    let first = attachment_url("screenshot-1.png");
    let second = attachment_url("screenshot-2.png");
    fetcher.respond(&first, 200, b"1".to_vec());
    fetcher.respond(&second, 200, b"2".to_vec());

    let mut counters = RunCounters {
        matched_issues: 4,
        downloaded: 0,
    };
    downloader
        .download_attachment(&first, "One", "screenshot-1.png", &mut counters)
        .await
        .unwrap();
    downloader
        .download_attachment(&second, "Two", "screenshot-2.png", &mut counters)
        .await
        .unwrap();

    let report = std::fs::read_to_string(downloader.report.path()).unwrap();
    assert_eq!(
        report,
        "Total JiraTickets Count : 4\nTotal Count Of Downloading Images : 2\nRemaining Count Of Images : 2"
    );
}

#[tokio::test]
async fn test_slow_attachment_is_not_cut_off_by_request_timeout() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/secure/attachment/5/screenshot-large.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(b"LARGE".to_vec())
                .set_delay(std::time::Duration::from_millis(1500)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp_dir = tempdir().unwrap();
    let config = Config {
        request_timeout: Some(std::time::Duration::from_secs(1)),
        ..test_config(&mock_server.uri(), temp_dir.path())
    };
    let downloader = SprintDownloader::new(config).unwrap();
    let url = format!("{}/secure/attachment/5/screenshot-large.png", mock_server.uri());

    let mut counters = RunCounters::default();
    let path = downloader
        .download_attachment(&url, "Large capture", "screenshot-large.png", &mut counters)
        .await
        .unwrap();

    assert_eq!(std::fs::read(path).unwrap(), b"LARGE");
    assert_eq!(counters.downloaded, 1);
}

#[tokio::test]
async fn test_dot_summary_without_extension_writes_placeholder_name() {
    let temp_dir = tempdir().unwrap();
    let (downloader, fetcher) = create_scripted_downloader(temp_dir.path());
    let url = attachment_url("screenshot");
    fetcher.respond(&url, 200, b"raw".to_vec());

    let mut counters = RunCounters::default();
    let path = downloader
        .download_attachment(&url, "..", "screenshot", &mut counters)
        .await
        .unwrap();

    assert_eq!(path, temp_dir.path().join("_"));
    assert_eq!(std::fs::read(&path).unwrap(), b"raw");
    assert_eq!(counters.downloaded, 1);
}
