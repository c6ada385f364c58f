//! Browser operation integration tests
//!
//! These drive a real Chromium install and live network, so they are
//! ignored by default.

use cloudpilot::browser::ops;
use cloudpilot::core::BrowserConfig;

#[tokio::test]
#[ignore] // Requires a local Chromium install
async fn test_get_text_from_example_com() {
    let cfg = BrowserConfig::default();
    let report = ops::get_page_text(&cfg, "https://example.com")
        .await
        .expect("page text");

    assert_eq!(report.url, "https://example.com");
    assert!(!report.title.is_empty());
    assert!(report.text.chars().count() <= ops::TEXT_LIMIT);
}

#[tokio::test]
#[ignore] // Requires a local Chromium install
async fn test_get_html_from_example_com() {
    let cfg = BrowserConfig::default();
    let report = ops::get_page_html(&cfg, "https://example.com")
        .await
        .expect("page markup");

    assert!(report.html.to_lowercase().contains("<html"));
    assert!(report.html.chars().count() <= ops::HTML_LIMIT);
}

#[tokio::test]
#[ignore] // Requires a local Chromium install
async fn test_screenshot_writes_file() {
    let cfg = BrowserConfig::default();
    let path = std::env::temp_dir().join("webpilot-screenshot-test.png");
    let path_str = path.to_string_lossy().into_owned();

    let report = ops::take_screenshot(&cfg, "https://example.com", &path_str)
        .await
        .expect("screenshot");

    assert_eq!(report.screenshot, path_str);
    assert!(path.exists(), "screenshot file should exist");
    let _ = std::fs::remove_file(&path);
}
