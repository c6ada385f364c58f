//! Browser operations and their JSON reports
//!
//! Each operation runs in its own session and produces a serializable
//! report. Extracted content is capped: text at 5,000 characters, markup
//! at 10,000.

use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::browser::session::with_session;
use crate::core::{BrowserConfig, CloudpilotError, Result};

/// Ceiling on extracted page text
pub const TEXT_LIMIT: usize = 5_000;

/// Ceiling on extracted markup
pub const HTML_LIMIT: usize = 10_000;

/// In-page extraction of search result cards
const SEARCH_RESULTS_JS: &str = r#"
    Array.from(document.querySelectorAll('div.g')).slice(0, 5).map(item => {
        const title = item.querySelector('h3')?.textContent || '';
        const link = item.querySelector('a')?.href || '';
        const snippet = item.querySelector('.VwiC3b')?.textContent || '';
        return { title, link, snippet };
    })
"#;

/// One search result card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

/// Report for the search command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub query: String,
    pub results: Vec<SearchHit>,
    pub timestamp: String,
}

/// Report for the screenshot command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenshotReport {
    pub url: String,
    pub screenshot: String,
    pub timestamp: String,
}

/// Report for the get_text command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageTextReport {
    pub url: String,
    pub title: String,
    pub text: String,
    pub timestamp: String,
}

/// Report for the get_html command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageHtmlReport {
    pub url: String,
    pub html: String,
    pub timestamp: String,
}

/// Report for the click_extract command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickExtractReport {
    pub url: String,
    pub clicked: String,
    pub extracted: String,
    pub timestamp: String,
}

/// First `limit` characters of a string, char-boundary safe
fn truncate_chars(s: &str, limit: usize) -> String {
    s.chars().take(limit).collect()
}

/// Validate a target address before any session is acquired
fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|_| CloudpilotError::InvalidUrl(url.to_string()))
}

fn timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Search the web and return the top result cards
pub async fn search(cfg: &BrowserConfig, query: &str) -> Result<SearchReport> {
    let target = Url::parse_with_params("https://www.google.com/search", &[("q", query)])
        .map_err(|_| CloudpilotError::InvalidUrl(query.to_string()))?;

    let query = query.to_string();
    with_session(cfg, move |session| {
        Box::pin(async move {
            session.goto_idle(target.as_str()).await?;

            let results: Vec<SearchHit> = session
                .page()
                .evaluate(SEARCH_RESULTS_JS)
                .await
                .map_err(|e| CloudpilotError::browser(format!("Result extraction failed: {}", e)))?
                .into_value()
                .map_err(|e| CloudpilotError::browser(format!("Result decode failed: {}", e)))?;

            debug!(count = results.len(), "extracted search results");

            Ok(SearchReport {
                query,
                results,
                timestamp: timestamp(),
            })
        })
    })
    .await
}

/// Take a full-page screenshot and save it to a file
pub async fn take_screenshot(
    cfg: &BrowserConfig,
    url: &str,
    output_path: &str,
) -> Result<ScreenshotReport> {
    let target = parse_url(url)?;
    let url = url.to_string();
    let output_path = output_path.to_string();
    with_session(cfg, move |session| {
        Box::pin(async move {
            session.goto_idle(target.as_str()).await?;

            let bytes = session
                .page()
                .screenshot(
                    ScreenshotParams::builder()
                        .format(CaptureScreenshotFormat::Png)
                        .full_page(true)
                        .build(),
                )
                .await
                .map_err(|e| CloudpilotError::browser(format!("Screenshot failed: {}", e)))?;
            tokio::fs::write(&output_path, &bytes).await?;

            Ok(ScreenshotReport {
                url,
                screenshot: output_path,
                timestamp: timestamp(),
            })
        })
    })
    .await
}

/// Get the page title and visible text (first 5,000 characters)
pub async fn get_page_text(cfg: &BrowserConfig, url: &str) -> Result<PageTextReport> {
    let target = parse_url(url)?;
    let url = url.to_string();
    with_session(cfg, move |session| {
        Box::pin(async move {
            session.goto_idle(target.as_str()).await?;
            let page = session.page();

            let title = page
                .evaluate("document.title")
                .await
                .ok()
                .and_then(|v| v.into_value::<String>().ok())
                .unwrap_or_default();

            let text: String = page
                .evaluate("document.body ? document.body.innerText : ''")
                .await
                .map_err(|e| CloudpilotError::browser(format!("Text extraction failed: {}", e)))?
                .into_value()
                .map_err(|e| CloudpilotError::browser(format!("Text decode failed: {}", e)))?;

            Ok(PageTextReport {
                url,
                title,
                text: truncate_chars(&text, TEXT_LIMIT),
                timestamp: timestamp(),
            })
        })
    })
    .await
}

/// Get the page markup (first 10,000 characters)
pub async fn get_page_html(cfg: &BrowserConfig, url: &str) -> Result<PageHtmlReport> {
    let target = parse_url(url)?;
    let url = url.to_string();
    with_session(cfg, move |session| {
        Box::pin(async move {
            session.goto_idle(target.as_str()).await?;

            let html = session
                .page()
                .content()
                .await
                .map_err(|e| CloudpilotError::browser(format!("Markup extraction failed: {}", e)))?;

            Ok(PageHtmlReport {
                url,
                html: truncate_chars(&html, HTML_LIMIT),
                timestamp: timestamp(),
            })
        })
    })
    .await
}

/// Click one element, then extract text from another
pub async fn click_and_extract(
    cfg: &BrowserConfig,
    url: &str,
    click_selector: &str,
    extract_selector: &str,
) -> Result<ClickExtractReport> {
    let target = parse_url(url)?;
    let url = url.to_string();
    let click_selector = click_selector.to_string();
    let extract_selector = extract_selector.to_string();
    with_session(cfg, move |session| {
        Box::pin(async move {
            session.goto_idle(target.as_str()).await?;
            let page = session.page();

            let element = page.find_element(&click_selector).await.map_err(|e| {
                CloudpilotError::browser(format!("Element '{}' not found: {}", click_selector, e))
            })?;
            element.click().await.map_err(|e| {
                CloudpilotError::browser(format!("Click on '{}' failed: {}", click_selector, e))
            })?;
            page.wait_for_navigation().await.map_err(|e| {
                CloudpilotError::browser(format!("Page did not settle after click: {}", e))
            })?;

            let extracted = page
                .find_element(&extract_selector)
                .await
                .map_err(|e| {
                    CloudpilotError::browser(format!(
                        "Element '{}' not found: {}",
                        extract_selector, e
                    ))
                })?
                .inner_text()
                .await
                .map_err(|e| CloudpilotError::browser(format!("Text extraction failed: {}", e)))?
                .unwrap_or_default();

            Ok(ClickExtractReport {
                url,
                clicked: click_selector,
                extracted,
                timestamp: timestamp(),
            })
        })
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_truncates_to_exact_limit() {
        let long = "x".repeat(TEXT_LIMIT + 1_000);
        let out = truncate_chars(&long, TEXT_LIMIT);
        assert_eq!(out.len(), TEXT_LIMIT);
        assert_eq!(out, long[..TEXT_LIMIT]);
    }

    #[test]
    fn test_html_truncates_to_exact_limit() {
        let long = "y".repeat(HTML_LIMIT * 2);
        let out = truncate_chars(&long, HTML_LIMIT);
        assert_eq!(out.len(), HTML_LIMIT);
        assert_eq!(out, long[..HTML_LIMIT]);
    }

    #[test]
    fn test_truncate_under_limit_is_identity() {
        assert_eq!(truncate_chars("short", TEXT_LIMIT), "short");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let s = "ß".repeat(10);
        let out = truncate_chars(&s, 4);
        assert_eq!(out.chars().count(), 4);
        assert_eq!(out, "ßßßß");
    }

    #[tokio::test]
    async fn test_invalid_url_rejected_before_launch() {
        let cfg = BrowserConfig::default();
        let err = get_page_text(&cfg, "not a url").await.unwrap_err();
        assert!(matches!(err, CloudpilotError::InvalidUrl(_)));
    }

    #[test]
    fn test_search_report_serializes() {
        let report = SearchReport {
            query: "rust programming".to_string(),
            results: vec![SearchHit {
                title: "The Rust Programming Language".to_string(),
                link: "https://www.rust-lang.org/".to_string(),
                snippet: "A language empowering everyone".to_string(),
            }],
            timestamp: "2024-01-01T00:00:00+00:00".to_string(),
        };
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"query\""));
        assert!(json.contains("rust-lang.org"));

        let parsed: SearchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.results.len(), 1);
    }

    #[test]
    fn test_page_text_report_serializes() {
        let report = PageTextReport {
            url: "https://example.com".to_string(),
            title: "Example Domain".to_string(),
            text: "Example text".to_string(),
            timestamp: "2024-01-01T00:00:00+00:00".to_string(),
        };
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"title\": \"Example Domain\""));
    }
}
