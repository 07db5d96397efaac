//! Shared test helpers for creating SprintDownloader instances in tests.

use crate::config::Config;
use crate::downloader::SprintDownloader;
use crate::error::Result;
use crate::http::{HttpFetch, HttpResponse};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Base URL used with [`ScriptedFetcher`]
pub(crate) const TEST_BASE_URL: &str = "http://jira.test";

/// Configuration pointing at `base_url` and writing into `output_dir`
pub(crate) fn test_config(base_url: &str, output_dir: &Path) -> Config {
    Config {
        base_url: base_url.to_string(),
        username: "user@example.com".to_string(),
        api_token: "secret-token".to_string(),
        board_name: "Team Board".to_string(),
        sprint_keyword: "alpha".to_string(),
        issue_type: "Task".to_string(),
        attachment_keyword: "screenshot".to_string(),
        output_dir: output_dir.to_path_buf(),
        request_timeout: Some(std::time::Duration::from_secs(5)),
    }
}

/// In-memory [`HttpFetch`]: canned responses by exact URL, 404 for anything
/// else, and a log of every requested URL
#[derive(Default)]
pub(crate) struct ScriptedFetcher {
    responses: Mutex<HashMap<String, (u16, Vec<u8>)>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn respond(&self, url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.into(), (status, body.into()));
    }

    pub(crate) fn respond_json(&self, url: impl Into<String>, body: &Value) {
        self.respond(url, 200, body.to_string());
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn count_matching(&self, needle: &str) -> usize {
        self.requests()
            .iter()
            .filter(|url| url.contains(needle))
            .count()
    }
}

#[async_trait]
impl HttpFetch for ScriptedFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(url.to_string());
        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or((404, Vec::new()));
        Ok(HttpResponse {
            url: url.to_string(),
            status,
            body,
        })
    }
}

/// Downloader over a scripted fetcher rooted at [`TEST_BASE_URL`]
pub(crate) fn create_scripted_downloader(output_dir: &Path) -> (SprintDownloader, Arc<ScriptedFetcher>) {
    let fetcher = ScriptedFetcher::new();
    let downloader = SprintDownloader::with_fetcher(
        test_config(TEST_BASE_URL, output_dir),
        fetcher.clone(),
    );
    (downloader, fetcher)
}

/// Sprint page body holding `issues`
pub(crate) fn issue_page(start_at: usize, issues: Vec<Value>) -> Value {
    json!({
        "startAt": start_at,
        "maxResults": 50,
        "issues": issues,
    })
}

/// Listed issue as it appears in a sprint page
pub(crate) fn listed_issue(key: &str, issue_type: &str) -> Value {
    json!({
        "id": "1",
        "key": key,
        "fields": {
            "summary": format!("Summary of {key}"),
            "issuetype": { "name": issue_type },
        }
    })
}

/// Single-issue detail body with the given `(filename, content_url)` attachments
pub(crate) fn issue_detail(key: &str, summary: &str, attachments: &[(&str, &str)]) -> Value {
    let attachments: Vec<Value> = attachments
        .iter()
        .map(|(filename, content)| json!({ "filename": filename, "content": content }))
        .collect();
    json!({
        "key": key,
        "fields": {
            "summary": summary,
            "issuetype": { "name": "Task" },
            "attachment": attachments,
        }
    })
}
