use super::*;
use crate::config::PAGE_SIZE;
use crate::downloader::test_helpers::{
    ScriptedFetcher, TEST_BASE_URL, create_scripted_downloader, issue_detail, issue_page,
    listed_issue, test_config,
};
use crate::error::Error;
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod download;
