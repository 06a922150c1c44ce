use std::sync::Mutex;

use mockito::Matcher;
use serde_json::json;
use tooldex::catalog::Catalog;
use tooldex::error::FetchError;
use tooldex::normalize::ValidationError;
use tooldex::report::{RecordKind, Reporter};
use tooldex::Settings;

const TOOLS_TABLE: &str = "tbl_tools";
const POSTS_TABLE: &str = "tbl_posts";

fn settings(base_url: &str) -> Settings {
    Settings {
        base_url: base_url.to_string(),
        api_token: "test-token".to_string(),
        tools_table_id: TOOLS_TABLE.to_string(),
        tools_view_id: "vw_tools".to_string(),
        posts_table_id: POSTS_TABLE.to_string(),
        posts_view_id: "vw_posts".to_string(),
        environment: "test".to_string(),
    }
}

/// Captures reported diagnostics so tests can assert on recovered failures.
#[derive(Default)]
struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn transport_failure(&self, operation: &str, error: &FetchError) {
        self.events
            .lock()
            .unwrap()
            .push(format!("transport:{}:{}", operation, error));
    }

    fn record_rejected(&self, kind: RecordKind, error: &ValidationError) {
        self.events
            .lock()
            .unwrap()
            .push(format!("rejected:{}:{}", kind.as_str(), error.field));
    }

    fn lookup_refused(&self, operation: &str, slug: &str) {
        self.events
            .lock()
            .unwrap()
            .push(format!("refused:{}:{}", operation, slug));
    }
}

fn catalog(server: &mockito::ServerGuard) -> Catalog<RecordingReporter> {
    Catalog::with_reporter(settings(&server.url()), RecordingReporter::default()).unwrap()
}

#[tokio::test]
async fn get_tools_normalizes_and_preserves_upstream_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", format!("/tables/{}/records", TOOLS_TABLE).as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("viewId".into(), "vw_tools".into()),
            Matcher::UrlEncoded("limit".into(), "100".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "list": [
                    { "Id": "1", "Name": "Acme", "categories": "Writing", "slug": "acme" },
                    { "Id": "2", "Name": "Beta", "categories": "writing", "slug": "beta" },
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let tools = catalog(&server).get_tools().await;

    assert_eq!(tools.len(), 2);
    assert_eq!(tools[0].name, "Acme");
    assert_eq!(tools[1].name, "Beta");
    assert!(tools[0].advantage.is_empty());
    assert!(tools[0].inconvenient.is_empty());
    assert!(tools[1].advantage.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn get_tools_drops_records_without_id_and_reports_them() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", format!("/tables/{}/records", TOOLS_TABLE).as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({
                "list": [
                    { "Name": "No Identity" },
                    { "Id": "2", "Name": "Beta", "slug": "beta" },
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let catalog = catalog(&server);
    let tools = catalog.get_tools().await;

    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].id, "2");
    assert_eq!(catalog.reporter().events(), vec!["rejected:tool:id"]);
}

#[tokio::test]
async fn get_tool_by_slug_filters_on_slug() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", format!("/tables/{}/records", TOOLS_TABLE).as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("viewId".into(), "vw_tools".into()),
            Matcher::UrlEncoded("where".into(), "(slug,eq,acme)".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({ "list": [{ "Id": "1", "Name": "Acme", "slug": "acme" }] }).to_string(),
        )
        .create_async()
        .await;

    let tool = catalog(&server).get_tool_by_slug("acme").await;

    let tool = tool.expect("tool should resolve");
    assert_eq!(tool.id, "1");
    assert_eq!(tool.slug, "acme");
    mock.assert_async().await;
}

#[tokio::test]
async fn slug_lookups_resolve_to_none_on_empty_list() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", Matcher::Regex(r"^/tables/.+/records".into()))
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({ "list": [] }).to_string())
        .expect(2)
        .create_async()
        .await;

    let catalog = catalog(&server);
    assert!(catalog.get_tool_by_slug("ghost").await.is_none());
    assert!(catalog.get_blog_post_by_slug("ghost").await.is_none());
}

#[tokio::test]
async fn metacharacter_slug_is_refused_without_a_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(r"^/tables/.+/records".into()))
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let catalog = catalog(&server);
    let tool = catalog.get_tool_by_slug("acme),(id,gt,0").await;

    assert!(tool.is_none());
    assert_eq!(
        catalog.reporter().events(),
        vec!["refused:get_tool_by_slug:acme),(id,gt,0"]
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn transport_failure_recovers_to_empty_results() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", Matcher::Regex(r"^/tables/.+/records".into()))
        .match_query(Matcher::Any)
        .with_status(500)
        .expect(2)
        .create_async()
        .await;

    let catalog = catalog(&server);
    let tools = catalog.get_tools().await;
    let tool = catalog.get_tool_by_slug("acme").await;

    assert!(tools.is_empty());
    assert!(tool.is_none());
    let events = catalog.reporter().events();
    assert_eq!(events.len(), 2);
    assert!(events[0].starts_with("transport:get_tools:"));
    assert!(events[1].starts_with("transport:get_tool_by_slug:"));
}

#[tokio::test]
async fn get_alternatives_matches_category_case_insensitively() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", format!("/tables/{}/records", TOOLS_TABLE).as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({
                "list": [
                    { "Id": "1", "Name": "Acme", "categories": "Writing", "slug": "acme" },
                    { "Id": "2", "Name": "Beta", "categories": "writing", "slug": "beta" },
                    { "Id": "3", "Name": "Gamma", "categories": "Video", "slug": "gamma" },
                ]
            })
            .to_string(),
        )
        .expect(2)
        .create_async()
        .await;

    let catalog = catalog(&server);
    let acme = catalog.get_tools().await[0].clone();
    let alternatives = catalog.get_alternatives(&acme).await;

    assert_eq!(alternatives.len(), 1);
    assert_eq!(alternatives[0].name, "Beta");
}

#[tokio::test]
async fn get_alternatives_excludes_self_and_caps_at_three() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", format!("/tables/{}/records", TOOLS_TABLE).as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({
                "list": [
                    { "Id": "1", "Name": "Self", "categories": "AI", "slug": "self" },
                    { "Id": "2", "Name": "A", "categories": "ai", "slug": "a" },
                    { "Id": "3", "Name": "B", "categories": "AI", "slug": "b" },
                    { "Id": "4", "Name": "C", "categories": "Ai", "slug": "c" },
                    { "Id": "5", "Name": "D", "categories": "aI", "slug": "d" },
                ]
            })
            .to_string(),
        )
        .expect(2)
        .create_async()
        .await;

    let catalog = catalog(&server);
    let this_tool = catalog.get_tools().await[0].clone();
    let alternatives = catalog.get_alternatives(&this_tool).await;

    assert_eq!(alternatives.len(), 3);
    let names: Vec<_> = alternatives.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn get_blog_posts_excludes_invalid_records() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", format!("/tables/{}/records", POSTS_TABLE).as_str())
        .match_query(Matcher::AllOf(vec![Matcher::UrlEncoded(
            "viewId".into(),
            "vw_posts".into(),
        )]))
        .with_status(200)
        .with_body(
            json!({
                "list": [
                    {
                        "title": "Valid",
                        "content": "body",
                        "banner_url": "https://cdn.example.com/v.png",
                        "category": "Guides",
                        "slug": "valid",
                    },
                    { "title": "No slug", "content": "body",
                      "banner_url": "x", "category": "Guides" },
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let catalog = catalog(&server);
    let posts = catalog.get_blog_posts().await;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].slug, "valid");
    assert_eq!(catalog.reporter().events(), vec!["rejected:blog post:slug"]);
}
