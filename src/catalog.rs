// src/catalog.rs
use crate::client::{RecordClient, RecordQuery};
use crate::config::Settings;
use crate::domain::{BlogPost, Tool};
use crate::error::FetchError;
use crate::normalize::{normalize_blog_post, normalize_tool};
use crate::report::{LogReporter, RecordKind, Reporter};
use serde_json::Value;

/// Fixed upstream page size; the catalog stays well under this.
const PAGE_SIZE: u32 = 100;
/// Cap on cross-recommended tools.
const MAX_ALTERNATIVES: usize = 3;

/// Read-side query operations over the record store. Every operation is a
/// stateless request/normalize/return cycle; transport and validation
/// failures are reported to the `Reporter` and surfaced to callers only as
/// empty or absent results.
pub struct Catalog<R: Reporter = LogReporter> {
    client: RecordClient,
    settings: Settings,
    reporter: R,
}

impl Catalog<LogReporter> {
    pub fn new(settings: Settings) -> Result<Self, FetchError> {
        Self::with_reporter(settings, LogReporter)
    }
}

impl<R: Reporter> Catalog<R> {
    pub fn with_reporter(settings: Settings, reporter: R) -> Result<Self, FetchError> {
        let client = RecordClient::new(
            &settings.base_url,
            &settings.api_token,
            !settings.is_production(),
        )?;
        Ok(Self {
            client,
            settings,
            reporter,
        })
    }

    /// Access to the injected diagnostic sink.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// All tools, in upstream order, invalid records dropped. Transport
    /// failure yields an empty list, never an error.
    pub async fn get_tools(&self) -> Vec<Tool> {
        self.fetch_page(
            "get_tools",
            &self.settings.tools_table_id,
            &self.settings.tools_view_id,
            None,
        )
        .await
        .iter()
        .filter_map(|record| self.accept_tool(record))
        .collect()
    }

    pub async fn get_tool_by_slug(&self, slug: &str) -> Option<Tool> {
        let filter = self.slug_filter("get_tool_by_slug", slug)?;
        let records = self
            .fetch_page(
                "get_tool_by_slug",
                &self.settings.tools_table_id,
                &self.settings.tools_view_id,
                Some(filter),
            )
            .await;
        self.accept_tool(records.first()?)
    }

    /// All blog posts, in upstream order, invalid records dropped.
    pub async fn get_blog_posts(&self) -> Vec<BlogPost> {
        self.fetch_page(
            "get_blog_posts",
            &self.settings.posts_table_id,
            &self.settings.posts_view_id,
            None,
        )
        .await
        .iter()
        .filter_map(|record| self.accept_blog_post(record))
        .collect()
    }

    pub async fn get_blog_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        let filter = self.slug_filter("get_blog_post_by_slug", slug)?;
        let records = self
            .fetch_page(
                "get_blog_post_by_slug",
                &self.settings.posts_table_id,
                &self.settings.posts_view_id,
                Some(filter),
            )
            .await;
        self.accept_blog_post(records.first()?)
    }

    /// Up to three other tools sharing `tool`'s category, matched
    /// case-insensitively, in list order. Linear scan over one page.
    pub async fn get_alternatives(&self, tool: &Tool) -> Vec<Tool> {
        self.get_tools()
            .await
            .into_iter()
            .filter(|candidate| {
                candidate.id != tool.id
                    && candidate.categories.eq_ignore_ascii_case(&tool.categories)
            })
            .take(MAX_ALTERNATIVES)
            .collect()
    }

    async fn fetch_page(
        &self,
        operation: &str,
        table_id: &str,
        view_id: &str,
        where_clause: Option<String>,
    ) -> Vec<Value> {
        let query = RecordQuery {
            view_id,
            where_clause,
            limit: PAGE_SIZE,
        };
        match self.client.fetch_records(table_id, &query).await {
            Ok(records) => records,
            Err(error) => {
                self.reporter.transport_failure(operation, &error);
                Vec::new()
            }
        }
    }

    fn accept_tool(&self, record: &Value) -> Option<Tool> {
        match normalize_tool(record) {
            Ok(tool) => Some(tool),
            Err(error) => {
                self.reporter.record_rejected(RecordKind::Tool, &error);
                None
            }
        }
    }

    fn accept_blog_post(&self, record: &Value) -> Option<BlogPost> {
        match normalize_blog_post(record) {
            Ok(post) => Some(post),
            Err(error) => {
                self.reporter.record_rejected(RecordKind::BlogPost, &error);
                None
            }
        }
    }

    /// Build `(slug,eq,...)`, refusing slugs that cannot be interpolated
    /// into the filter syntax without changing its meaning. A refused slug
    /// resolves to "not found" without touching the network.
    fn slug_filter(&self, operation: &str, slug: &str) -> Option<String> {
        if slug.is_empty() || !slug.bytes().all(is_slug_byte) {
            self.reporter.lookup_refused(operation, slug);
            return None;
        }
        Some(format!("(slug,eq,{})", slug))
    }
}

fn is_slug_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}
