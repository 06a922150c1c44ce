// src/report.rs
use crate::error::FetchError;
use crate::normalize::ValidationError;
use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Tool,
    BlogPost,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Tool => "tool",
            RecordKind::BlogPost => "blog post",
        }
    }
}

/// Diagnostic sink for failures the query layer recovers from. Injected so
/// tests can assert on reported events instead of scraping log output.
pub trait Reporter: Send + Sync {
    /// The upstream store could not be reached or returned an error status.
    fn transport_failure(&self, operation: &str, error: &FetchError);

    /// A raw record failed its required-field schema and was skipped.
    fn record_rejected(&self, kind: RecordKind, error: &ValidationError);

    /// A slug lookup was refused before reaching the network, because the
    /// slug would not survive interpolation into a filter expression.
    fn lookup_refused(&self, operation: &str, slug: &str);
}

/// Default sink, forwarding to the `log` facade.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn transport_failure(&self, operation: &str, error: &FetchError) {
        warn!("{}: upstream fetch failed: {}", operation, error);
    }

    fn record_rejected(&self, kind: RecordKind, error: &ValidationError) {
        debug!("dropping invalid {} record: {}", kind.as_str(), error);
    }

    fn lookup_refused(&self, operation: &str, slug: &str) {
        warn!(
            "{}: slug {:?} contains filter metacharacters, treating as not found",
            operation, slug
        );
    }
}
