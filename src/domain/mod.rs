pub mod blog_post;
pub mod tool;

pub use blog_post::BlogPost;
pub use tool::Tool;

use serde::{Deserialize, Serialize};

/// One question/answer pair from a record's FAQ field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}
