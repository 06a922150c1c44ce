// src/lib.rs
pub mod catalog;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod normalize;
pub mod report;

pub use catalog::Catalog;
pub use config::Settings;
pub use domain::{BlogPost, FaqEntry, Tool};
pub use error::FetchError;
